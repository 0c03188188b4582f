
use serde_json::json;
use test_support::{request_err, request_ok, spawn_sidecar, temp_dir};

#[test]
fn generate_persists_snapshots_and_round_trips() {
    let workspace = temp_dir("lessonpland-plan-generate");
    let (_child, mut stdin, mut reader) = spawn_sidecar();

    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "workspace.select",
        json!({ "path": workspace.to_string_lossy() }),
    );
    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "2",
        "setup.update",
        json!({ "section": "generator", "patch": { "simulatedLatencyMs": 0 } }),
    );

    let generated = request_ok(
        &mut stdin,
        &mut reader,
        "3",
        "plan.generate",
        json!({
            "input": {
                "subject": "العلوم",
                "grade": "الصف الثامن",
                "lessonTitle": "القلب",
                "date": "2026-03-15",
                "teacherName": "أحمد خالد"
            }
        }),
    );
    let plan = generated.get("plan").cloned().expect("plan");
    assert_eq!(
        plan.get("lessonTitle").and_then(|v| v.as_str()),
        Some("القلب")
    );
    let objectives = plan
        .get("objectives")
        .and_then(|v| v.as_array())
        .cloned()
        .expect("objectives");
    assert_eq!(objectives.len(), 6);
    for objective in &objectives {
        assert!(objective.as_str().expect("string").contains("القلب"));
    }
    assert_eq!(
        plan.pointer("/materialsAndResources")
            .and_then(|v| v.as_array())
            .map(|a| a.len()),
        Some(5)
    );
    assert_eq!(
        plan.pointer("/procedures")
            .and_then(|v| v.as_array())
            .map(|a| a.len()),
        Some(6)
    );

    // Both snapshots were written and read back byte-for-byte equal.
    let input_back = request_ok(&mut stdin, &mut reader, "4", "plan.input.load", json!({}));
    assert_eq!(
        input_back.pointer("/input/teacherName").and_then(|v| v.as_str()),
        Some("أحمد خالد")
    );
    let plan_back = request_ok(&mut stdin, &mut reader, "5", "plan.load", json!({}));
    assert_eq!(plan_back.get("plan"), Some(&plan));
}

#[test]
fn preview_edit_replaces_the_whole_snapshot() {
    let workspace = temp_dir("lessonpland-plan-edit");
    let (_child, mut stdin, mut reader) = spawn_sidecar();

    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "workspace.select",
        json!({ "path": workspace.to_string_lossy() }),
    );
    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "2",
        "setup.update",
        json!({ "section": "generator", "patch": { "simulatedLatencyMs": 0 } }),
    );
    let generated = request_ok(
        &mut stdin,
        &mut reader,
        "3",
        "plan.generate",
        json!({
            "input": {
                "subject": "الرياضيات",
                "grade": "الصف الخامس",
                "lessonTitle": "الكسور",
                "date": "2026-04-10",
                "teacherName": "منى سالم"
            }
        }),
    );
    let mut plan = generated.get("plan").cloned().expect("plan");
    plan["objectives"][0] = json!("هدف معدل يدوياً عن الكسور");

    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "4",
        "plan.save",
        json!({ "plan": plan }),
    );
    let loaded = request_ok(&mut stdin, &mut reader, "5", "plan.load", json!({}));
    assert_eq!(
        loaded.pointer("/plan/objectives/0").and_then(|v| v.as_str()),
        Some("هدف معدل يدوياً عن الكسور")
    );

    // Blanking a required field must be rejected before it reaches the
    // print template.
    plan["priorLearning"] = json!("");
    let code = request_err(
        &mut stdin,
        &mut reader,
        "6",
        "plan.save",
        json!({ "plan": plan }),
    );
    assert_eq!(code, "incomplete_plan");
}

#[test]
fn english_subject_generates_the_english_shape() {
    let workspace = temp_dir("lessonpland-plan-english");
    let (_child, mut stdin, mut reader) = spawn_sidecar();

    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "workspace.select",
        json!({ "path": workspace.to_string_lossy() }),
    );
    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "2",
        "setup.update",
        json!({ "section": "generator", "patch": { "simulatedLatencyMs": 0 } }),
    );
    let generated = request_ok(
        &mut stdin,
        &mut reader,
        "3",
        "plan.generate",
        json!({
            "input": {
                "subject": "اللغة الإنجليزية",
                "grade": "الصف العاشر",
                "lessonTitle": "My Family",
                "date": "2026-05-01",
                "teacherName": "Rania Odeh"
            }
        }),
    );
    let plan = generated.get("plan").cloned().expect("plan");
    assert_eq!(
        plan.get("isEnglishTemplate").and_then(|v| v.as_bool()),
        Some(true)
    );
    assert_eq!(plan.get("grade").and_then(|v| v.as_str()), Some("Grade 10"));
    assert_eq!(
        plan.get("numberOfClasses").and_then(|v| v.as_str()),
        Some("5")
    );
}

#[test]
fn generate_rejects_partial_input() {
    let workspace = temp_dir("lessonpland-plan-badinput");
    let (_child, mut stdin, mut reader) = spawn_sidecar();

    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "workspace.select",
        json!({ "path": workspace.to_string_lossy() }),
    );
    let code = request_err(
        &mut stdin,
        &mut reader,
        "2",
        "plan.generate",
        json!({
            "input": {
                "subject": "العلوم",
                "grade": "الصف الثامن",
                "lessonTitle": "  ",
                "date": "2026-03-15",
                "teacherName": "أحمد خالد"
            }
        }),
    );
    assert_eq!(code, "bad_params");

    let code = request_err(&mut stdin, &mut reader, "3", "plan.load", json!({}));
    assert_eq!(code, "not_found");
}
