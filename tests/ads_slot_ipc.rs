
use serde_json::json;
use test_support::{request_ok, spawn_sidecar, temp_dir};

fn effect_types(result: &serde_json::Value) -> Vec<String> {
    result
        .get("effects")
        .and_then(|v| v.as_array())
        .map(|arr| {
            arr.iter()
                .filter_map(|e| e.get("type").and_then(|t| t.as_str()))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn retry_token(result: &serde_json::Value) -> String {
    result
        .get("effects")
        .and_then(|v| v.as_array())
        .and_then(|arr| {
            arr.iter()
                .find(|e| e.get("type").and_then(|t| t.as_str()) == Some("scheduleRetry"))
        })
        .and_then(|e| e.get("token"))
        .and_then(|v| v.as_str())
        .expect("scheduled retry token")
        .to_string()
}

#[test]
fn slot_retries_then_settles_into_fallback() {
    let workspace = temp_dir("lessonpland-ads-fallback");
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
        json!({
            "section": "ads",
            "patch": { "maxAttempts": 2, "retryDelayMs": 500, "retryDelayGrowthMs": 250 }
        }),
    );

    let created = request_ok(&mut stdin, &mut reader, "3", "ads.slot.create", json!({}));
    let slot_id = created
        .get("slotId")
        .and_then(|v| v.as_str())
        .expect("slotId")
        .to_string();
    assert_eq!(
        created.get("phase").and_then(|v| v.as_str()),
        Some("scriptLoading")
    );
    assert_eq!(effect_types(&created), vec!["injectScript".to_string()]);

    // First failure schedules a retry at the configured base delay.
    let failed = request_ok(
        &mut stdin,
        &mut reader,
        "4",
        "ads.slot.event",
        json!({ "slotId": slot_id, "event": { "type": "scriptError" } }),
    );
    assert_eq!(failed.get("phase").and_then(|v| v.as_str()), Some("failed"));
    assert_eq!(
        failed
            .pointer("/effects/0/delayMs")
            .and_then(|v| v.as_u64()),
        Some(500)
    );
    let token = retry_token(&failed);

    let retried = request_ok(
        &mut stdin,
        &mut reader,
        "5",
        "ads.slot.event",
        json!({ "slotId": slot_id, "event": { "type": "retryTimerFired", "token": token } }),
    );
    assert_eq!(
        effect_types(&retried),
        vec!["clearSlot".to_string(), "createSlotElement".to_string()]
    );

    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "6",
        "ads.slot.event",
        json!({ "slotId": slot_id, "event": { "type": "slotReady" } }),
    );
    // Second failure exhausts maxAttempts=2 and settles into fallback.
    let fallen = request_ok(
        &mut stdin,
        &mut reader,
        "7",
        "ads.slot.event",
        json!({
            "slotId": slot_id,
            "event": { "type": "pushFailed", "reason": "adsbygoogle is not defined" }
        }),
    );
    assert_eq!(
        fallen.get("phase").and_then(|v| v.as_str()),
        Some("fallback")
    );
    assert!(effect_types(&fallen).contains(&"showFallback".to_string()));

    // Terminal state: no further effects for any event.
    let after = request_ok(
        &mut stdin,
        &mut reader,
        "8",
        "ads.slot.event",
        json!({ "slotId": slot_id, "event": { "type": "scriptLoaded" } }),
    );
    assert_eq!(
        after.get("phase").and_then(|v| v.as_str()),
        Some("fallback")
    );
    assert!(effect_types(&after).is_empty());

    let status = request_ok(
        &mut stdin,
        &mut reader,
        "9",
        "ads.slot.status",
        json!({ "slotId": slot_id }),
    );
    assert_eq!(status.get("attempts").and_then(|v| v.as_u64()), Some(2));
    assert_eq!(
        status.get("pendingTimer").and_then(|v| v.as_bool()),
        Some(false)
    );
}

#[test]
fn second_slot_reuses_the_injected_script() {
    let workspace = temp_dir("lessonpland-ads-dedup");
    let (_child, mut stdin, mut reader) = spawn_sidecar();

    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "workspace.select",
        json!({ "path": workspace.to_string_lossy() }),
    );

    let first = request_ok(&mut stdin, &mut reader, "2", "ads.slot.create", json!({}));
    assert_eq!(effect_types(&first), vec!["injectScript".to_string()]);

    let second = request_ok(
        &mut stdin,
        &mut reader,
        "3",
        "ads.slot.create",
        json!({ "config": { "slot": "1234567890", "format": "rectangle" } }),
    );
    // The loader tag is never duplicated; the second slot starts at element
    // creation with its own slot attributes.
    assert_eq!(
        effect_types(&second),
        vec!["createSlotElement".to_string()]
    );
    assert_eq!(
        second.get("phase").and_then(|v| v.as_str()),
        Some("slotCreated")
    );
    assert_eq!(
        second.pointer("/effects/0/slot").and_then(|v| v.as_str()),
        Some("1234567890")
    );
    assert_eq!(
        second.pointer("/effects/0/format").and_then(|v| v.as_str()),
        Some("rectangle")
    );
}

#[test]
fn dispose_cancels_a_pending_retry_timer() {
    let workspace = temp_dir("lessonpland-ads-dispose");
    let (_child, mut stdin, mut reader) = spawn_sidecar();

    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "workspace.select",
        json!({ "path": workspace.to_string_lossy() }),
    );
    let created = request_ok(&mut stdin, &mut reader, "2", "ads.slot.create", json!({}));
    let slot_id = created
        .get("slotId")
        .and_then(|v| v.as_str())
        .expect("slotId")
        .to_string();

    let failed = request_ok(
        &mut stdin,
        &mut reader,
        "3",
        "ads.slot.event",
        json!({ "slotId": slot_id, "event": { "type": "scriptError" } }),
    );
    let token = retry_token(&failed);

    let disposed = request_ok(
        &mut stdin,
        &mut reader,
        "4",
        "ads.slot.dispose",
        json!({ "slotId": slot_id }),
    );
    assert_eq!(
        disposed.pointer("/effects/0/type").and_then(|v| v.as_str()),
        Some("cancelTimer")
    );
    assert_eq!(
        disposed.pointer("/effects/0/token").and_then(|v| v.as_str()),
        Some(token.as_str())
    );
}

#[test]
fn ad_block_detection_goes_straight_to_fallback() {
    let workspace = temp_dir("lessonpland-ads-adblock");
    let (_child, mut stdin, mut reader) = spawn_sidecar();

    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "workspace.select",
        json!({ "path": workspace.to_string_lossy() }),
    );
    let created = request_ok(
        &mut stdin,
        &mut reader,
        "2",
        "ads.slot.create",
        json!({ "config": { "detectAdBlock": true } }),
    );
    let slot_id = created
        .get("slotId")
        .and_then(|v| v.as_str())
        .expect("slotId")
        .to_string();

    let blocked = request_ok(
        &mut stdin,
        &mut reader,
        "3",
        "ads.slot.event",
        json!({ "slotId": slot_id, "event": { "type": "adBlockDetected" } }),
    );
    assert_eq!(
        blocked.get("phase").and_then(|v| v.as_str()),
        Some("fallback")
    );
    assert_eq!(blocked.get("attempts").and_then(|v| v.as_u64()), Some(0));
}
