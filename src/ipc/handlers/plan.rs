use crate::db;
use crate::generator::{self, PlanDocument, PlanInput};
use crate::ipc::error::{err, ok};
use crate::ipc::types::{AppState, Request};
use crate::remote::{self, HttpPlanTextApi, PlanTextApi};
use rusqlite::Connection;
use serde_json::json;
use std::time::Duration;

#[derive(Clone, Debug)]
struct GeneratorSetupDefaults {
    simulated_latency_ms: u64,
    remote_enabled: bool,
    remote_endpoint: String,
    remote_timeout_ms: u64,
}

fn load_generator_setup_defaults(conn: &Connection) -> GeneratorSetupDefaults {
    let obj = db::settings_get_json(conn, "setup.generator")
        .ok()
        .flatten()
        .and_then(|v| v.as_object().cloned())
        .unwrap_or_default();
    let simulated_latency_ms = obj
        .get("simulatedLatencyMs")
        .and_then(|v| v.as_u64())
        .filter(|v| *v <= 10_000)
        .unwrap_or(1000);
    let remote_enabled = obj
        .get("remoteEnabled")
        .and_then(|v| v.as_bool())
        .unwrap_or(false);
    let remote_endpoint = obj
        .get("remoteEndpoint")
        .and_then(|v| v.as_str())
        .map(|s| s.trim().to_string())
        .unwrap_or_default();
    let remote_timeout_ms = obj
        .get("remoteTimeoutMs")
        .and_then(|v| v.as_u64())
        .filter(|v| (1000..=60_000).contains(v))
        .unwrap_or(8000);
    GeneratorSetupDefaults {
        simulated_latency_ms,
        remote_enabled,
        remote_endpoint,
        remote_timeout_ms,
    }
}

fn db_conn<'a>(state: &'a AppState, req: &Request) -> Result<&'a Connection, serde_json::Value> {
    state
        .db
        .as_ref()
        .ok_or_else(|| err(&req.id, "no_workspace", "select a workspace first", None))
}

fn parse_plan_input(req: &Request) -> Result<PlanInput, serde_json::Value> {
    let Some(obj) = req.params.get("input").and_then(|v| v.as_object()) else {
        return Err(err(&req.id, "bad_params", "missing input", None));
    };
    let field = |key: &str| -> Result<String, serde_json::Value> {
        obj.get(key)
            .and_then(|v| v.as_str())
            .map(|v| v.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| err(&req.id, "bad_params", format!("missing input.{}", key), None))
    };
    Ok(PlanInput {
        subject: field("subject")?,
        grade: field("grade")?,
        lesson_title: field("lessonTitle")?,
        date: field("date")?,
        teacher_name: field("teacherName")?,
    })
}

fn handle_plan_generate(state: &mut AppState, req: &Request) -> serde_json::Value {
    let conn = match db_conn(state, req) {
        Ok(c) => c,
        Err(e) => return e,
    };
    let input = match parse_plan_input(req) {
        Ok(v) => v,
        Err(e) => return e,
    };
    let defaults = load_generator_setup_defaults(conn);

    // The browser app paused on a spinner before showing the preview; the
    // pause is part of the product, kept configurable here.
    if defaults.simulated_latency_ms > 0 {
        std::thread::sleep(Duration::from_millis(defaults.simulated_latency_ms));
    }

    let plan = if defaults.remote_enabled && !defaults.remote_endpoint.is_empty() {
        match HttpPlanTextApi::new(&defaults.remote_endpoint, defaults.remote_timeout_ms) {
            Ok(api) => remote::generate_with_fallback(Some(&api as &dyn PlanTextApi), &input),
            Err(_) => generator::generate_plan(&input),
        }
    } else {
        generator::generate_plan(&input)
    };

    let input_value = match serde_json::to_value(&input) {
        Ok(v) => v,
        Err(e) => return err(&req.id, "serialize_failed", e.to_string(), None),
    };
    let plan_value = match serde_json::to_value(&plan) {
        Ok(v) => v,
        Err(e) => return err(&req.id, "serialize_failed", e.to_string(), None),
    };
    if let Err(e) = db::snapshot_set_json(conn, db::SNAPSHOT_PLAN_INPUT, &input_value) {
        return err(&req.id, "db_update_failed", e.to_string(), None);
    }
    if let Err(e) = db::snapshot_set_json(conn, db::SNAPSHOT_PLAN_DOCUMENT, &plan_value) {
        return err(&req.id, "db_update_failed", e.to_string(), None);
    }

    ok(&req.id, json!({ "plan": plan_value }))
}

fn handle_plan_input_save(state: &mut AppState, req: &Request) -> serde_json::Value {
    let conn = match db_conn(state, req) {
        Ok(c) => c,
        Err(e) => return e,
    };
    let input = match parse_plan_input(req) {
        Ok(v) => v,
        Err(e) => return e,
    };
    let value = match serde_json::to_value(&input) {
        Ok(v) => v,
        Err(e) => return err(&req.id, "serialize_failed", e.to_string(), None),
    };
    if let Err(e) = db::snapshot_set_json(conn, db::SNAPSHOT_PLAN_INPUT, &value) {
        return err(&req.id, "db_update_failed", e.to_string(), None);
    }
    ok(&req.id, json!({ "ok": true }))
}

fn handle_plan_input_load(state: &mut AppState, req: &Request) -> serde_json::Value {
    let conn = match db_conn(state, req) {
        Ok(c) => c,
        Err(e) => return e,
    };
    match db::snapshot_get_json(conn, db::SNAPSHOT_PLAN_INPUT) {
        Ok(Some(input)) => ok(&req.id, json!({ "input": input })),
        Ok(None) => err(&req.id, "not_found", "no saved form data", None),
        Err(e) => err(&req.id, "db_query_failed", e.to_string(), None),
    }
}

fn parse_plan_document(req: &Request) -> Result<PlanDocument, serde_json::Value> {
    let Some(raw) = req.params.get("plan") else {
        return Err(err(&req.id, "bad_params", "missing plan", None));
    };
    serde_json::from_value::<PlanDocument>(raw.clone())
        .map_err(|e| err(&req.id, "bad_params", format!("invalid plan: {}", e), None))
}

fn handle_plan_save(state: &mut AppState, req: &Request) -> serde_json::Value {
    let conn = match db_conn(state, req) {
        Ok(c) => c,
        Err(e) => return e,
    };
    let plan = match parse_plan_document(req) {
        Ok(v) => v,
        Err(e) => return e,
    };
    // Preview edits replace the document wholesale; a document with blanked
    // fields would break the print template downstream, so reject it here.
    let missing = generator::missing_fields(&plan);
    if !missing.is_empty() {
        return err(
            &req.id,
            "incomplete_plan",
            "plan has missing or empty fields",
            Some(json!({ "missing": missing })),
        );
    }
    let value = match serde_json::to_value(&plan) {
        Ok(v) => v,
        Err(e) => return err(&req.id, "serialize_failed", e.to_string(), None),
    };
    if let Err(e) = db::snapshot_set_json(conn, db::SNAPSHOT_PLAN_DOCUMENT, &value) {
        return err(&req.id, "db_update_failed", e.to_string(), None);
    }
    ok(&req.id, json!({ "ok": true }))
}

fn handle_plan_load(state: &mut AppState, req: &Request) -> serde_json::Value {
    let conn = match db_conn(state, req) {
        Ok(c) => c,
        Err(e) => return e,
    };
    match db::snapshot_get_json(conn, db::SNAPSHOT_PLAN_DOCUMENT) {
        Ok(Some(plan)) => ok(&req.id, json!({ "plan": plan })),
        Ok(None) => err(&req.id, "not_found", "no generated plan", None),
        Err(e) => err(&req.id, "db_query_failed", e.to_string(), None),
    }
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "plan.generate" => Some(handle_plan_generate(state, req)),
        "plan.input.save" => Some(handle_plan_input_save(state, req)),
        "plan.input.load" => Some(handle_plan_input_load(state, req)),
        "plan.save" => Some(handle_plan_save(state, req)),
        "plan.load" => Some(handle_plan_load(state, req)),
        _ => None,
    }
}
