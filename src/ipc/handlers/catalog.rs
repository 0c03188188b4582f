use crate::ipc::error::ok;
use crate::ipc::types::{AppState, Request};
use crate::templates::{GRADES, SUBJECTS};
use serde_json::json;

fn handle_catalog_get(req: &Request) -> serde_json::Value {
    ok(
        &req.id,
        json!({
            "subjects": SUBJECTS,
            "grades": GRADES
        }),
    )
}

pub fn try_handle(_state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "catalog.get" => Some(handle_catalog_get(req)),
        _ => None,
    }
}
