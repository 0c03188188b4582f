use crate::db;
use crate::generator::{self, PlanDocument};
use crate::ipc::error::{err, ok};
use crate::ipc::types::{AppState, Request};
use chrono::NaiveDate;
use rusqlite::Connection;
use serde_json::json;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Clone, Debug)]
struct ExportSetupDefaults {
    header_style: String,
    show_generated_at: bool,
}

fn load_export_setup_defaults(conn: &Connection) -> ExportSetupDefaults {
    let obj = db::settings_get_json(conn, "setup.export")
        .ok()
        .flatten()
        .and_then(|v| v.as_object().cloned())
        .unwrap_or_default();
    let header_style = obj
        .get("headerStyle")
        .and_then(|v| v.as_str())
        .map(|s| s.to_ascii_lowercase())
        .filter(|s| s == "classic" || s == "compact" || s == "minimal")
        .unwrap_or_else(|| "classic".to_string());
    let show_generated_at = obj
        .get("showGeneratedAt")
        .and_then(|v| v.as_bool())
        .unwrap_or(true);
    ExportSetupDefaults {
        header_style,
        show_generated_at,
    }
}

/// ISO dates become the day/month/year form the printed template shows;
/// anything else is kept as the teacher typed it.
fn display_date(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => raw.trim().to_string(),
    }
}

fn handle_export_pdf_model(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(conn) = state.db.as_ref() else {
        return err(&req.id, "no_workspace", "select a workspace first", None);
    };

    let plan_value = match db::snapshot_get_json(conn, db::SNAPSHOT_PLAN_DOCUMENT) {
        Ok(Some(v)) => v,
        Ok(None) => return err(&req.id, "not_found", "no generated plan to export", None),
        Err(e) => return err(&req.id, "db_query_failed", e.to_string(), None),
    };
    let plan: PlanDocument = match serde_json::from_value(plan_value.clone()) {
        Ok(v) => v,
        Err(e) => return err(&req.id, "bad_snapshot", format!("stored plan is invalid: {}", e), None),
    };

    // The PDF pipeline renders whatever it is given; the completeness
    // guarantee lives here.
    let missing = generator::missing_fields(&plan);
    if !missing.is_empty() {
        return err(
            &req.id,
            "incomplete_plan",
            "plan has missing or empty fields",
            Some(json!({ "missing": missing })),
        );
    }

    let defaults = load_export_setup_defaults(conn);
    let english = plan.is_english_template == Some(true);
    let document_title = if english {
        format!("Lesson Plan - {}", plan.lesson_title)
    } else {
        format!("خطة درس - {}", plan.lesson_title)
    };

    let mut model = json!({
        "plan": plan_value,
        "direction": if english { "ltr" } else { "rtl" },
        "documentTitle": document_title,
        "displayDate": display_date(&plan.date),
        "headerStyle": defaults.header_style,
    });
    if defaults.show_generated_at {
        let generated_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        model["generatedAt"] = json!(generated_at);
    }

    ok(&req.id, model)
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "export.pdfModel" => Some(handle_export_pdf_model(state, req)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_date_formats_iso_and_passes_through_freeform() {
        assert_eq!(display_date("2026-03-15"), "15/03/2026");
        assert_eq!(display_date(" 2026-01-02 "), "02/01/2026");
        assert_eq!(display_date("الأحد 15 آذار"), "الأحد 15 آذار");
    }
}
