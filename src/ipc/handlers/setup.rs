use crate::db;
use crate::ipc::error::{err, ok};
use crate::ipc::types::{AppState, Request};
use serde_json::{json, Map, Value};

#[derive(Clone, Copy)]
enum SetupSection {
    Generator,
    Ads,
    Export,
}

impl SetupSection {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "generator" => Some(Self::Generator),
            "ads" => Some(Self::Ads),
            "export" => Some(Self::Export),
            _ => None,
        }
    }

    fn key(self) -> &'static str {
        match self {
            Self::Generator => "setup.generator",
            Self::Ads => "setup.ads",
            Self::Export => "setup.export",
        }
    }
}

fn default_section(section: SetupSection) -> Value {
    match section {
        SetupSection::Generator => json!({
            "simulatedLatencyMs": 1000,
            "remoteEnabled": false,
            "remoteEndpoint": "",
            "remoteTimeoutMs": 8000
        }),
        SetupSection::Ads => json!({
            "scriptUrl": "https://pagead2.googlesyndication.com/pagead/js/adsbygoogle.js?client=ca-pub-6062398972709628",
            "clientId": "ca-pub-6062398972709628",
            "defaultSlot": "5962076197",
            "defaultFormat": "auto",
            "responsive": true,
            "maxAttempts": 3,
            "retryDelayMs": 1000,
            "retryDelayGrowthMs": 1000,
            "detectAdBlock": false,
            "showFallback": true,
            "fallbackText": "مساحة إعلانية"
        }),
        SetupSection::Export => json!({
            "headerStyle": "classic",
            "showGeneratedAt": true
        }),
    }
}

fn as_object_mut(value: &mut Value) -> Result<&mut Map<String, Value>, String> {
    value
        .as_object_mut()
        .ok_or_else(|| "internal setup object must be a JSON object".to_string())
}

fn parse_bool(v: &Value, key: &str) -> Result<bool, String> {
    v.as_bool()
        .ok_or_else(|| format!("{} must be boolean", key))
}

fn parse_i64_range(v: &Value, key: &str, min: i64, max: i64) -> Result<i64, String> {
    let n = v
        .as_i64()
        .ok_or_else(|| format!("{} must be integer", key))?;
    if !(min..=max).contains(&n) {
        return Err(format!("{} must be in {}..={}", key, min, max));
    }
    Ok(n)
}

fn parse_string_max(v: &Value, key: &str, max_len: usize) -> Result<String, String> {
    let s = v.as_str().ok_or_else(|| format!("{} must be string", key))?;
    let s = s.trim();
    if s.len() > max_len {
        return Err(format!("{} length must be <= {}", key, max_len));
    }
    Ok(s.to_string())
}

fn merge_section_patch(
    section: SetupSection,
    current: &mut Value,
    patch: &Map<String, Value>,
) -> Result<(), String> {
    let obj = as_object_mut(current)?;
    for (k, v) in patch {
        match section {
            SetupSection::Generator => match k.as_str() {
                "simulatedLatencyMs" => {
                    obj.insert(k.clone(), Value::from(parse_i64_range(v, k, 0, 10_000)?));
                }
                "remoteEnabled" => {
                    obj.insert(k.clone(), Value::Bool(parse_bool(v, k)?));
                }
                "remoteEndpoint" => {
                    obj.insert(k.clone(), Value::String(parse_string_max(v, k, 400)?));
                }
                "remoteTimeoutMs" => {
                    obj.insert(k.clone(), Value::from(parse_i64_range(v, k, 1000, 60_000)?));
                }
                _ => return Err(format!("unknown generator field: {}", k)),
            },
            SetupSection::Ads => match k.as_str() {
                "scriptUrl" => {
                    let s = parse_string_max(v, k, 400)?;
                    if s.is_empty() {
                        return Err("scriptUrl must not be empty".into());
                    }
                    obj.insert(k.clone(), Value::String(s));
                }
                "clientId" => {
                    let s = parse_string_max(v, k, 64)?;
                    if s.is_empty() {
                        return Err("clientId must not be empty".into());
                    }
                    obj.insert(k.clone(), Value::String(s));
                }
                "defaultSlot" => {
                    let s = parse_string_max(v, k, 32)?;
                    if s.is_empty() {
                        return Err("defaultSlot must not be empty".into());
                    }
                    obj.insert(k.clone(), Value::String(s));
                }
                "defaultFormat" => {
                    let f = parse_string_max(v, k, 16)?.to_ascii_lowercase();
                    if f != "auto" && f != "rectangle" && f != "horizontal" && f != "vertical" {
                        return Err(
                            "defaultFormat must be one of: auto, rectangle, horizontal, vertical"
                                .into(),
                        );
                    }
                    obj.insert(k.clone(), Value::String(f));
                }
                "responsive" | "detectAdBlock" | "showFallback" => {
                    obj.insert(k.clone(), Value::Bool(parse_bool(v, k)?));
                }
                "maxAttempts" => {
                    obj.insert(k.clone(), Value::from(parse_i64_range(v, k, 1, 10)?));
                }
                "retryDelayMs" => {
                    obj.insert(k.clone(), Value::from(parse_i64_range(v, k, 100, 30_000)?));
                }
                "retryDelayGrowthMs" => {
                    obj.insert(k.clone(), Value::from(parse_i64_range(v, k, 0, 30_000)?));
                }
                "fallbackText" => {
                    obj.insert(k.clone(), Value::String(parse_string_max(v, k, 200)?));
                }
                _ => return Err(format!("unknown ads field: {}", k)),
            },
            SetupSection::Export => match k.as_str() {
                "headerStyle" => {
                    let style = parse_string_max(v, k, 16)?.to_ascii_lowercase();
                    if style != "compact" && style != "classic" && style != "minimal" {
                        return Err(
                            "headerStyle must be one of: compact, classic, minimal".into(),
                        );
                    }
                    obj.insert(k.clone(), Value::String(style));
                }
                "showGeneratedAt" => {
                    obj.insert(k.clone(), Value::Bool(parse_bool(v, k)?));
                }
                _ => return Err(format!("unknown export field: {}", k)),
            },
        }
    }
    Ok(())
}

fn load_section(conn: &rusqlite::Connection, section: SetupSection) -> anyhow::Result<Value> {
    let mut current = default_section(section);
    if let Some(saved) = db::settings_get_json(conn, section.key())? {
        if let Some(saved_obj) = saved.as_object() {
            // Best-effort apply: malformed historical values should not block setup UI.
            let _ = merge_section_patch(section, &mut current, saved_obj);
        }
    }
    Ok(current)
}

fn handle_setup_get(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(conn) = state.db.as_ref() else {
        return err(&req.id, "no_workspace", "select a workspace first", None);
    };
    let generator = match load_section(conn, SetupSection::Generator) {
        Ok(v) => v,
        Err(e) => return err(&req.id, "db_query_failed", e.to_string(), None),
    };
    let ads = match load_section(conn, SetupSection::Ads) {
        Ok(v) => v,
        Err(e) => return err(&req.id, "db_query_failed", e.to_string(), None),
    };
    let export = match load_section(conn, SetupSection::Export) {
        Ok(v) => v,
        Err(e) => return err(&req.id, "db_query_failed", e.to_string(), None),
    };

    ok(
        &req.id,
        json!({
            "generator": generator,
            "ads": ads,
            "export": export
        }),
    )
}

fn handle_setup_update(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(conn) = state.db.as_ref() else {
        return err(&req.id, "no_workspace", "select a workspace first", None);
    };
    let Some(section_raw) = req.params.get("section").and_then(|v| v.as_str()) else {
        return err(&req.id, "bad_params", "missing section", None);
    };
    let Some(section) = SetupSection::parse(section_raw) else {
        return err(&req.id, "bad_params", "unknown section", None);
    };
    let Some(patch_obj) = req.params.get("patch").and_then(|v| v.as_object()) else {
        return err(&req.id, "bad_params", "patch must be an object", None);
    };

    let mut current = match load_section(conn, section) {
        Ok(v) => v,
        Err(e) => return err(&req.id, "db_query_failed", e.to_string(), None),
    };
    if let Err(msg) = merge_section_patch(section, &mut current, patch_obj) {
        return err(&req.id, "bad_params", msg, None);
    }
    if let Err(e) = db::settings_set_json(conn, section.key(), &current) {
        return err(&req.id, "db_update_failed", e.to_string(), None);
    }
    ok(&req.id, json!({ "ok": true }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "setup.get" => Some(handle_setup_get(state, req)),
        "setup.update" => Some(handle_setup_update(state, req)),
        _ => None,
    }
}
