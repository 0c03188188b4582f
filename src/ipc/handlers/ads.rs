use crate::adnet::{AdSlot, SlotConfig, SlotEvent};
use crate::db;
use crate::ipc::error::{err, ok};
use crate::ipc::types::{AppState, Request};
use rusqlite::Connection;
use serde_json::{json, Map, Value as JsonValue};

#[derive(Clone, Debug)]
struct AdSetupDefaults {
    script_url: String,
    client_id: String,
    default_slot: String,
    default_format: String,
    responsive: bool,
    max_attempts: u32,
    retry_delay_ms: u64,
    retry_delay_growth_ms: u64,
    detect_ad_block: bool,
    show_fallback: bool,
    fallback_text: String,
}

impl Default for AdSetupDefaults {
    fn default() -> Self {
        AdSetupDefaults {
            script_url: "https://pagead2.googlesyndication.com/pagead/js/adsbygoogle.js?client=ca-pub-6062398972709628".to_string(),
            client_id: "ca-pub-6062398972709628".to_string(),
            default_slot: "5962076197".to_string(),
            default_format: "auto".to_string(),
            responsive: true,
            max_attempts: 3,
            retry_delay_ms: 1000,
            retry_delay_growth_ms: 1000,
            detect_ad_block: false,
            show_fallback: true,
            fallback_text: "مساحة إعلانية".to_string(),
        }
    }
}

/// Ads render on every page, including before a workspace is selected, so
/// missing settings fall back to the built-in defaults.
fn load_ad_setup_defaults(conn: Option<&Connection>) -> AdSetupDefaults {
    let mut defaults = AdSetupDefaults::default();
    let Some(conn) = conn else {
        return defaults;
    };
    let Some(obj) = db::settings_get_json(conn, "setup.ads")
        .ok()
        .flatten()
        .and_then(|v| v.as_object().cloned())
    else {
        return defaults;
    };
    if let Some(v) = obj.get("scriptUrl").and_then(|v| v.as_str()) {
        if !v.trim().is_empty() {
            defaults.script_url = v.trim().to_string();
        }
    }
    if let Some(v) = obj.get("clientId").and_then(|v| v.as_str()) {
        if !v.trim().is_empty() {
            defaults.client_id = v.trim().to_string();
        }
    }
    if let Some(v) = obj.get("defaultSlot").and_then(|v| v.as_str()) {
        if !v.trim().is_empty() {
            defaults.default_slot = v.trim().to_string();
        }
    }
    if let Some(v) = obj.get("defaultFormat").and_then(|v| v.as_str()) {
        if valid_format(v) {
            defaults.default_format = v.to_ascii_lowercase();
        }
    }
    if let Some(v) = obj.get("responsive").and_then(|v| v.as_bool()) {
        defaults.responsive = v;
    }
    if let Some(v) = obj.get("maxAttempts").and_then(|v| v.as_u64()) {
        if (1..=10).contains(&v) {
            defaults.max_attempts = v as u32;
        }
    }
    if let Some(v) = obj.get("retryDelayMs").and_then(|v| v.as_u64()) {
        if (100..=30_000).contains(&v) {
            defaults.retry_delay_ms = v;
        }
    }
    if let Some(v) = obj.get("retryDelayGrowthMs").and_then(|v| v.as_u64()) {
        if v <= 30_000 {
            defaults.retry_delay_growth_ms = v;
        }
    }
    if let Some(v) = obj.get("detectAdBlock").and_then(|v| v.as_bool()) {
        defaults.detect_ad_block = v;
    }
    if let Some(v) = obj.get("showFallback").and_then(|v| v.as_bool()) {
        defaults.show_fallback = v;
    }
    if let Some(v) = obj.get("fallbackText").and_then(|v| v.as_str()) {
        defaults.fallback_text = v.to_string();
    }
    defaults
}

fn valid_format(s: &str) -> bool {
    matches!(
        s.to_ascii_lowercase().as_str(),
        "auto" | "rectangle" | "horizontal" | "vertical"
    )
}

fn slot_config(
    defaults: AdSetupDefaults,
    overrides: Option<&Map<String, JsonValue>>,
) -> Result<SlotConfig, String> {
    let mut config = SlotConfig {
        script_url: defaults.script_url,
        client_id: defaults.client_id,
        slot: defaults.default_slot,
        format: defaults.default_format,
        responsive: defaults.responsive,
        show_fallback: defaults.show_fallback,
        fallback_text: defaults.fallback_text,
        max_attempts: defaults.max_attempts,
        retry_delay_ms: defaults.retry_delay_ms,
        retry_delay_growth_ms: defaults.retry_delay_growth_ms,
        detect_ad_block: defaults.detect_ad_block,
    };
    let Some(overrides) = overrides else {
        return Ok(config);
    };
    for (k, v) in overrides {
        match k.as_str() {
            "slot" => {
                let s = v.as_str().map(str::trim).unwrap_or("");
                if s.is_empty() {
                    return Err("config.slot must be a non-empty string".into());
                }
                config.slot = s.to_string();
            }
            "format" => {
                let Some(s) = v.as_str().filter(|s| valid_format(s)) else {
                    return Err(
                        "config.format must be one of: auto, rectangle, horizontal, vertical"
                            .into(),
                    );
                };
                config.format = s.to_ascii_lowercase();
            }
            "responsive" => {
                config.responsive = v
                    .as_bool()
                    .ok_or("config.responsive must be boolean")?;
            }
            "showFallback" => {
                config.show_fallback = v
                    .as_bool()
                    .ok_or("config.showFallback must be boolean")?;
            }
            "fallbackText" => {
                config.fallback_text = v
                    .as_str()
                    .ok_or("config.fallbackText must be string")?
                    .to_string();
            }
            "maxAttempts" => {
                let n = v.as_u64().filter(|n| (1..=10).contains(n));
                config.max_attempts =
                    n.ok_or("config.maxAttempts must be in 1..=10")? as u32;
            }
            "retryDelayMs" => {
                let n = v.as_u64().filter(|n| (100..=30_000).contains(n));
                config.retry_delay_ms = n.ok_or("config.retryDelayMs must be in 100..=30000")?;
            }
            "retryDelayGrowthMs" => {
                let n = v.as_u64().filter(|n| *n <= 30_000);
                config.retry_delay_growth_ms =
                    n.ok_or("config.retryDelayGrowthMs must be in 0..=30000")?;
            }
            "detectAdBlock" => {
                config.detect_ad_block = v
                    .as_bool()
                    .ok_or("config.detectAdBlock must be boolean")?;
            }
            _ => return Err(format!("unknown config field: {}", k)),
        }
    }
    Ok(config)
}

fn handle_slot_create(state: &mut AppState, req: &Request) -> serde_json::Value {
    let defaults = load_ad_setup_defaults(state.db.as_ref());
    let overrides = req.params.get("config").and_then(|v| v.as_object());
    let config = match slot_config(defaults, overrides) {
        Ok(v) => v,
        Err(m) => return err(&req.id, "bad_params", m, None),
    };

    let script_injected = state.ads.injected_scripts.contains(&config.script_url);
    let script_url = config.script_url.clone();
    let (slot, effects) = AdSlot::new(config, script_injected);
    if !script_injected {
        state.ads.injected_scripts.insert(script_url);
    }

    let slot_id = slot.id().to_string();
    let phase = slot.phase();
    state.ads.slots.insert(slot_id.clone(), slot);
    ok(
        &req.id,
        json!({
            "slotId": slot_id,
            "phase": phase,
            "effects": effects
        }),
    )
}

fn required_slot<'a>(
    state: &'a mut AppState,
    req: &Request,
) -> Result<&'a mut AdSlot, serde_json::Value> {
    let Some(slot_id) = req.params.get("slotId").and_then(|v| v.as_str()) else {
        return Err(err(&req.id, "bad_params", "missing slotId", None));
    };
    state
        .ads
        .slots
        .get_mut(slot_id)
        .ok_or_else(|| err(&req.id, "not_found", "ad slot not found", None))
}

fn handle_slot_event(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(event_raw) = req.params.get("event") else {
        return err(&req.id, "bad_params", "missing event", None);
    };
    let event: SlotEvent = match serde_json::from_value(event_raw.clone()) {
        Ok(v) => v,
        Err(e) => return err(&req.id, "bad_params", format!("invalid event: {}", e), None),
    };
    let req_id = req.id.clone();
    let slot = match required_slot(state, req) {
        Ok(s) => s,
        Err(e) => return e,
    };
    let effects = slot.handle(event);
    ok(
        &req_id,
        json!({
            "phase": slot.phase(),
            "attempts": slot.attempts(),
            "effects": effects
        }),
    )
}

fn handle_slot_status(state: &mut AppState, req: &Request) -> serde_json::Value {
    let req_id = req.id.clone();
    let slot = match required_slot(state, req) {
        Ok(s) => s,
        Err(e) => return e,
    };
    ok(
        &req_id,
        json!({
            "phase": slot.phase(),
            "attempts": slot.attempts(),
            "pendingTimer": slot.has_pending_timer()
        }),
    )
}

fn handle_slot_dispose(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(slot_id) = req.params.get("slotId").and_then(|v| v.as_str()) else {
        return err(&req.id, "bad_params", "missing slotId", None);
    };
    let Some(mut slot) = state.ads.slots.remove(slot_id) else {
        return err(&req.id, "not_found", "ad slot not found", None);
    };
    let effects = slot.teardown();
    ok(&req.id, json!({ "effects": effects }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "ads.slot.create" => Some(handle_slot_create(state, req)),
        "ads.slot.event" => Some(handle_slot_event(state, req)),
        "ads.slot.status" => Some(handle_slot_status(state, req)),
        "ads.slot.dispose" => Some(handle_slot_dispose(state, req)),
        _ => None,
    }
}
