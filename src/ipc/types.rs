use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use rusqlite::Connection;
use serde::Deserialize;

use crate::adnet::AdSlot;

#[derive(Debug, Deserialize, Clone)]
pub struct Request {
    pub id: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

/// Live ad slots and the loader-script dedup set. Slots exist only for the
/// lifetime of the process, like the widgets they mirror.
#[derive(Default)]
pub struct AdsRuntime {
    pub injected_scripts: HashSet<String>,
    pub slots: HashMap<String, AdSlot>,
}

pub struct AppState {
    pub workspace: Option<PathBuf>,
    pub db: Option<Connection>,
    pub ads: AdsRuntime,
}
