use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::bridge;

pub const DEFAULT_UPLOAD_DELAY_MS: u32 = 2000;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
pub enum UploaderKind {
    #[default]
    Mock,
    Backend,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub upload_delay_ms: u32,
    pub uploader: UploaderKind,
    pub debug_logs: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            upload_delay_ms: DEFAULT_UPLOAD_DELAY_MS,
            uploader: UploaderKind::Mock,
            debug_logs: true,
        }
    }
}

/// Loads settings from the desktop shell; outside Tauri the defaults apply.
pub async fn load() -> Settings {
    match bridge::invoke::<(), Settings>("load_settings", None).await {
        Ok(s) => s,
        Err(e) => {
            gloo::console::warn!(format!("Using default settings: {e}"));
            Settings::default()
        }
    }
}

pub async fn save(settings: &Settings) -> Result<(), String> {
    bridge::invoke::<_, ()>("save_settings", Some(&json!({ "settings": settings })))
        .await
        .map_err(|e| e.to_string())
}
