use serde::{Deserialize, Serialize};
use std::{fs, path::{Path, PathBuf}};

pub const DEFAULT_UPLOAD_DELAY_MS: u32 = 2000;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub enum UploaderKind {
    #[default]
    Mock,
    Backend,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
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

fn app_support_dir() -> PathBuf {
    // macOS: ~/Library/Application Support/vidrop
    // Linux: ~/.config/vidrop
    // Windows: %APPDATA%\vidrop
    dirs::config_dir().unwrap_or_else(|| dirs::home_dir().unwrap_or_default()).join("vidrop")
}

fn settings_path() -> PathBuf { app_support_dir().join("settings.json") }

pub fn load() -> Settings { load_from(&settings_path()) }

pub fn save(s: &Settings) -> Result<(), String> { save_to(&settings_path(), s) }

/// Reads settings at `p`; a missing file is created with defaults and a
/// corrupt one falls back to defaults.
pub fn load_from(p: &Path) -> Settings {
    match fs::read_to_string(p) {
        Ok(s) => serde_json::from_str(&s).unwrap_or_else(|e| {
            eprintln!("settings: ignoring unreadable {}: {}", p.display(), e);
            Settings::default()
        }),
        Err(_) => {
            let s = Settings::default();
            let _ = save_to(p, &s);
            s
        }
    }
}

pub fn save_to(p: &Path, s: &Settings) -> Result<(), String> {
    if let Some(parent) = p.parent() { fs::create_dir_all(parent).map_err(|e| e.to_string())?; }
    let body = serde_json::to_string_pretty(s).map_err(|e| e.to_string())?;
    fs::write(p, body).map_err(|e| e.to_string())
}
