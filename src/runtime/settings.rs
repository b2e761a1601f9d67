use std::path::Path;

use crate::config::{Settings, resolve_config_path};

/// Settings plus where they came from and, on fallback, why.
pub struct LoadedSettings {
    pub settings: Settings,
    /// Config file that was read, or `"defaults"` when none was.
    pub source: String,
    pub fallback_reason: Option<String>,
}

/// Load and validate settings. Config is optional, so any failure falls back
/// to defaults instead of stopping startup.
pub fn load_settings() -> LoadedSettings {
    let result = Settings::load()
        .map_err(|e| format!("failed to load config: {e}"))
        .and_then(|s| match s.validate() {
            Ok(()) => Ok(s),
            Err(msg) => Err(format!("invalid config: {msg}")),
        });

    match result {
        Ok(settings) => LoadedSettings {
            settings,
            source: config_source(resolve_config_path().as_deref()),
            fallback_reason: None,
        },
        Err(reason) => LoadedSettings {
            settings: Settings::default(),
            source: config_source(None),
            fallback_reason: Some(reason),
        },
    }
}

/// The file backing the settings; a missing file means defaults were used.
fn config_source(path: Option<&Path>) -> String {
    match path {
        Some(p) if p.is_file() => p.display().to_string(),
        _ => "defaults".to_string(),
    }
}
