use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/rhythm/config.toml` or `~/.config/rhythm/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `RHYTHM__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub ui: UiSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,

    /// Tab selected when the app starts.
    pub start_tab: TabSetting,

    /// Separator placed between title and artist in result popups.
    ///
    /// Example: " by " -> "Perfect by Ed Sheeran"
    pub result_separator: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: "Rhythm".to_string(),
            start_tab: TabSetting::Mood,
            result_separator: " by ".to_string(),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TabSetting {
    #[serde(alias = "moods", alias = "mood-songs")]
    Mood,
    #[serde(alias = "favourites")]
    Favorites,
    Search,
    #[serde(alias = "genre")]
    Genres,
    #[serde(alias = "playlist")]
    Playlists,
    #[serde(alias = "recommended-artists")]
    Artists,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub level: String,
    /// Log file path. Logging is off when unset since the TUI owns the terminal.
    pub file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}
