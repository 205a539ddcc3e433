//! Configuration file handling for DORA
//!
//! User defaults live in `settings.toml`:
//! - in the file named by `DORA_CONFIG`, when set
//! - otherwise in `<config dir>/dora/settings.toml` (XDG on Linux,
//!   Application Support on macOS, AppData on Windows)

pub mod settings;

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, config};

pub use settings::Settings;

/// Environment variable overriding the settings file location
pub const CONFIG_ENV: &str = "DORA_CONFIG";

/// Settings subdirectory under the platform config directory
const CONFIG_DIR: &str = "dora";

/// Settings file name
pub const SETTINGS_FILE: &str = "settings.toml";

/// Settings shipped with the executable
pub const BUNDLED_SETTINGS: &str = include_str!("../../assets/settings.toml");

/// Get the settings file path
pub fn settings_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        return Ok(PathBuf::from(path));
    }

    let base = dirs::config_dir()
        .ok_or_else(|| config::location("no configuration directory for this platform"))?;

    Ok(base.join(CONFIG_DIR).join(SETTINGS_FILE))
}

/// Read settings from a TOML file. A missing file yields the bundled defaults.
pub fn read_settings(path: &Path) -> Result<Settings> {
    if !path.exists() {
        debug!(path = %path.display(), "settings file missing, using defaults");
        return bundled_settings();
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| config::parse_failed(path.display().to_string(), e.to_string()))?;

    toml::from_str(&content)
        .map_err(|e| config::parse_failed(path.display().to_string(), e.to_string()))
}

/// Save settings to a TOML file, creating its folder if needed
pub fn save_settings(path: &Path, settings: &Settings) -> Result<()> {
    let content = toml::to_string_pretty(settings)?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| config::write_failed(path.display().to_string(), e.to_string()))?;
    }

    std::fs::write(path, content)
        .map_err(|e| config::write_failed(path.display().to_string(), e.to_string()))?;

    debug!(path = %path.display(), "settings saved");
    Ok(())
}

/// Settings parsed from the bundled `assets/settings.toml`
pub fn bundled_settings() -> Result<Settings> {
    toml::from_str(BUNDLED_SETTINGS)
        .map_err(|e| config::parse_failed("<bundled settings>", e.to_string()))
}
