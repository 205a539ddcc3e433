//! User settings stored in `settings.toml`

use serde::{Deserialize, Serialize};

use crate::error::{DoraError, Result, config};
use crate::template::{DEFAULT_FILE_STRUCTURE, DEFAULT_FOLDER_STRUCTURE, PathTemplate};

/// Names of all settings, in display order
pub const KEYS: &[&str] = &[
    "show_common_tags",
    "default_file_structure",
    "default_folder_structure",
];

/// User settings
///
/// Empty structure strings mean "use the built-in default".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Print the common DICOM tags as a hint when a template is rejected
    #[serde(alias = "enable_common_tags_buttons")]
    pub show_common_tags: bool,

    /// File name template used when `--file-structure` is not given
    pub default_file_structure: String,

    /// Folder template used when `--folder-structure` is not given
    pub default_folder_structure: String,
}

impl Settings {
    /// Effective file name template
    pub fn file_structure(&self) -> &str {
        if self.default_file_structure.is_empty() {
            DEFAULT_FILE_STRUCTURE
        } else {
            &self.default_file_structure
        }
    }

    /// Effective folder template
    pub fn folder_structure(&self) -> &str {
        if self.default_folder_structure.is_empty() {
            DEFAULT_FOLDER_STRUCTURE
        } else {
            &self.default_folder_structure
        }
    }

    /// Current value of a setting, formatted for display
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "show_common_tags" => Ok(self.show_common_tags.to_string()),
            "default_file_structure" => Ok(self.default_file_structure.clone()),
            "default_folder_structure" => Ok(self.default_folder_structure.clone()),
            _ => Err(config::unknown_key(key)),
        }
    }

    /// Update a setting from its textual value. Templates are validated before
    /// they are stored; an empty value restores the built-in default.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "show_common_tags" => {
                self.show_common_tags = parse_bool(value)
                    .ok_or_else(|| config::invalid_value(key, value, "expected true or false"))?;
            }
            "default_file_structure" => {
                if !value.is_empty() {
                    PathTemplate::file_name(value).map_err(|e| reject(key, value, &e))?;
                }
                self.default_file_structure = value.to_string();
            }
            "default_folder_structure" => {
                if !value.is_empty() {
                    PathTemplate::folders(value).map_err(|e| reject(key, value, &e))?;
                }
                self.default_folder_structure = value.to_string();
            }
            _ => return Err(config::unknown_key(key)),
        }
        Ok(())
    }
}

fn reject(key: &str, value: &str, error: &DoraError) -> DoraError {
    config::invalid_value(key, value, error.to_string())
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
