//! Config command: show and change settings

use std::path::{Path, PathBuf};

use console::Style;
use tracing::info;

use crate::cli::{ConfigArgs, ConfigSubcommand};
use crate::config::{self, Settings, settings::KEYS};
use crate::error::Result;

/// Run config command
pub fn run(settings: Option<PathBuf>, args: ConfigArgs) -> Result<()> {
    let path = super::settings_file(settings)?;

    match args.command {
        None => show(&path),
        Some(ConfigSubcommand::Path) => {
            println!("{}", path.display());
            Ok(())
        }
        Some(ConfigSubcommand::Get { key }) => {
            let settings = config::read_settings(&path)?;
            println!("{}", settings.get(&key)?);
            Ok(())
        }
        Some(ConfigSubcommand::Set { key, value }) => set(&path, &key, &value),
        Some(ConfigSubcommand::Reset) => reset(&path),
    }
}

fn show(path: &Path) -> Result<()> {
    let settings = config::read_settings(path)?;
    let header = Style::new().bold().green();
    let key_style = Style::new().cyan();
    let dim = Style::new().dim();

    let source = if path.exists() {
        path.display().to_string()
    } else {
        format!("{} (not created yet)", path.display())
    };
    println!("{} {source}", header.apply_to("Settings:"));

    for key in KEYS {
        let value = settings.get(key)?;
        let shown = match effective_default(&settings, key, &value) {
            Some(default) => format!("{}", dim.apply_to(format!("(default) {default}"))),
            None => value,
        };
        println!("  {:<26} {shown}", key_style.apply_to(key));
    }

    Ok(())
}

/// The built-in structure in effect when a structure setting is empty
fn effective_default<'a>(settings: &'a Settings, key: &str, value: &str) -> Option<&'a str> {
    if !value.is_empty() {
        return None;
    }
    match key {
        "default_file_structure" => Some(settings.file_structure()),
        "default_folder_structure" => Some(settings.folder_structure()),
        _ => None,
    }
}

fn set(path: &Path, key: &str, value: &str) -> Result<()> {
    let mut settings = config::read_settings(path)?;
    settings.set(key, value)?;
    config::save_settings(path, &settings)?;

    info!(key, value, "setting changed");
    println!("{key} = {}", settings.get(key)?);
    Ok(())
}

fn reset(path: &Path) -> Result<()> {
    config::save_settings(path, &config::bundled_settings()?)?;
    println!("Settings restored to defaults: {}", path.display());
    Ok(())
}
