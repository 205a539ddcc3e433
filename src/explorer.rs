//! Opening folders and websites with the platform's default handler

use std::ffi::OsStr;
use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::error::{Result, fs};

/// Registry of DICOM data elements; the Keyword column lists valid placeholders
pub const DICOM_TAGS_URL: &str =
    "https://dicom.nema.org/medical/dicom/current/output/chtml/part06/chapter_6.html";

/// Open a folder in the system's file explorer
pub fn open_folder(path: &Path) -> Result<()> {
    if !path.is_dir() {
        return Err(fs::not_a_directory(path.display().to_string()));
    }
    launch(path.as_os_str())
}

/// Open a website in the default web browser
pub fn open_website(url: &str) -> Result<()> {
    launch(OsStr::new(url))
}

fn launcher() -> &'static str {
    if cfg!(target_os = "windows") {
        "explorer"
    } else if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    }
}

fn launch(target: &OsStr) -> Result<()> {
    let program = launcher();
    debug!(program, target = %target.to_string_lossy(), "launching");

    Command::new(program)
        .arg(target)
        .spawn()
        .map(|_| ())
        .map_err(|e| fs::open_failed(target.to_string_lossy(), e.to_string()))
}
