//! Version command implementation

use crate::error::Result;
use crate::template::{DEFAULT_FILE_STRUCTURE, DEFAULT_FOLDER_STRUCTURE};

/// Run version command
pub fn run() -> Result<()> {
    println!("dora {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!("  Profile: {}", build_profile());
    println!();
    println!("Default structures:");
    println!("  Folders: {DEFAULT_FOLDER_STRUCTURE}");
    println!("  Files:   {DEFAULT_FILE_STRUCTURE}");

    Ok(())
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
