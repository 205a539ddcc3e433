//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - sort: Sort command arguments
//! - tags: Tags command arguments
//! - config: Config command arguments
//! - completions: Completions command arguments

use std::path::PathBuf;

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

pub mod completions;
pub mod config;
pub mod sort;
pub mod tags;

pub use completions::CompletionsArgs;
pub use config::{ConfigArgs, ConfigSubcommand};
pub use sort::{ConflictArg, SortArgs};
pub use tags::TagsArgs;

/// DORA - DICOM sorter
///
/// Sort DICOM files into a folder structure built from their own tags.
#[derive(Parser, Debug)]
#[command(
    name = "dora",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Sort DICOM files into folders named after their tags",
    long_about = "DORA sorts the DICOM files inside a source folder into a folder structure \
                  built from their DICOM tags (patient, study date, tube voltage, slice \
                  thickness, kernel, ...). Folder and file names are configurable templates.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  dora sort ./GE_A                           \x1b[90m# Sort into ./sorted_dicoms\x1b[0m\n   \
                  dora sort ./GE_A ./out --dry-run           \x1b[90m# Show where files would go\x1b[0m\n   \
                  dora sort ./GE_A --folder-structure '{PatientID}/{SeriesNumber}'\n   \
                  dora tags                                  \x1b[90m# List common DICOM tags\x1b[0m\n   \
                  dora config set show_common_tags true      \x1b[90m# Change a setting\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Settings file to use instead of the platform default
    #[arg(long, global = true, env = "DORA_CONFIG", value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Only print errors; no progress bar
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sort DICOM files from a source folder into a destination folder
    Sort(SortArgs),

    /// List common DICOM tags or check tag keywords
    Tags(TagsArgs),

    /// Show or change settings
    Config(ConfigArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
