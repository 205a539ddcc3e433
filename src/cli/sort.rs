use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::sorter::ConflictPolicy;

/// What to do when two files map to the same target, or the target exists
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConflictArg {
    /// Replace the existing file
    #[default]
    Overwrite,
    /// Keep the existing file
    Skip,
    /// Add a numeric suffix (_1, _2, ...)
    Rename,
}

impl From<ConflictArg> for ConflictPolicy {
    fn from(arg: ConflictArg) -> Self {
        match arg {
            ConflictArg::Overwrite => ConflictPolicy::Overwrite,
            ConflictArg::Skip => ConflictPolicy::Skip,
            ConflictArg::Rename => ConflictPolicy::Rename,
        }
    }
}

/// Arguments for the sort command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Sort into a 'sorted_dicoms' folder next to the source:\n    dora sort ./GE_A\n\n\
                  Sort into a specific folder:\n    dora sort ./GE_A ./sorted\n\n\
                  Preview without writing anything:\n    dora sort ./GE_A --dry-run\n\n\
                  Custom structure:\n    dora sort ./GE_A --folder-structure '{PatientID}/{SeriesNumber}' \\\n      \
                  --file-structure '{InstanceNumber}.dcm'\n\n\
                  Only .dcm files, skipping DICOMDIR indexes:\n    dora sort ./GE_A -e dcm --exclude '**/DICOMDIR'\n\n\
                  TEMPLATES:\n  \
                  Use DICOM keywords in curly braces, e.g. {PatientID}. Values are lowercased and\n  \
                  the characters * . , \" \\ / | [ ] : ; and space become '_'. Missing tags become 'na'.")]
pub struct SortArgs {
    /// Folder containing the unsorted DICOM files
    pub source: PathBuf,

    /// Destination folder, created if missing [default: <source>/../sorted_dicoms]
    pub destination: Option<PathBuf>,

    /// Folder structure template (defaults to the configured structure)
    #[arg(long, value_name = "TEMPLATE")]
    pub folder_structure: Option<String>,

    /// File name template (defaults to the configured structure)
    #[arg(long, value_name = "TEMPLATE")]
    pub file_structure: Option<String>,

    /// Only consider files with this extension (repeatable, e.g. -e dcm -e ima)
    #[arg(long = "extension", short = 'e', value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Skip files matching this glob, relative to the source (repeatable)
    #[arg(long, value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// What to do when a target file already exists
    #[arg(long, value_enum, default_value_t = ConflictArg::Overwrite)]
    pub on_conflict: ConflictArg,

    /// Show where files would go without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Skip files that cannot be read or written instead of stopping
    #[arg(long)]
    pub keep_going: bool,

    /// Print the final report as JSON
    #[arg(long)]
    pub json: bool,

    /// Open the destination folder when done
    #[arg(long)]
    pub open: bool,
}
