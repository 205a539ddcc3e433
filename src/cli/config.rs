use clap::{Parser, Subcommand};

/// Arguments for config command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show current settings:\n    dora config\n\n\
                  Show the settings file location:\n    dora config path\n\n\
                  Change the default folder structure:\n    dora config set default_folder_structure '{PatientID}/{SeriesNumber}'\n\n\
                  Restore defaults:\n    dora config reset\n\n\
                  The settings file can be relocated with the DORA_CONFIG environment variable.")]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: Option<ConfigSubcommand>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Print the settings file location
    Path,

    /// Print the value of one setting
    Get {
        /// Setting name
        key: String,
    },

    /// Change one setting
    Set {
        /// Setting name
        key: String,
        /// New value; an empty structure restores the built-in default
        value: String,
    },

    /// Restore all settings to their defaults
    Reset,
}
