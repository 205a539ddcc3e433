//! DORA - DICOM sorter
//!
//! Sorts a folder of DICOM files into a folder structure built from their own
//! tags, e.g. `{PatientID}/{StudyDate}/{KVP}/{SliceThickness}/{ConvolutionKernel}`.

use clap::Parser;
use miette::Diagnostic;

mod cli;
mod commands;
mod config;
mod dicom;
mod error;
mod explorer;
mod logging;
mod path_utils;
mod progress;
mod sorter;
mod template;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::Sort(args) => commands::sort::run(cli.settings, args, cli.quiet),
        Commands::Tags(args) => commands::tags::run(args),
        Commands::Config(args) => commands::config::run(cli.settings, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        if let Some(help) = e.help() {
            eprintln!("  help: {help}");
        }
        std::process::exit(1);
    }
}
