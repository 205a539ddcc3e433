//! Sort command: sort a folder of DICOM files by their tags

use std::path::PathBuf;

use console::Style;
use tracing::debug;

use crate::cli::SortArgs;
use crate::config::{self, Settings};
use crate::dicom::normalize_extension;
use crate::error::{DoraError, Result};
use crate::explorer;
use crate::path_utils::default_destination;
use crate::progress::{InteractiveProgressReporter, ProgressReporter, SilentProgressReporter};
use crate::sorter::{SortOptions, SortOutcome, SortProgress, SortReport, sort_dicoms};

/// Run sort command
pub fn run(settings: Option<PathBuf>, args: SortArgs, quiet: bool) -> Result<()> {
    let settings = config::read_settings(&super::settings_file(settings)?)?;
    let options = build_options(&args, &settings);
    debug!(?options, "sort options");

    let mut run = match sort_dicoms(&options) {
        Ok(run) => run,
        Err(e) => {
            if settings.show_common_tags && is_template_error(&e) {
                super::tags::print_common_tags();
            }
            return Err(e);
        }
    };

    let mut reporter: Box<dyn ProgressReporter> = if quiet || args.dry_run || args.json {
        Box::new(SilentProgressReporter)
    } else {
        Box::new(InteractiveProgressReporter::new(run.total() as u64))
    };

    for progress in &mut run {
        match progress {
            Ok(progress) => {
                reporter.update_file(&progress.source.display().to_string());
                if let SortOutcome::Written(target) = &progress.outcome {
                    debug!(
                        index = progress.index,
                        total = progress.total,
                        target = %target.display(),
                        "sorted"
                    );
                }
                if args.dry_run && !args.json {
                    print_planned(&progress);
                }
            }
            Err(e) => {
                reporter.abandon();
                return Err(e);
            }
        }
    }
    reporter.finish();

    let report = run.finish()?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if quiet {
        print_failures(&report);
    } else {
        print_summary(&report, args.dry_run);
    }

    if args.open && !args.dry_run {
        explorer::open_folder(&options.destination)?;
    }

    Ok(())
}

/// Merge command line arguments with the stored settings
fn build_options(args: &SortArgs, settings: &Settings) -> SortOptions {
    let destination = args
        .destination
        .clone()
        .unwrap_or_else(|| default_destination(&args.source));

    let mut options = SortOptions::new(&args.source, destination);
    options.folder_structure = args
        .folder_structure
        .clone()
        .unwrap_or_else(|| settings.folder_structure().to_string());
    options.file_structure = args
        .file_structure
        .clone()
        .unwrap_or_else(|| settings.file_structure().to_string());
    if !args.extensions.is_empty() {
        options.allowed_extensions = Some(
            args.extensions
                .iter()
                .map(|ext| normalize_extension(ext))
                .collect(),
        );
    }
    options.excludes = args.exclude.clone();
    options.on_conflict = args.on_conflict.into();
    options.dry_run = args.dry_run;
    options.keep_going = args.keep_going;
    options
}

fn is_template_error(error: &DoraError) -> bool {
    matches!(
        error,
        DoraError::InvalidTemplate { .. } | DoraError::UnknownTag { .. }
    )
}

fn print_planned(progress: &SortProgress) {
    let source = progress.source.display();
    match &progress.outcome {
        SortOutcome::Planned(target) => println!("[DRY RUN] {source} -> {}", target.display()),
        SortOutcome::Skipped(target) => {
            println!("[DRY RUN] {source} skipped, {} exists", target.display());
        }
        SortOutcome::Failed(reason) => println!("[DRY RUN] {source} failed: {reason}"),
        SortOutcome::Written(_) => {}
    }
}

fn print_summary(report: &SortReport, dry_run: bool) {
    let header = Style::new().bold().green();
    let warning = Style::new().yellow();

    if dry_run {
        println!(
            "{} {} of {} files would be sorted into {}",
            header.apply_to("[DRY RUN]"),
            report.planned,
            report.processed,
            report.destination
        );
    } else {
        println!("{}", header.apply_to("DICOM sorting is complete."));
        println!(
            "  {} of {} files sorted into {}",
            report.written,
            report.processed,
            report.destination
        );
    }

    if report.skipped > 0 {
        println!(
            "  {}",
            warning.apply_to(format!("{} skipped, target already exists", report.skipped))
        );
    }
    print_failures(report);
}

fn print_failures(report: &SortReport) {
    if report.is_clean() {
        return;
    }
    let error = Style::new().red();
    eprintln!(
        "{}",
        error.apply_to(format!("{} files could not be sorted:", report.failed.len()))
    );
    for failed in &report.failed {
        eprintln!("  {}: {}", failed.path, failed.reason);
    }
}
