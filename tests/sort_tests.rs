//! Sorting through the CLI against generated DICOM files

mod common;

use common::{TestWorkspace, default_target};
use predicates::prelude::*;

fn count_files(dir: &std::path::Path) -> usize {
    walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .count()
}

#[test]
fn test_sort_with_default_structure() {
    let workspace = TestWorkspace::new();
    workspace.write_ct("a.dcm", "PAT01", "1", "120");
    workspace.write_ct("nested/b.dcm", "PAT01", "2", "120");
    workspace.write_ct("c", "PAT02", "1", "120");

    workspace
        .dora()
        .args(["sort", "input"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DICOM sorting is complete."))
        .stdout(predicate::str::contains("3 of 3 files sorted"));

    let destination = workspace.default_destination();
    assert!(destination.join(default_target("pat01", "1")).is_file());
    assert!(destination.join(default_target("pat01", "2")).is_file());
    assert!(destination.join(default_target("pat02", "1")).is_file());
    assert_eq!(count_files(&destination), 3);

    // Sources are copied, not moved
    assert!(workspace.source().join("nested/b.dcm").is_file());
}

#[test]
fn test_sort_into_explicit_destination_with_custom_structure() {
    let workspace = TestWorkspace::new();
    workspace.write_ct("a.dcm", "PAT 01", "7", "100");

    workspace
        .dora()
        .args([
            "sort",
            "input",
            "out",
            "--folder-structure",
            "{PatientID}/{SeriesNumber}",
            "--file-structure",
            "{Modality}-{InstanceNumber}.dcm",
        ])
        .assert()
        .success();

    assert!(workspace.path.join("out/pat_01/na/ct-7.dcm").is_file());
}

#[test]
fn test_sort_uses_structure_from_settings() {
    let workspace = TestWorkspace::new();
    workspace.write_settings("default_folder_structure = \"{Modality}\"\n");
    workspace.write_ct("a.dcm", "PAT01", "3", "120");

    workspace.dora().args(["sort", "input", "out"]).assert().success();

    assert!(
        workspace
            .path
            .join("out/ct/ct_3_120_0_625_standard.dcm")
            .is_file()
    );
}

#[test]
fn test_sort_dry_run_writes_nothing() {
    let workspace = TestWorkspace::new();
    workspace.write_ct("a.dcm", "PAT01", "1", "120");

    workspace
        .dora()
        .args(["sort", "input", "out", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[DRY RUN]"))
        .stdout(predicate::str::contains("ct_1_120_0_625_standard.dcm"))
        .stdout(predicate::str::contains("1 of 1 files would be sorted"));

    assert!(!workspace.path.join("out").exists());
}

#[test]
fn test_sort_unknown_tag_fails_before_reading() {
    let workspace = TestWorkspace::new();
    workspace.write_ct("a.dcm", "PAT01", "1", "120");

    workspace
        .dora()
        .args(["sort", "input", "out", "--folder-structure", "{PatientShoeSize}"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown DICOM tag 'PatientShoeSize'"))
        .stdout(predicate::str::contains("Common DICOM tags").not());

    assert!(!workspace.path.join("out").exists());
}

#[test]
fn test_sort_template_error_shows_common_tags_when_enabled() {
    let workspace = TestWorkspace::new();
    workspace.write_settings("show_common_tags = true\n");
    workspace.write_ct("a.dcm", "PAT01", "1", "120");

    workspace
        .dora()
        .args(["sort", "input", "--file-structure", "{Nope}.dcm"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Common DICOM tags"))
        .stdout(predicate::str::contains("PatientID"));
}

#[test]
fn test_sort_legacy_settings_key_enables_hint() {
    let workspace = TestWorkspace::new();
    workspace.write_settings("enable_common_tags_buttons = true\n");
    workspace.write_ct("a.dcm", "PAT01", "1", "120");

    workspace
        .dora()
        .args(["sort", "input", "--folder-structure", "{Unclosed"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Common DICOM tags"));
}

#[test]
fn test_sort_stops_on_unreadable_file() {
    let workspace = TestWorkspace::new();
    workspace.write_ct("a.dcm", "PAT01", "1", "120");
    workspace.write_source_file("b.txt", "not a dicom file");

    workspace
        .dora()
        .args(["sort", "input", "out"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read DICOM file"))
        .stderr(predicate::str::contains("--keep-going"));
}

#[test]
fn test_sort_keep_going_reports_failures() {
    let workspace = TestWorkspace::new();
    workspace.write_ct("a.dcm", "PAT01", "1", "120");
    workspace.write_source_file("b.txt", "not a dicom file");

    workspace
        .dora()
        .args(["sort", "input", "out", "--keep-going"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 of 2 files sorted"))
        .stderr(predicate::str::contains("1 files could not be sorted"))
        .stderr(predicate::str::contains("b.txt"));
}

#[test]
fn test_sort_quiet_still_lists_failures() {
    let workspace = TestWorkspace::new();
    workspace.write_ct("a.dcm", "PAT01", "1", "120");
    workspace.write_source_file("b.txt", "not a dicom file");

    workspace
        .dora()
        .args(["-q", "sort", "input", "out", "--keep-going"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DICOM sorting is complete").not())
        .stderr(predicate::str::contains("could not be sorted"))
        .stderr(predicate::str::contains("b.txt"));

    assert!(workspace.path.join("out").join(default_target("pat01", "1")).is_file());
}

#[test]
fn test_sort_current_dir_sorts_next_to_it() {
    let workspace = TestWorkspace::new();
    workspace.write_ct("a.dcm", "PAT01", "1", "120");

    workspace
        .dora()
        .current_dir(workspace.source())
        .args(["sort", "."])
        .assert()
        .success()
        .stderr(predicate::str::contains("inside the source folder").not());

    let destination = workspace.default_destination();
    assert!(destination.join(default_target("pat01", "1")).is_file());
    assert!(!workspace.source().join("sorted_dicoms").exists());
}

#[test]
fn test_sort_warns_when_destination_inside_source() {
    let workspace = TestWorkspace::new();
    workspace.write_ct("a.dcm", "PAT01", "1", "120");

    workspace
        .dora()
        .args(["sort", "input", "input/out"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "destination is inside the source folder",
        ))
        .stdout(predicate::str::contains("1 of 1 files sorted"));

    let destination = workspace.source().join("out");
    assert!(destination.join(default_target("pat01", "1")).is_file());
}

#[test]
fn test_sort_extension_filter() {
    let workspace = TestWorkspace::new();
    workspace.write_ct("a.dcm", "PAT01", "1", "120");
    workspace.write_source_file("notes.txt", "not a dicom file");

    workspace
        .dora()
        .args(["sort", "input", "out", "-e", "DCM"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 of 1 files sorted"));
}

#[test]
fn test_sort_exclude_pattern() {
    let workspace = TestWorkspace::new();
    workspace.write_ct("a.dcm", "PAT01", "1", "120");
    workspace.write_source_file("index/DICOMDIR", "not sorted");

    workspace
        .dora()
        .args(["sort", "input", "out", "--exclude", "**/DICOMDIR"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 of 1 files sorted"));
}

#[test]
fn test_sort_rename_keeps_every_file() {
    let workspace = TestWorkspace::new();
    workspace.write_ct("a.dcm", "PAT01", "1", "120");
    workspace.write_ct("b.dcm", "PAT01", "1", "120");

    workspace
        .dora()
        .args(["sort", "input", "out", "--on-conflict", "rename"])
        .assert()
        .success();

    let folder = workspace.path.join("out/pat01/20260216/120/0_625/standard");
    assert!(folder.join("ct_1_120_0_625_standard.dcm").is_file());
    assert!(folder.join("ct_1_120_0_625_standard_1.dcm").is_file());
}

#[test]
fn test_sort_skip_reports_skipped_files() {
    let workspace = TestWorkspace::new();
    workspace.write_ct("a.dcm", "PAT01", "1", "120");
    workspace.write_ct("b.dcm", "PAT01", "1", "120");

    workspace
        .dora()
        .args(["sort", "input", "out", "--on-conflict", "skip"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 of 2 files sorted"))
        .stdout(predicate::str::contains("1 skipped"));

    assert_eq!(count_files(&workspace.path.join("out")), 1);
}

#[test]
fn test_sort_json_report() {
    let workspace = TestWorkspace::new();
    workspace.write_ct("a.dcm", "PAT01", "1", "120");
    workspace.write_ct("b.dcm", "PAT02", "1", "120");

    let output = workspace
        .dora()
        .args(["sort", "input", "out", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["processed"], 2);
    assert_eq!(report["written"], 2);
    assert_eq!(report["skipped"], 0);
    assert_eq!(report["failed"].as_array().map(Vec::len), Some(0));
}

#[test]
fn test_sort_empty_source() {
    let workspace = TestWorkspace::new();
    std::fs::create_dir_all(workspace.source()).unwrap();

    workspace
        .dora()
        .args(["sort", "input", "out"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 of 0 files sorted"));
}

#[test]
fn test_sort_source_is_a_file() {
    let workspace = TestWorkspace::new();
    workspace.write_source_file("a.txt", "x");

    workspace
        .dora()
        .args(["sort", "input/a.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not a directory"));
}
