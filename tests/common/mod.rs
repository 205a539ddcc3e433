//! Common test utilities for DORA integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use dicom_core::{DataElement, PrimitiveValue, VR};
use dicom_dictionary_std::tags;
use dicom_object::{FileMetaTableBuilder, InMemDicomObject};
use tempfile::TempDir;

/// Path of the first default-structured file for `patient`, instance `instance`, 120 kV
#[allow(dead_code)]
pub fn default_target(patient: &str, instance: &str) -> String {
    format!("{patient}/20260216/120/0_625/standard/ct_{instance}_120_0_625_standard.dcm")
}

/// A temporary workspace with a source folder and a private settings file
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Folder holding unsorted input files
    #[allow(dead_code)]
    pub fn source(&self) -> PathBuf {
        self.path.join("input")
    }

    /// Default destination for [`Self::source`]
    #[allow(dead_code)]
    pub fn default_destination(&self) -> PathBuf {
        self.path.join("sorted_dicoms")
    }

    /// Settings file used by [`Self::dora`]
    pub fn settings_file(&self) -> PathBuf {
        self.path.join("config").join("settings.toml")
    }

    /// The dora binary with `DORA_CONFIG` pointing into this workspace
    pub fn dora(&self) -> Command {
        let mut cmd = dora_cmd();
        cmd.env("DORA_CONFIG", self.settings_file())
            .env_remove("RUST_LOG")
            .current_dir(&self.path);
        cmd
    }

    /// Write a CT slice into the source folder
    #[allow(dead_code)]
    pub fn write_ct(&self, relative: &str, patient_id: &str, instance: &str, kvp: &str) {
        write_ct_file(&self.source().join(relative), patient_id, instance, kvp);
    }

    /// Write a non-DICOM file into the source folder
    #[allow(dead_code)]
    pub fn write_source_file(&self, relative: &str, content: &str) {
        let file_path = self.source().join(relative);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Write the settings file directly
    #[allow(dead_code)]
    pub fn write_settings(&self, content: &str) {
        let path = self.settings_file();
        std::fs::create_dir_all(path.parent().expect("settings file has a parent"))
            .expect("Failed to create config directory");
        std::fs::write(path, content).expect("Failed to write settings");
    }
}

/// The dora binary
// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn dora_cmd() -> Command {
    Command::cargo_bin("dora").unwrap()
}

/// Write a minimal CT instance (study date 20260216, 0.625 mm, STANDARD kernel)
#[allow(dead_code)]
pub fn write_ct_file(path: &Path, patient_id: &str, instance: &str, kvp: &str) {
    let sop_instance = format!("1.2.826.0.1.3680043.2.1143.{instance}");
    let object = InMemDicomObject::from_element_iter([
        DataElement::new(
            tags::SOP_CLASS_UID,
            VR::UI,
            PrimitiveValue::from("1.2.840.10008.5.1.4.1.1.2"),
        ),
        DataElement::new(
            tags::SOP_INSTANCE_UID,
            VR::UI,
            PrimitiveValue::from(sop_instance.as_str()),
        ),
        DataElement::new(tags::PATIENT_ID, VR::LO, PrimitiveValue::from(patient_id)),
        DataElement::new(tags::STUDY_DATE, VR::DA, PrimitiveValue::from("20260216")),
        DataElement::new(tags::MODALITY, VR::CS, PrimitiveValue::from("CT")),
        DataElement::new(tags::INSTANCE_NUMBER, VR::IS, PrimitiveValue::from(instance)),
        DataElement::new(tags::KVP, VR::DS, PrimitiveValue::from(kvp)),
        DataElement::new(tags::SLICE_THICKNESS, VR::DS, PrimitiveValue::from("0.625")),
        DataElement::new(
            tags::CONVOLUTION_KERNEL,
            VR::SH,
            PrimitiveValue::from("STANDARD"),
        ),
    ]);

    let file = object
        .with_meta(
            FileMetaTableBuilder::new()
                .media_storage_sop_class_uid("1.2.840.10008.5.1.4.1.1.2")
                .media_storage_sop_instance_uid(sop_instance.as_str())
                .transfer_syntax("1.2.840.10008.1.2.1"),
        )
        .expect("Failed to build file meta");

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    file.write_to_file(path).expect("Failed to write DICOM file");
}
