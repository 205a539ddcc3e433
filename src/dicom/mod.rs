//! Reading, writing and querying DICOM files
//!
//! - [`discovery`]: Recursive discovery of candidate files
//! - [`TagSource`]: Keyword-based attribute lookup used by path templates

pub mod discovery;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use dicom_dictionary_std::uids;
use dicom_object::file::ReadPreamble;
use dicom_object::{
    DefaultDicomObject, FileDicomObject, FileMetaTableBuilder, InMemDicomObject, OpenFileOptions,
};
use dicom_transfer_syntax_registry::entries;
use tracing::debug;

use crate::error::{Result, dicom};

pub use discovery::{find_dicoms_in_folder, normalize_extension};

/// Lookup of DICOM attribute values by keyword (e.g. `PatientID`)
pub trait TagSource {
    /// The attribute value as text, or `None` when absent or not representable
    fn tag_value(&self, keyword: &str) -> Option<String>;
}

impl TagSource for InMemDicomObject {
    fn tag_value(&self, keyword: &str) -> Option<String> {
        let element = self.element_by_name(keyword).ok()?;
        let value = element.to_str().ok()?;
        Some(strip_padding(&value).to_string())
    }
}

impl TagSource for FileDicomObject<InMemDicomObject> {
    fn tag_value(&self, keyword: &str) -> Option<String> {
        (**self).tag_value(keyword)
    }
}

/// In-memory tag values, convenient for exercising templates
#[cfg(test)]
pub type TagMap = std::collections::HashMap<&'static str, &'static str>;

#[cfg(test)]
impl TagSource for TagMap {
    fn tag_value(&self, keyword: &str) -> Option<String> {
        self.get(keyword).map(|v| (*v).to_string())
    }
}

/// DICOM values are padded to even length with spaces (text) or NUL (UIDs)
fn strip_padding(value: &str) -> &str {
    value.trim_matches(|c: char| c == ' ' || c == '\0')
}

/// Read a DICOM file, with or without the 128-byte preamble.
///
/// Files without a file meta group (older exports write the bare data set)
/// are read as implicit VR little endian and given a meta group built from
/// their SOP class and instance UIDs.
pub fn read_dicom_file(path: &Path) -> Result<DefaultDicomObject> {
    debug!(path = %path.display(), "reading DICOM file");
    match OpenFileOptions::new()
        .read_preamble(ReadPreamble::Auto)
        .open_file(path)
    {
        Ok(object) => Ok(object),
        Err(e) => read_bare_dataset(path)
            .ok_or_else(|| dicom::read_failed(path.display().to_string(), e.to_string())),
    }
}

/// Read a data set that has neither preamble nor file meta group
fn read_bare_dataset(path: &Path) -> Option<DefaultDicomObject> {
    let file = File::open(path).ok()?;
    let dataset = InMemDicomObject::read_dataset_with_ts(
        BufReader::new(file),
        &entries::IMPLICIT_VR_LITTLE_ENDIAN.erased(),
    )
    .ok()?;
    if dataset.iter().next().is_none() {
        return None;
    }

    let sop_class = dataset.tag_value("SOPClassUID").unwrap_or_default();
    let sop_instance = dataset.tag_value("SOPInstanceUID").unwrap_or_default();
    let object = dataset
        .with_meta(
            FileMetaTableBuilder::new()
                .media_storage_sop_class_uid(sop_class)
                .media_storage_sop_instance_uid(sop_instance)
                .transfer_syntax(uids::IMPLICIT_VR_LITTLE_ENDIAN),
        )
        .ok()?;

    debug!(path = %path.display(), "read as bare data set");
    Some(object)
}

/// Save a DICOM object as a standard DICOM file, creating parent folders as needed
pub fn save_dicom_file(object: &DefaultDicomObject, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| dicom::write_failed(path.display().to_string(), e.to_string()))?;
    }

    debug!(path = %path.display(), "writing DICOM file");
    object
        .write_to_file(path)
        .map_err(|e| dicom::write_failed(path.display().to_string(), e.to_string()))
}
