//! Folder and file name templates
//!
//! A template is a string with DICOM keywords in curly braces, e.g.
//! `{PatientID}/{StudyDate}`. Each keyword is replaced by the cleaned value of
//! that attribute. `{{` and `}}` produce literal braces.
//!
//! Folder templates are split into path components on `/` and `\`. Values
//! are cleaned before substitution, so a tag value can never introduce a
//! separator of its own.

pub mod clean;

use std::path::{Path, PathBuf};

use dicom_core::dictionary::DataDictionary;
use dicom_dictionary_std::StandardDataDictionary;

use crate::dicom::TagSource;
use crate::error::{Result, template};

pub use clean::clean_text;

/// Default folder structure
pub const DEFAULT_FOLDER_STRUCTURE: &str =
    "{PatientID}/{StudyDate}/{KVP}/{SliceThickness}/{ConvolutionKernel}";

/// Default file name structure
pub const DEFAULT_FILE_STRUCTURE: &str =
    "{Modality}_{InstanceNumber}_{KVP}_{SliceThickness}_{ConvolutionKernel}.dcm";

/// Substituted for attributes that are missing or empty (cleaned to `na`)
pub const MISSING_VALUE: &str = "NA";

/// Tags used by the default structures, with their (group,element) numbers
pub const COMMON_TAGS: &[(&str, &str)] = &[
    ("PatientID", "(0010,0020)"),
    ("StudyDate", "(0008,0020)"),
    ("Modality", "(0008,0060)"),
    ("InstanceNumber", "(0020,0013)"),
    ("KVP", "(0018,0060)"),
    ("SliceThickness", "(0018,0050)"),
    ("ConvolutionKernel", "(0018,1210)"),
];

const SEPARATORS: &[char] = &['/', '\\'];

/// Whether `keyword` names an attribute in the standard DICOM data dictionary
pub fn is_known_keyword(keyword: &str) -> bool {
    StandardDataDictionary.by_name(keyword).is_some()
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Tag(String),
}

/// A parsed folder or file name template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplate {
    source: String,
    components: Vec<Vec<Segment>>,
}

impl PathTemplate {
    /// Parse a folder structure template.
    ///
    /// Empty components and `.` are dropped. Absolute templates and `..`
    /// components are rejected, since they would escape the destination.
    pub fn folders(template: &str) -> Result<Self> {
        if template.starts_with(SEPARATORS) {
            return Err(template::invalid(
                template,
                "absolute paths are not allowed",
            ));
        }

        let segments = parse_segments(template)?;
        let components: Vec<Vec<Segment>> = split_components(segments)
            .into_iter()
            .filter(|c| !c.is_empty() && !is_literal(c, "."))
            .collect();

        if components.iter().any(|c| is_literal(c, "..")) {
            return Err(template::invalid(
                template,
                "'..' would leave the destination folder",
            ));
        }

        Ok(Self {
            source: template.to_string(),
            components,
        })
    }

    /// Parse a file name template. It must describe exactly one path component.
    pub fn file_name(template: &str) -> Result<Self> {
        let segments = parse_segments(template)?;
        let components = split_components(segments);

        match components.as_slice() {
            [single] if single.is_empty() => {
                Err(template::invalid(template, "file name must not be empty"))
            }
            [single] if is_literal(single, ".") || is_literal(single, "..") => Err(
                template::invalid(template, "file name must not be '.' or '..'"),
            ),
            [_] => Ok(Self {
                source: template.to_string(),
                components,
            }),
            _ => Err(template::invalid(
                template,
                "file name must not contain path separators",
            )),
        }
    }

    /// The template as written
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Keywords referenced by this template, in order of appearance
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.components.iter().flatten().filter_map(|s| match s {
            Segment::Tag(k) => Some(k.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Render every path component against a tag source
    pub fn render_components(&self, source: &impl TagSource) -> Vec<String> {
        self.components
            .iter()
            .map(|component| render_component(component, source))
            .collect()
    }

    /// Render the template into a single string, components joined with `/`
    pub fn render(&self, source: &impl TagSource) -> String {
        self.render_components(source).join("/")
    }
}

/// Build the full target path of a DICOM file from its attributes
pub fn create_path(
    source: &impl TagSource,
    destination: &Path,
    folders: &PathTemplate,
    file_name: &PathTemplate,
) -> PathBuf {
    let mut target = destination.to_path_buf();
    for component in folders.render_components(source) {
        target.push(component);
    }
    target.push(file_name.render(source));
    target
}

fn render_component(component: &[Segment], source: &impl TagSource) -> String {
    let mut rendered = String::new();
    for segment in component {
        match segment {
            Segment::Literal(text) => rendered.push_str(text),
            Segment::Tag(keyword) => {
                let value = source
                    .tag_value(keyword)
                    .filter(|v| !v.is_empty())
                    .unwrap_or_else(|| MISSING_VALUE.to_string());
                rendered.push_str(&clean_text(&value));
            }
        }
    }
    rendered
}

fn is_literal(component: &[Segment], text: &str) -> bool {
    matches!(component, [Segment::Literal(l)] if l == text)
}

fn parse_segments(template: &str) -> Result<Vec<Segment>> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                literal.push('{');
            }
            '{' => {
                let mut keyword = String::new();
                let mut closed = false;
                for k in chars.by_ref() {
                    if k == '}' {
                        closed = true;
                        break;
                    }
                    keyword.push(k);
                }

                if !closed {
                    return Err(template::invalid(template, "unclosed '{'"));
                }
                if keyword.is_empty() {
                    return Err(template::invalid(template, "empty placeholder '{}'"));
                }
                if !keyword.chars().all(|k| k.is_ascii_alphanumeric()) {
                    return Err(template::invalid(
                        template,
                        format!("invalid placeholder '{{{keyword}}}'"),
                    ));
                }
                if !is_known_keyword(&keyword) {
                    return Err(template::unknown_tag(keyword));
                }

                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Tag(keyword));
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                literal.push('}');
            }
            '}' => {
                return Err(template::invalid(
                    template,
                    "single '}' encountered, write '}}' for a literal brace",
                ));
            }
            _ => literal.push(c),
        }
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }

    Ok(segments)
}

fn split_components(segments: Vec<Segment>) -> Vec<Vec<Segment>> {
    let mut components = vec![Vec::new()];

    for segment in segments {
        match segment {
            Segment::Tag(_) => {
                if let Some(current) = components.last_mut() {
                    current.push(segment);
                }
            }
            Segment::Literal(text) => {
                let mut parts = text.split(SEPARATORS);
                if let Some(first) = parts.next() {
                    push_literal(&mut components, first);
                }
                for part in parts {
                    components.push(Vec::new());
                    push_literal(&mut components, part);
                }
            }
        }
    }

    components
}

fn push_literal(components: &mut [Vec<Segment>], text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(current) = components.last_mut() {
        current.push(Segment::Literal(text.to_string()));
    }
}
