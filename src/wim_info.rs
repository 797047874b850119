use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::Serialize;
use std::io::BufRead;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, trace};

use crate::error::WimInfoError;
use crate::windows::{detect_windows_architecture, detect_windows_version};

const IMAGE_COUNT: &str = "Image Count";
const INDEX: &str = "Index";

/// One `Key: Value` block of wim info output, in input order.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Section(IndexMap<String, String>);

impl Section {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the value for `key`, or `""` when it was never set.
    fn field(&self, key: &str) -> &str {
        self.get(key).unwrap_or("")
    }

    fn parse_number(&self, field: &'static str) -> Result<usize, WimInfoError> {
        let value = self.get(field);
        value
            .and_then(|v| v.parse::<usize>().ok())
            .ok_or_else(|| WimInfoError::MissingField {
                field,
                value: value.map(str::to_string),
            })
    }
}

/// Parsed wim info output.
///
/// Position 0 holds the header section, positions `1..=image_count()` hold the
/// image sections, each one validated against its `Index` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WimInfo {
    sections: Vec<Section>,
}

impl WimInfo {
    pub fn image_count(&self) -> usize {
        self.sections.len() - 1
    }

    pub fn header(&self) -> &Section {
        &self.sections[0]
    }

    /// Returns the image section at the 1-based `index`.
    pub fn image(&self, index: usize) -> Option<&Section> {
        if index == 0 {
            return None;
        }
        self.sections.get(index)
    }

    pub fn images(&self) -> impl Iterator<Item = (usize, &Section)> {
        self.sections.iter().enumerate().skip(1)
    }

    pub fn name(&self, index: usize) -> &str {
        self.image_field(index, "Name")
    }

    pub fn major_version(&self, index: usize) -> &str {
        self.image_field(index, "Major Version")
    }

    pub fn architecture(&self, index: usize) -> &str {
        self.image_field(index, "Architecture")
    }

    /// Classifies the image's `Name`, falling back to its `Description`.
    ///
    /// Returns `""` when neither field names a known Windows version.
    pub fn detect_version(&self, index: usize) -> &'static str {
        let Some(image) = self.image(index) else {
            return "";
        };
        ["Name", "Description"]
            .into_iter()
            .filter_map(|key| image.get(key))
            .map(detect_windows_version)
            .find(|tag| !tag.is_empty())
            .unwrap_or("")
    }

    pub fn detect_architecture(&self, index: usize) -> &'static str {
        detect_windows_architecture(self.architecture(index))
    }

    fn image_field(&self, index: usize, key: &str) -> &str {
        self.image(index).map(|s| s.field(key)).unwrap_or("")
    }
}

impl FromStr for WimInfo {
    type Err = WimInfoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_wim_info_from_reader(s.as_bytes())
    }
}

pub fn parse_wim_info(path: impl AsRef<Path>) -> Result<WimInfo> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    let reader = std::io::BufReader::new(file);
    parse_wim_info_from_reader(reader)
        .with_context(|| format!("Failed to parse wim info from {}", path.display()))
}

pub fn parse_wim_info_from_reader<R: BufRead>(reader: R) -> Result<WimInfo, WimInfoError> {
    let mut lines = reader.lines();

    let header = next_section(&mut lines)?;
    let count = header.parse_number(IMAGE_COUNT)?;
    if count == 0 {
        return Err(WimInfoError::Empty);
    }

    let mut sections = Vec::with_capacity(count + 1);
    sections.push(header);

    for want in 1..=count {
        let section = next_section(&mut lines)?;
        let got = section.parse_number(INDEX)?;
        if got != want {
            return Err(WimInfoError::IndexMismatch { got, want });
        }
        sections.push(section);
    }

    debug!(images = count, "parsed wim info");
    Ok(WimInfo { sections })
}

/// Reads lines up to the next empty line (consumed) or the end of input.
fn next_section<I>(lines: &mut I) -> Result<Section, WimInfoError>
where
    I: Iterator<Item = std::io::Result<String>>,
{
    let mut map = IndexMap::new();

    for line_result in lines {
        let line = line_result?;
        if line.is_empty() {
            break;
        }
        // A repeated key keeps its first position and takes the later value.
        if let Some((k, v)) = split_field(&line) {
            map.insert(k.to_string(), v.to_string());
        }
    }

    trace!(fields = map.len(), "read section");
    Ok(Section(map))
}

fn split_field(line: &str) -> Option<(&str, &str)> {
    let (k, v) = line.split_once(':')?;
    let k = k.trim();
    if k.is_empty() {
        return None;
    }
    Some((k, v.trim()))
}
