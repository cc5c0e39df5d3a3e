//! MOTChallenge `seqinfo.ini` reader.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

const SECTION: &str = "Sequence";

/// Metadata of one sequence as found in its `seqinfo.ini`:
///
/// ```ini
/// [Sequence]
/// name=MOT20-01
/// imDir=img1
/// frameRate=25
/// seqLength=429
/// imWidth=1920
/// imHeight=1080
/// imExt=.jpg
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceConfig {
    pub name: String,
    pub image_dir: String,
    pub frame_rate: u32,
    pub seq_length: u32,
    pub image_width: u32,
    pub image_height: u32,
    pub image_extension: String,
}

impl SequenceConfig {
    /// Read and parse the configuration file at `path`
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| Error::configuration(path, format!("cannot read file: {}", e)))?;
        Self::parse(&content).map_err(|message| Error::configuration(path, message))
    }

    /// Parse the text of a configuration file
    pub fn parse(content: &str) -> std::result::Result<Self, String> {
        let section = parse_section(content, SECTION)
            .ok_or_else(|| "missing [Sequence] section".to_string())?;

        let text = |key: &str| -> std::result::Result<String, String> {
            section
                .get(&key.to_lowercase())
                .cloned()
                .ok_or_else(|| format!("missing key '{}'", key))
        };
        let integer = |key: &str| -> std::result::Result<u32, String> {
            let value = text(key)?;
            value
                .parse()
                .map_err(|e| format!("value '{}' for '{}' is not an integer: {}", value, key, e))
        };

        Ok(Self {
            name: text("name")?,
            image_dir: text("imDir")?,
            frame_rate: integer("frameRate")?,
            seq_length: integer("seqLength")?,
            image_width: integer("imWidth")?,
            image_height: integer("imHeight")?,
            image_extension: text("imExt")?,
        })
    }
}

// Collect the key/value pairs of one section; keys are lowercased.
fn parse_section(content: &str, wanted: &str) -> Option<HashMap<String, String>> {
    let mut entries = HashMap::new();
    let mut found = false;
    let mut inside = false;

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }
        if let Some(header) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            inside = header.trim() == wanted;
            found |= inside;
            continue;
        }
        if !inside {
            continue;
        }
        if let Some(idx) = line.find(['=', ':']) {
            let key = line[..idx].trim().to_lowercase();
            let value = line[idx + 1..].trim().to_string();
            entries.insert(key, value);
        }
    }

    found.then_some(entries)
}
