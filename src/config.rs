// File: src/config.rs
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Encoder settings, usually read from a JSON file.
///
/// ```json
/// { "cleaners": ["english"], "cmudict_path": "data/cmudict-0.7b", "snapshot_path": "cache/cmudict.bin" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    /// Default cleaning pipeline, by stage name.
    pub cleaners: Vec<String>,
    /// CMUdict text file.
    pub cmudict_path: Option<PathBuf>,
    /// Compiled dictionary snapshot; preferred over `cmudict_path` when it exists.
    pub snapshot_path: Option<PathBuf>,
    /// Keep words that have more than one pronunciation.
    pub keep_ambiguous: bool,
    /// Default for `use_dictionary` in `Text2Id::encode`.
    pub use_dictionary: bool,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            cleaners: vec!["english".to_string()],
            cmudict_path: None,
            snapshot_path: None,
            keep_ambiguous: true,
            use_dictionary: true,
        }
    }
}

impl EncoderConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}
