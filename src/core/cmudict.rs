// --- File: src/core/cmudict.rs
use crate::core::symbols::is_valid_arpabet;
use crate::error::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

static ALT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\([0-9]+\)").unwrap());

/// Word -> phonetic forms lookup consulted by the encoder.
///
/// Implementations must be safe to call from many threads at once; the encoder
/// never locks around a lookup.
pub trait PronunciationDictionary: Send + Sync {
    /// Returns the phonetic forms of `word` (each a space-separated ARPAbet string),
    /// or `None` when the word is unknown.
    fn lookup(&self, word: &str) -> Result<Option<Vec<String>>>;
}

/// A dictionary that knows no words, so every word is spelled out literally.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDictionary;

impl PronunciationDictionary for NoDictionary {
    fn lookup(&self, _word: &str) -> Result<Option<Vec<String>>> {
        Ok(None)
    }
}

/// In-memory CMU Pronouncing Dictionary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CmuDict {
    entries: HashMap<String, Vec<String>>,
}

impl CmuDict {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses dictionary text in the CMUdict format:
    /// `WORD  PH1 PH2 ...`, with alternates written as `WORD(1)`.
    /// Entries using a symbol outside the ARPAbet set are skipped.
    pub fn parse(text: &str, keep_ambiguous: bool) -> Self {
        let mut dict = Self::new();
        for line in text.lines() {
            let starts_entry = line
                .chars()
                .next()
                .map_or(false, |c| c.is_ascii_uppercase() || c == '\'');
            if !starts_entry {
                continue;
            }
            let mut parts = line.splitn(2, "  ");
            let (Some(word), Some(pronunciation)) = (parts.next(), parts.next()) else {
                continue;
            };
            let word = ALT_RE.replace_all(word, "");
            dict.insert(&word, pronunciation);
        }
        if !keep_ambiguous {
            dict.entries.retain(|_, forms| forms.len() == 1);
        }
        dict
    }

    pub fn from_reader<R: Read>(mut reader: R, keep_ambiguous: bool) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        // CMUdict is distributed as Latin-1; stray bytes only ever appear in comments.
        Ok(Self::parse(&String::from_utf8_lossy(&bytes), keep_ambiguous))
    }

    pub fn from_path(path: &Path, keep_ambiguous: bool) -> Result<Self> {
        let file = File::open(path)?;
        let dict = Self::from_reader(BufReader::new(file), keep_ambiguous)?;
        log::info!("loaded {} words from {}", dict.len(), path.display());
        Ok(dict)
    }

    /// Adds one phonetic form for `word`. Returns false if the form has an
    /// unknown symbol (and is therefore not stored).
    pub fn insert(&mut self, word: &str, pronunciation: &str) -> bool {
        let symbols: Vec<&str> = pronunciation.trim().split(' ').collect();
        if !symbols.iter().all(|s| is_valid_arpabet(s)) {
            return false;
        }
        self.entries
            .entry(word.to_uppercase())
            .or_default()
            .push(symbols.join(" "));
        true
    }

    /// Phonetic forms of `word` in dictionary order. Lookup is case-insensitive.
    pub fn lookup_forms(&self, word: &str) -> Option<&[String]> {
        self.entries.get(&word.to_uppercase()).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PronunciationDictionary for CmuDict {
    fn lookup(&self, word: &str) -> Result<Option<Vec<String>>> {
        Ok(self.lookup_forms(word).map(<[String]>::to_vec))
    }
}
