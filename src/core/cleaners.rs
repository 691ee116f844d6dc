// File: src/core/cleaners.rs
//
// Named text-normalization pipelines run over literal text before encoding.
// A pipeline is an ordered list of stages. Stage names are resolved to the enum
// once, so an unknown name is reported before any text is touched.

use crate::core::converter::{AsciiTransliterator, Transliterate};
use crate::core::numbers::{EnglishNumbers, NumeralNormalizer};
use crate::error::{Result, Text2IdError};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

static ABBREVIATIONS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        ("mrs", "misess"),
        ("mr", "mister"),
        ("dr", "doctor"),
        ("st", "saint"),
        ("co", "company"),
        ("jr", "junior"),
        ("maj", "major"),
        ("gen", "general"),
        ("drs", "doctors"),
        ("rev", "reverend"),
        ("lt", "lieutenant"),
        ("hon", "honorable"),
        ("sgt", "sergeant"),
        ("capt", "captain"),
        ("esq", "esquire"),
        ("ltd", "limited"),
        ("col", "colonel"),
        ("ft", "fort"),
    ]
    .into_iter()
    .map(|(abbr, full)| (Regex::new(&format!(r"(?i)\b{}\.", abbr)).unwrap(), full))
    .collect()
});

/// One cleaning pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Lowercase and collapse whitespace.
    #[serde(alias = "basic_cleaners")]
    Basic,
    /// Transliterate to ASCII, lowercase and collapse whitespace.
    #[serde(alias = "transliteration_cleaners")]
    Transliteration,
    /// Transliterate, lowercase, spell out numbers, expand abbreviations, collapse whitespace.
    #[serde(alias = "english_cleaners")]
    English,
}

impl Stage {
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Basic => "basic",
            Stage::Transliteration => "transliteration",
            Stage::English => "english",
        }
    }

    /// Resolves a list of names, failing on the first unknown one.
    pub fn parse_list<S: AsRef<str>>(names: &[S]) -> Result<Vec<Stage>> {
        names.iter().map(|name| name.as_ref().parse()).collect()
    }
}

impl FromStr for Stage {
    type Err = Text2IdError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "basic" | "basic_cleaners" => Ok(Stage::Basic),
            "transliteration" | "transliteration_cleaners" => Ok(Stage::Transliteration),
            "english" | "english_cleaners" => Ok(Stage::English),
            other => Err(Text2IdError::UnknownStage(other.to_string())),
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn lowercase(text: &str) -> String {
    text.to_lowercase()
}

/// Replaces every run of whitespace with a single ASCII space. Edges are not trimmed.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RE.replace_all(text, " ").into_owned()
}

pub fn expand_abbreviations(text: &str) -> String {
    let mut text = text.to_string();
    for (regex, replacement) in ABBREVIATIONS.iter() {
        text = regex.replace_all(&text, *replacement).into_owned();
    }
    text
}

/// Runs cleaning pipelines with a configurable transliterator and numeral normalizer.
#[derive(Clone)]
pub struct Cleaner {
    transliterator: Arc<dyn Transliterate>,
    numbers: Arc<dyn NumeralNormalizer>,
    stages: Vec<Stage>,
}

impl Cleaner {
    pub fn new(stages: Vec<Stage>) -> Self {
        Self {
            transliterator: Arc::new(AsciiTransliterator),
            numbers: Arc::new(EnglishNumbers),
            stages,
        }
    }

    pub fn with_transliterator(mut self, transliterator: Arc<dyn Transliterate>) -> Self {
        self.transliterator = transliterator;
        self
    }

    pub fn with_numbers(mut self, numbers: Arc<dyn NumeralNormalizer>) -> Self {
        self.numbers = numbers;
        self
    }

    pub fn with_stages(mut self, stages: Vec<Stage>) -> Self {
        self.stages = stages;
        self
    }

    /// The pipeline used when `clean` is called without explicit stages.
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn clean(&self, text: &str, stages: Option<&[Stage]>) -> Result<String> {
        let stages = stages.unwrap_or(&self.stages);
        let mut text = text.to_string();
        for &stage in stages {
            log::trace!("cleaning stage '{}' over {} bytes", stage, text.len());
            text = self.apply(stage, &text)?;
        }
        Ok(text)
    }

    /// Like [`Cleaner::clean`], resolving stage names first.
    pub fn clean_with_names<S: AsRef<str>>(&self, text: &str, names: &[S]) -> Result<String> {
        let stages = Stage::parse_list(names)?;
        self.clean(text, Some(&stages))
    }

    fn apply(&self, stage: Stage, text: &str) -> Result<String> {
        let cleaned = match stage {
            Stage::Basic => collapse_whitespace(&lowercase(text)),
            Stage::Transliteration => {
                let text = self.transliterator.transliterate(text);
                collapse_whitespace(&lowercase(&text))
            }
            Stage::English => {
                let text = self.transliterator.transliterate(text);
                let text = self.numbers.expand(&lowercase(&text))?;
                collapse_whitespace(&expand_abbreviations(&text))
            }
        };
        Ok(cleaned)
    }
}

impl Default for Cleaner {
    fn default() -> Self {
        Self::new(vec![Stage::English])
    }
}

impl fmt::Debug for Cleaner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cleaner").field("stages", &self.stages).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_names_resolve() {
        assert_eq!("basic".parse::<Stage>().unwrap(), Stage::Basic);
        assert_eq!("english_cleaners".parse::<Stage>().unwrap(), Stage::English);
        assert_eq!(
            Stage::parse_list(&["transliteration", "basic"]).unwrap(),
            vec![Stage::Transliteration, Stage::Basic]
        );
    }

    #[test]
    fn unknown_stage_fails_fast() {
        let err = Stage::parse_list(&["basic", "klingon", "english"]).unwrap_err();
        assert!(matches!(err, Text2IdError::UnknownStage(ref name) if name == "klingon"));
        assert!(Cleaner::default().clean_with_names("text", &["nope"]).is_err());
    }

    #[test]
    fn stages_serialize_by_name() {
        assert_eq!(serde_json::to_string(&Stage::English).unwrap(), "\"english\"");
        let stages: Vec<Stage> =
            serde_json::from_str(r#"["transliteration", "basic_cleaners"]"#).unwrap();
        assert_eq!(stages, vec![Stage::Transliteration, Stage::Basic]);
    }

    #[test]
    fn whitespace_runs_collapse_without_trimming() {
        assert_eq!(collapse_whitespace("  a \t\n b  "), " a b ");
        let once = collapse_whitespace("x\r\n\r\ny   z");
        assert_eq!(collapse_whitespace(&once), once);
    }

    #[test]
    fn abbreviations_expand_case_insensitively() {
        assert_eq!(
            expand_abbreviations("Mr. Smith and mrs. Smith met Dr. Who on St. James st."),
            "mister Smith and misess Smith met doctor Who on saint James saint"
        );
        assert_eq!(expand_abbreviations("mister"), "mister");
        assert_eq!(expand_abbreviations("capt. drs. ltd."), "captain doctors limited");
    }

    #[test]
    fn basic_stage_does_not_transliterate() {
        let cleaner = Cleaner::default();
        assert_eq!(
            cleaner.clean("Müller   SAID", Some(&[Stage::Basic][..])).unwrap(),
            "müller said"
        );
        assert_eq!(
            cleaner.clean("Müller   SAID", Some(&[Stage::Transliteration][..])).unwrap(),
            "mueller said"
        );
    }

    #[test]
    fn english_stage_expands_numbers_and_abbreviations() {
        let cleaner = Cleaner::default();
        assert_eq!(
            cleaner.clean("Hello 1234.", None).unwrap(),
            "hello twelve thirty-four."
        );
        assert_eq!(
            cleaner.clean("Dr.  Иван has 2 cats", None).unwrap(),
            "doctor ivan has two cats"
        );
    }

    #[test]
    fn injected_collaborators_are_used() {
        let cleaner = Cleaner::new(vec![Stage::English])
            .with_transliterator(Arc::new(|t: &str| t.replace('x', "ks")))
            .with_numbers(Arc::new(|t: &str| t.replace('7', "SEVEN")));
        assert_eq!(cleaner.clean("Xox 7", None).unwrap(), "xoks SEVEN");
    }
}
