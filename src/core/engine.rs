use crate::config::EncoderConfig;
use crate::core::cleaners::{Cleaner, Stage};
use crate::core::cmudict::{CmuDict, NoDictionary, PronunciationDictionary};
use crate::core::converter::Transliterate;
use crate::core::numbers::NumeralNormalizer;
use crate::core::symbols::{self, arpabet_to_ids, space_id, text_to_ids};
use crate::core::types::{Symbol, SymbolId};
use crate::error::Result;
use crate::persistence::{load_from_disk, save_to_disk};
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;

// <prefix>{<phonemes>}<suffix>; the first closing brace ends the override.
static CURLY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)^(.*?)\{(.+?)\}(.*)$").unwrap());

/// A cleaned word after dictionary resolution.
enum Word<'a> {
    Literal(&'a str),
    Phonetic(String),
}

/// Converts text to symbol-ID sequences and back.
///
/// The encoder is immutable after construction; share it behind an `Arc` or by
/// reference across threads.
///
/// Text may carry ARPAbet overrides in curly braces, which skip cleaning and the
/// dictionary: `"Turn left on {HH AW1 S S T AH0 N} Street."`.
///
/// Encoding is lossy on purpose: characters and phonemes outside the vocabulary
/// are dropped, never reported.
#[derive(Clone)]
pub struct Text2Id {
    dictionary: Arc<dyn PronunciationDictionary>,
    cleaner: Cleaner,
    use_dictionary: bool,
}

impl std::fmt::Debug for Text2Id {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Text2Id")
            .field("cleaner", &self.cleaner)
            .field("use_dictionary", &self.use_dictionary)
            .finish_non_exhaustive()
    }
}

impl Text2Id {
    /// English pipeline, no pronunciation dictionary.
    ///
    /// Without a dictionary, dictionary mode only splits words and never emits
    /// phonemes outside `{...}` overrides. Load CMUdict through
    /// [`Text2Id::from_config`] or [`Text2IdBuilder::dictionary`] to get them.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> Text2IdBuilder {
        Text2IdBuilder::default()
    }

    /// Builds an encoder from configuration, loading the dictionary it names.
    ///
    /// A present snapshot wins over the CMUdict text; after parsing the text the
    /// snapshot is (re)written when a snapshot path is configured.
    pub fn from_config(config: &EncoderConfig) -> Result<Self> {
        let stages = Stage::parse_list(&config.cleaners)?;
        let mut builder = Self::builder()
            .stages(stages)
            .use_dictionary(config.use_dictionary);

        let snapshot = config.snapshot_path.as_deref().filter(|p| p.exists());
        if let Some(path) = snapshot {
            builder = builder.dictionary(Arc::new(load_from_disk(path)?));
        } else if let Some(path) = &config.cmudict_path {
            let dict = CmuDict::from_path(path, config.keep_ambiguous)?;
            if let Some(snapshot_path) = &config.snapshot_path {
                if let Err(e) = save_to_disk(&dict, snapshot_path) {
                    log::warn!("could not write dictionary snapshot {}: {}", snapshot_path.display(), e);
                }
            }
            builder = builder.dictionary(Arc::new(dict));
        }
        Ok(builder.build())
    }

    pub fn cleaner(&self) -> &Cleaner {
        &self.cleaner
    }

    /// Encodes with the configured pipeline and dictionary mode.
    pub fn encode(&self, text: &str) -> Result<Vec<SymbolId>> {
        self.text_to_sequence(text, None, self.use_dictionary)
    }

    /// Converts `text` to symbol IDs.
    ///
    /// Literal text is cleaned with `stages` (or the default pipeline). With
    /// `use_dictionary`, each cleaned word is replaced by its first dictionary
    /// pronunciation when one exists, words are joined by the space symbol and a
    /// trailing space symbol is removed.
    pub fn text_to_sequence(
        &self,
        text: &str,
        stages: Option<&[Stage]>,
        use_dictionary: bool,
    ) -> Result<Vec<SymbolId>> {
        let mut sequence = Vec::new();
        let mut rest = text;

        while !rest.is_empty() {
            let Some(caps) = CURLY_RE.captures(rest) else {
                let cleaned = self.cleaner.clean(rest, stages)?;
                if use_dictionary {
                    self.encode_words(&cleaned, &mut sequence)?;
                } else {
                    sequence.extend(text_to_ids(&cleaned));
                }
                break;
            };

            let prefix = caps.get(1).map_or("", |m| m.as_str());
            if !prefix.is_empty() {
                sequence.extend(text_to_ids(&self.cleaner.clean(prefix, stages)?));
            }
            sequence.extend(arpabet_to_ids(&caps[2]));
            rest = caps.get(3).map_or("", |m| m.as_str());
        }

        if use_dictionary && sequence.last() == Some(&space_id()) {
            sequence.pop();
        }
        log::debug!("encoded {} bytes into {} symbols", text.len(), sequence.len());
        Ok(sequence)
    }

    fn encode_words(&self, cleaned: &str, sequence: &mut Vec<SymbolId>) -> Result<()> {
        for word in cleaned.split(' ') {
            match self.resolve(word)? {
                Word::Phonetic(arpabet) => sequence.extend(arpabet_to_ids(&arpabet)),
                Word::Literal(word) => sequence.extend(text_to_ids(word)),
            }
            sequence.push(space_id());
        }
        Ok(())
    }

    fn resolve<'a>(&self, word: &'a str) -> Result<Word<'a>> {
        Ok(match self.arpabet_for(word)? {
            Some(arpabet) => Word::Phonetic(arpabet),
            None => Word::Literal(word),
        })
    }

    /// First dictionary pronunciation of `word`, if any.
    pub fn arpabet_for(&self, word: &str) -> Result<Option<String>> {
        if word.is_empty() {
            return Ok(None);
        }
        let forms = self.dictionary.lookup(word)?;
        Ok(forms.and_then(|forms| forms.into_iter().next()))
    }

    /// Converts symbol IDs back to text. Unknown IDs are skipped; runs of phonemes
    /// are rendered as one brace group, e.g. `{HH AW1 S}`.
    pub fn sequence_to_text(sequence: &[SymbolId]) -> String {
        let mut result = String::new();
        for &id in sequence {
            match symbols::id_to_symbol(id) {
                Some(Symbol::Literal(c)) => result.push(c),
                Some(Symbol::Phoneme(p)) => {
                    result.push('{');
                    result.push_str(p);
                    result.push('}');
                }
                None => {}
            }
        }
        result.replace("}{", " ")
    }

    pub fn decode(&self, sequence: &[SymbolId]) -> String {
        Self::sequence_to_text(sequence)
    }

    pub fn clean(&self, text: &str, stages: Option<&[Stage]>) -> Result<String> {
        self.cleaner.clean(text, stages)
    }

    pub fn list_symbols() -> Vec<String> {
        symbols::list_symbols()
    }
}

impl Default for Text2Id {
    fn default() -> Self {
        Self::new()
    }
}

/// Construction-time overrides for [`Text2Id`].
pub struct Text2IdBuilder {
    dictionary: Arc<dyn PronunciationDictionary>,
    cleaner: Cleaner,
    use_dictionary: bool,
}

impl Default for Text2IdBuilder {
    fn default() -> Self {
        Self {
            dictionary: Arc::new(NoDictionary),
            cleaner: Cleaner::default(),
            use_dictionary: true,
        }
    }
}

impl Text2IdBuilder {
    pub fn dictionary(mut self, dictionary: Arc<dyn PronunciationDictionary>) -> Self {
        self.dictionary = dictionary;
        self
    }

    pub fn transliterator(mut self, transliterator: Arc<dyn Transliterate>) -> Self {
        self.cleaner = self.cleaner.with_transliterator(transliterator);
        self
    }

    pub fn numbers(mut self, numbers: Arc<dyn NumeralNormalizer>) -> Self {
        self.cleaner = self.cleaner.with_numbers(numbers);
        self
    }

    pub fn stages(mut self, stages: Vec<Stage>) -> Self {
        self.cleaner = self.cleaner.with_stages(stages);
        self
    }

    /// Default pipeline by name; fails on the first unknown name.
    pub fn cleaner_names<S: AsRef<str>>(self, names: &[S]) -> Result<Self> {
        Ok(self.stages(Stage::parse_list(names)?))
    }

    pub fn use_dictionary(mut self, use_dictionary: bool) -> Self {
        self.use_dictionary = use_dictionary;
        self
    }

    pub fn build(self) -> Text2Id {
        log::debug!(
            "text2id encoder: stages {:?}, dictionary lookups {}",
            self.cleaner.stages(),
            if self.use_dictionary { "on" } else { "off" }
        );
        Text2Id {
            dictionary: self.dictionary,
            cleaner: self.cleaner,
            use_dictionary: self.use_dictionary,
        }
    }
}
