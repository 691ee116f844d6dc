// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod persistence;

pub use crate::config::EncoderConfig;
pub use crate::core::cleaners::{Cleaner, Stage};
pub use crate::core::cmudict::{CmuDict, NoDictionary, PronunciationDictionary};
pub use crate::core::converter::{u2a, u2a_all, AsciiTransliterator, Transliterate};
pub use crate::core::engine::{Text2Id, Text2IdBuilder};
pub use crate::core::numbers::{EnglishNumbers, NumeralNormalizer};
pub use crate::core::types::{Symbol, SymbolId};
pub use crate::error::{Result, Text2IdError};
