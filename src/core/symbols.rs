// File: src/core/symbols.rs
//
// The fixed symbol vocabulary shared by encoder and decoder.
// Order: padding (`_`), end-of-sequence (`~`), letters and punctuation, then the
// CMU ARPAbet phoneme set. A symbol's position in this order is its ID.

use crate::core::types::{Symbol, SymbolId};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Padding symbol, never emitted by the encoder.
pub const PAD: char = '_';
/// End-of-sequence symbol, never emitted by the encoder.
pub const EOS: char = '~';

const CHARACTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz!'(),-.:;? ";

/// Phonemes of the CMU Pronouncing Dictionary, stress markers included.
pub const ARPABET: [&str; 84] = [
    "AA", "AA0", "AA1", "AA2", "AE", "AE0", "AE1", "AE2", "AH", "AH0", "AH1", "AH2",
    "AO", "AO0", "AO1", "AO2", "AW", "AW0", "AW1", "AW2", "AY", "AY0", "AY1", "AY2",
    "B", "CH", "D", "DH", "EH", "EH0", "EH1", "EH2", "ER", "ER0", "ER1", "ER2", "EY",
    "EY0", "EY1", "EY2", "F", "G", "HH", "IH", "IH0", "IH1", "IH2", "IY", "IY0", "IY1",
    "IY2", "JH", "K", "L", "M", "N", "NG", "OW", "OW0", "OW1", "OW2", "OY", "OY0",
    "OY1", "OY2", "P", "R", "S", "SH", "T", "TH", "UH", "UH0", "UH1", "UH2", "UW",
    "UW0", "UW1", "UW2", "V", "W", "Y", "Z", "ZH",
];

static SYMBOLS: Lazy<Vec<Symbol>> = Lazy::new(|| {
    [PAD, EOS]
        .into_iter()
        .chain(CHARACTERS.chars())
        .map(Symbol::Literal)
        .chain(ARPABET.iter().map(|&p| Symbol::Phoneme(p)))
        .collect()
});

static CHAR_TO_ID: Lazy<HashMap<char, SymbolId>> = Lazy::new(|| {
    SYMBOLS
        .iter()
        .enumerate()
        .filter_map(|(id, symbol)| match symbol {
            Symbol::Literal(c) => Some((*c, id)),
            Symbol::Phoneme(_) => None,
        })
        .collect()
});

static PHONEME_TO_ID: Lazy<HashMap<&'static str, SymbolId>> = Lazy::new(|| {
    SYMBOLS
        .iter()
        .enumerate()
        .filter_map(|(id, symbol)| match symbol {
            Symbol::Phoneme(p) => Some((*p, id)),
            Symbol::Literal(_) => None,
        })
        .collect()
});

/// Number of symbols; valid IDs are `0..vocab_size()`.
pub fn vocab_size() -> usize {
    SYMBOLS.len()
}

/// Copy of the vocabulary in ID order.
pub fn symbols() -> Vec<Symbol> {
    SYMBOLS.clone()
}

/// String rendering of the vocabulary in ID order (phonemes as `@AH0`).
pub fn list_symbols() -> Vec<String> {
    SYMBOLS.iter().map(|s| s.to_string()).collect()
}

pub fn id_to_symbol(id: SymbolId) -> Option<Symbol> {
    SYMBOLS.get(id).copied()
}

pub fn symbol_to_id(symbol: &Symbol) -> Option<SymbolId> {
    match symbol {
        Symbol::Literal(c) => char_to_id(*c),
        Symbol::Phoneme(p) => phoneme_to_id(p),
    }
}

pub fn char_to_id(c: char) -> Option<SymbolId> {
    CHAR_TO_ID.get(&c).copied()
}

pub fn phoneme_to_id(phoneme: &str) -> Option<SymbolId> {
    PHONEME_TO_ID.get(phoneme).copied()
}

pub fn is_valid_arpabet(token: &str) -> bool {
    PHONEME_TO_ID.contains_key(token)
}

pub fn space_id() -> SymbolId {
    CHAR_TO_ID[&' ']
}

/// Maps every character of `text` to its ID.
/// Characters outside the vocabulary, and the reserved `_`/`~`, are dropped.
pub fn text_to_ids(text: &str) -> Vec<SymbolId> {
    text.chars()
        .filter(|&c| c != PAD && c != EOS)
        .filter_map(char_to_id)
        .collect()
}

/// Maps whitespace-separated ARPAbet tokens to IDs, dropping unknown tokens.
pub fn arpabet_to_ids(text: &str) -> Vec<SymbolId> {
    text.split_whitespace().filter_map(phoneme_to_id).collect()
}
