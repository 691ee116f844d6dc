// src/core/types.rs
use std::fmt;

/// Index of a symbol in the fixed vocabulary.
pub type SymbolId = usize;

/// One atomic unit of the vocabulary.
///
/// A phoneme is never confused with a literal character of the same spelling:
/// `Literal('B')` and `Phoneme("B")` are distinct symbols with distinct IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// A single rendered character: letter, punctuation mark or the space.
    Literal(char),
    /// An ARPAbet unit, e.g. `AH0` or `HH`.
    Phoneme(&'static str),
}

impl Symbol {
    pub fn is_phoneme(&self) -> bool {
        matches!(self, Symbol::Phoneme(_))
    }
}

/// Renders phonemes as `@AH0`, the spelling used by model configs for this vocabulary.
impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Literal(c) => write!(f, "{}", c),
            Symbol::Phoneme(p) => write!(f, "@{}", p),
        }
    }
}
