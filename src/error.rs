// File: src/error.rs
use thiserror::Error;

/// Boxed error produced by an external collaborator (dictionary, numeral normalizer).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum Text2IdError {
    #[error("unknown cleaner: {0}")]
    UnknownStage(String),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
    #[error("invalid dictionary snapshot: {0}")]
    Snapshot(#[from] bincode::Error),
    #[error("pronunciation dictionary failed: {0}")]
    Dictionary(#[source] BoxError),
    #[error("numeral normalizer failed: {0}")]
    Normalizer(#[source] BoxError),
}

impl Text2IdError {
    pub fn dictionary(err: impl Into<BoxError>) -> Self {
        Text2IdError::Dictionary(err.into())
    }

    pub fn normalizer(err: impl Into<BoxError>) -> Self {
        Text2IdError::Normalizer(err.into())
    }
}

pub type Result<T> = std::result::Result<T, Text2IdError>;
