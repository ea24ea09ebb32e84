extern crate thiserror;

use std::io;

use thiserror::Error;

/// Error type.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("{0}")]
    Source(#[from] SourceError),

    #[error("{0}")]
    Vocabulary(#[from] VocabularyError),

    #[error("{0}")]
    Lemmatizer(#[from] LemmatizerError),
}

/// The document or the vocabulary cannot be read.
#[derive(Debug, Error, PartialEq)]
pub enum SourceError {
    #[error("Document Unavailable: {path}: {kind}")]
    Document { path: String, kind: io::ErrorKind },

    #[error("Vocabulary Unavailable: {path}: {kind}")]
    Vocabulary { path: String, kind: io::ErrorKind },

    #[error("Extraction Error: {0}")]
    Extraction(String),
}

/// The vocabulary was read but does not have the expected shape.
#[derive(Debug, Error, PartialEq)]
pub enum VocabularyError {
    #[error("Malformed Vocabulary: missing `{0}` field")]
    MissingField(&'static str),

    #[error("Malformed Vocabulary: {0}")]
    Malformed(String),
}

/// The lemmatizer data cannot be loaded.
#[derive(Debug, Error, PartialEq)]
pub enum LemmatizerError {
    #[error("Lemmatizer Unavailable: {path}: {kind}")]
    File { path: String, kind: io::ErrorKind },

    #[error("Lemmatizer Unavailable: no lemmas in {0}")]
    EmptyIndex(String),
}
