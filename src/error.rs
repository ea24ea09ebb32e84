extern crate thiserror;

use std::io;

use thiserror::Error;

/// Error type.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] IoError),

    #[error("{0}")]
    Core(#[from] lexa::error::Error),
}

impl From<lexa::error::SourceError> for Error {
    fn from(error: lexa::error::SourceError) -> Self {
        Error::Core(error.into())
    }
}

/// Configuration error.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Configuration Error: `{0}` must not be empty")]
    EmptyPath(&'static str),

    #[error("Configuration Error: {0}")]
    Format(String),
}

/// I/O errors.
#[derive(Debug, Error, PartialEq)]
pub enum IoError {
    #[error("File Error: {0}")]
    File(io::ErrorKind),

    #[error("Reader Error: {0}")]
    Reader(io::ErrorKind),

    #[error("Write Error: {path}: {kind}")]
    Write { path: String, kind: io::ErrorKind },

    #[error("Serialization Error: {0}")]
    Serialization(String),
}

impl IoError {
    /// The underlying error kind, when there is one.
    pub fn kind(&self) -> Option<io::ErrorKind> {
        match self {
            IoError::File(kind) | IoError::Reader(kind) => Some(*kind),
            IoError::Write { kind, .. } => Some(*kind),
            IoError::Serialization(_) => None,
        }
    }
}
