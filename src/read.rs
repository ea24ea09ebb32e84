use std::{
    io,
    path::{Path, PathBuf},
};

use lexa::{error::SourceError, filter::Vocabulary};
use tokio::{fs::File, io::AsyncReadExt};
use tracing::info;

use crate::error::{Error, IoError};

#[derive(Debug, Default)]
pub struct FileReader {
    inner: Option<File>,
    path: PathBuf,
}

impl FileReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn open<P: AsRef<Path>>(&mut self, path: P) -> Result<(), IoError> {
        let path_buf = path.as_ref().to_path_buf();

        match File::open(&path_buf).await {
            Ok(file) => {
                self.inner = Some(file);
                self.path = path_buf;
                Ok(())
            }
            Err(error) => Err(IoError::File(error.kind())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn read_into(&mut self, buffer: &mut String) -> Result<(), IoError> {
        match &mut self.inner {
            Some(reader) => reader
                .read_to_string(buffer)
                .await
                .map(|_| ())
                .map_err(|error| IoError::File(error.kind())),

            None => Err(IoError::Reader(io::ErrorKind::InvalidInput)),
        }
    }

    pub async fn read_bytes(&mut self, buffer: &mut Vec<u8>) -> Result<(), IoError> {
        match &mut self.inner {
            Some(reader) => reader
                .read_to_end(buffer)
                .await
                .map(|_| ())
                .map_err(|error| IoError::File(error.kind())),

            None => Err(IoError::Reader(io::ErrorKind::InvalidInput)),
        }
    }
}

/// Reads a whole file as bytes.
pub async fn read_bytes<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, IoError> {
    let mut buffer = Vec::new();
    let mut reader = FileReader::new();

    reader.open(path).await?;
    reader.read_bytes(&mut buffer).await?;

    Ok(buffer)
}

/// Reads and parses the reference vocabulary.
pub async fn read_vocabulary<P: AsRef<Path>>(path: P) -> Result<Vocabulary, Error> {
    let path = path.as_ref();

    let mut buffer = String::new();
    let mut reader = FileReader::new();

    let unavailable = |error: IoError| SourceError::Vocabulary {
        path: path.display().to_string(),
        kind: error.kind().unwrap_or(io::ErrorKind::Other),
    };

    reader.open(path).await.map_err(unavailable)?;
    reader.read_into(&mut buffer).await.map_err(unavailable)?;

    let vocabulary = Vocabulary::from_json(&buffer)?;
    info!(words = vocabulary.len(), "loaded vocabulary from {}", path.display());

    Ok(vocabulary)
}

#[cfg(test)]
mod tests {
    use std::io;

    use lexa::error::{Error as CoreError, SourceError, VocabularyError};

    use crate::{
        error::{Error, IoError},
        read::{read_bytes, read_vocabulary, FileReader},
    };

    #[tokio::test]
    async fn test_reader_file_open() {
        let mut buffer = String::new();
        let mut reader = FileReader::new();

        reader.open("tests/data/sample.txt").await.unwrap();
        reader.read_into(&mut buffer).await.unwrap();

        assert!(buffer.contains("Running runners run."));
        assert_eq!(reader.path().to_str(), Some("tests/data/sample.txt"));
    }

    #[tokio::test]
    async fn test_reader_not_opened() {
        let mut buffer = String::new();

        assert_eq!(
            FileReader::new().read_into(&mut buffer).await,
            Err(IoError::Reader(io::ErrorKind::InvalidInput))
        );
    }

    #[tokio::test]
    async fn test_reader_missing_file() {
        assert_eq!(
            read_bytes("tests/data/missing.txt").await,
            Err(IoError::File(io::ErrorKind::NotFound))
        );
    }

    #[tokio::test]
    async fn test_read_vocabulary() {
        let vocabulary = read_vocabulary("tests/data/words_only.json").await.unwrap();

        assert!(vocabulary.contains("run"));
        assert!(vocabulary.contains("the"));
    }

    #[tokio::test]
    async fn test_read_vocabulary_missing() {
        let error = read_vocabulary("tests/data/missing.json").await.unwrap_err();

        assert_eq!(
            error,
            Error::Core(CoreError::Source(SourceError::Vocabulary {
                path: "tests/data/missing.json".into(),
                kind: io::ErrorKind::NotFound,
            }))
        );
    }

    #[tokio::test]
    async fn test_read_vocabulary_wrong_field() {
        let error = read_vocabulary("tests/data/malformed.json").await.unwrap_err();

        assert_eq!(
            error,
            Error::Core(CoreError::Vocabulary(VocabularyError::MissingField("words")))
        );
    }
}
