//! Loading documents into pages.

use std::path::Path;

use lexa::{document::Document, error::SourceError};
use tracing::info;

use crate::{
    error::{Error, IoError},
    read::read_bytes,
};

/// How a document file is turned into pages.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum DocumentKind {
    /// UTF-8 text with pages separated by form feeds.
    #[default]
    Text,

    /// PDF, extracted page by page.
    Pdf,
}

impl DocumentKind {
    /// Detected from the file extension; anything but `.pdf` is text.
    pub fn detect<P: AsRef<Path>>(path: P) -> Self {
        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("pdf") => DocumentKind::Pdf,
            _ => DocumentKind::Text,
        }
    }
}

/// Reads the document at `path` and splits it into pages.
pub async fn load_document<P: AsRef<Path>>(path: P, kind: DocumentKind) -> Result<Document, Error> {
    let path = path.as_ref();

    let buffer = read_bytes(path).await.map_err(|error: IoError| {
        SourceError::Document {
            path: path.display().to_string(),
            kind: error.kind().unwrap_or(std::io::ErrorKind::Other),
        }
    })?;

    let document = match kind {
        DocumentKind::Text => text_pages(buffer)?,
        DocumentKind::Pdf => tokio::task::spawn_blocking(move || pdf_pages(&buffer))
            .await
            .map_err(|error| SourceError::Extraction(error.to_string()))??,
    };

    info!(pages = document.len(), "loaded {}", path.display());

    Ok(document)
}

fn text_pages(buffer: Vec<u8>) -> Result<Document, SourceError> {
    let text = String::from_utf8(buffer).map_err(|error| SourceError::Extraction(error.to_string()))?;
    Ok(Document::from_form_feeds(&text))
}

fn pdf_pages(buffer: &[u8]) -> Result<Document, SourceError> {
    pdf_extract::extract_text_from_mem_by_pages(buffer)
        .map(|pages| pages.into_iter().collect())
        .map_err(|error| SourceError::Extraction(error.to_string()))
}
