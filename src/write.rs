use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use lexa::report::Report;
use tokio::io::AsyncWriteExt;

use crate::error::{Error, IoError};

/// Where the report goes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Output {
    Stdout,
    File(PathBuf),
}

impl Output {
    /// `-` selects stdout.
    pub fn parse<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();

        if path.as_os_str() == "-" {
            Output::Stdout
        } else {
            Output::File(path.to_path_buf())
        }
    }
}

/// Two-space indented JSON with non-ASCII characters written verbatim.
pub fn to_json(report: &Report) -> Result<String, IoError> {
    serde_json::to_string_pretty(report).map_err(|error| IoError::Serialization(error.to_string()))
}

pub async fn write_report(output: &Output, report: &Report) -> Result<(), Error> {
    let json = to_json(report)?;

    match output {
        Output::Stdout => {
            let mut stdout = tokio::io::stdout();
            let failed = |error: std::io::Error| IoError::Write {
                path: "-".into(),
                kind: error.kind(),
            };

            stdout.write_all(json.as_bytes()).await.map_err(failed)?;
            stdout.write_all(b"\n").await.map_err(failed)?;
            stdout.flush().await.map_err(failed)?;
        }
        Output::File(path) => replace(path, json.as_bytes()).await?,
    }

    Ok(())
}

/// Writes `contents` beside `path`, then renames it over `path`.
///
/// The destination is either left untouched or fully replaced.
pub async fn replace(path: &Path, contents: &[u8]) -> Result<(), IoError> {
    let staging = staging_path(path);
    let failed = |error: std::io::Error| IoError::Write {
        path: path.display().to_string(),
        kind: error.kind(),
    };

    if let Err(error) = tokio::fs::write(&staging, contents).await {
        let _ = tokio::fs::remove_file(&staging).await;
        return Err(failed(error));
    }

    if let Err(error) = tokio::fs::rename(&staging, path).await {
        let _ = tokio::fs::remove_file(&staging).await;
        return Err(failed(error));
    }

    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("report"));
    name.push(".tmp");

    path.with_file_name(name)
}
