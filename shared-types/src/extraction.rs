use std::path::PathBuf;

use crate::{EmailRecord, SourceFormat};

/// Core trait implemented by every file ingester
pub trait RecordSource {
    /// Turn decoded file text into deduplicated records, sorted by address.
    fn parse(&self, content: &str) -> Vec<EmailRecord>;

    /// Which input format this source reads
    fn format(&self) -> SourceFormat;
}

/// Extraction error types
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("File '{}' not found", .path.display())]
    NotFound { path: PathBuf },

    #[error("Error reading '{}': {source}", .path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error writing '{}': {source}", .path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExtractionError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ExtractionError::NotFound { path }
            | ExtractionError::ReadError { path, .. }
            | ExtractionError::WriteError { path, .. } => path,
        }
    }
}
