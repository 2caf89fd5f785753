//! Error types for census data ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading an uploaded file.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the configured size limit.
    #[error("file {path} is {size} bytes, larger than the {max_size} byte limit")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    // === Encoding Errors ===
    /// File uses an encoding other than UTF-8.
    #[error("unsupported encoding {encoding} in {path}; save the file as UTF-8")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    /// File is not valid UTF-8.
    #[error("invalid UTF-8 in {path} at byte {offset}")]
    InvalidUtf8 { path: PathBuf, offset: usize },

    // === CSV Parsing Errors ===
    /// Failed to parse CSV with Polars.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// CSV file has no content.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// Header row has an empty column name.
    #[error("CSV file {path} has an empty column name in its header")]
    EmptyColumnName { path: PathBuf },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/uploads/adult.csv"),
        };
        assert_eq!(err.to_string(), "CSV file not found: /uploads/adult.csv");
    }

    #[test]
    fn test_encoding_error_mentions_fix() {
        let err = IngestError::UnsupportedEncoding {
            path: PathBuf::from("adult.csv"),
            encoding: "UTF-16 LE",
        };
        assert!(err.to_string().contains("save the file as UTF-8"));
    }
}
