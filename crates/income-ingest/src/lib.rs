//! Census data ingestion.
//!
//! Loads a user-supplied CSV file into a Polars `DataFrame` with every column
//! held as text, so that preprocessing sees the literal values the user
//! uploaded (including sentinels such as `?`).
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use income_ingest::{IngestOptions, read_csv_table};
//!
//! let upload = read_csv_table(Path::new("adult.csv"), &IngestOptions::default())?;
//! println!("{} rows, {} columns", upload.frame.height(), upload.frame.width());
//! ```

mod csv;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{
    CsvUpload, IngestOptions, MAX_CSV_FILE_SIZE, MISSING_VALUE_TOKENS, check_file_size_with_limit,
    read_csv_table, validate_encoding,
};
