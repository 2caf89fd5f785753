//! CSV reading utilities.

mod reader;

pub use reader::{
    CsvUpload, IngestOptions, MAX_CSV_FILE_SIZE, MISSING_VALUE_TOKENS, check_file_size_with_limit,
    read_csv_table, validate_encoding,
};
