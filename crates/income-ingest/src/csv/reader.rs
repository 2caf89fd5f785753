//! CSV upload reading.

use std::path::{Path, PathBuf};

use polars::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{IngestError, Result};

/// Maximum file size for CSV loading (500 MB default).
pub const MAX_CSV_FILE_SIZE: u64 = 500 * 1024 * 1024;

const UTF8_BOM: char = '\u{feff}';

/// Cell texts read as missing, in addition to empty fields.
///
/// Same set as the default NA tokens of pandas' `read_csv`.
pub const MISSING_VALUE_TOKENS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Options controlling how an upload is loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestOptions {
    /// Uploads larger than this are rejected before parsing.
    pub max_file_size: u64,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            max_file_size: MAX_CSV_FILE_SIZE,
        }
    }
}

impl IngestOptions {
    pub fn with_max_file_size(mut self, max_file_size: u64) -> Self {
        self.max_file_size = max_file_size;
        self
    }
}

/// A loaded upload: every column is text; empty fields and
/// [`MISSING_VALUE_TOKENS`] are null.
#[derive(Debug, Clone)]
pub struct CsvUpload {
    pub path: PathBuf,
    pub frame: DataFrame,
    pub size_bytes: u64,
}

impl CsvUpload {
    /// Column names in file order.
    pub fn columns(&self) -> Vec<String> {
        self.frame
            .get_column_names()
            .into_iter()
            .map(ToString::to_string)
            .collect()
    }
}

fn read_error(path: &Path, error: std::io::Error) -> IngestError {
    if error.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: error,
        }
    }
}

/// Check file size against a limit, returning the size in bytes.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<u64> {
    let metadata = std::fs::metadata(path).map_err(|e| read_error(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(metadata.len())
}

/// Validate that the file is UTF-8 text and not blank.
///
/// A UTF-8 BOM is accepted; UTF-16 BOMs and invalid byte sequences are not.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let bytes = std::fs::read(path).map_err(|e| read_error(path, e))?;

    if bytes.len() >= 2 {
        if bytes[0..2] == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if bytes[0..2] == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    let text = std::str::from_utf8(&bytes).map_err(|e| IngestError::InvalidUtf8 {
        path: path.to_path_buf(),
        offset: e.valid_up_to(),
    })?;

    if text.trim_start_matches(UTF8_BOM).trim().is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    Ok(())
}

/// Strip a leading BOM polars may leave on the first header.
fn strip_header_bom(df: &mut DataFrame) -> PolarsResult<()> {
    let first = df
        .get_column_names()
        .first()
        .map(|name| name.to_string());
    if let Some(name) = first
        && let Some(stripped) = name.strip_prefix(UTF8_BOM)
    {
        let stripped = stripped.to_string();
        df.rename(&name, stripped.into())?;
    }
    Ok(())
}

/// Check header names after loading.
fn validate_columns(df: &DataFrame, path: &Path) -> Result<()> {
    for name in df.get_column_names() {
        if name.trim().is_empty() {
            return Err(IngestError::EmptyColumnName {
                path: path.to_path_buf(),
            });
        }
    }

    if df.width() > 500 {
        warn!(
            path = %path.display(),
            columns = df.width(),
            "upload has more than 500 columns"
        );
    }

    Ok(())
}

/// Reads an uploaded CSV file into a DataFrame with all columns as text.
///
/// The first row is the header. Schema inference is disabled so values reach
/// preprocessing exactly as written, except that empty fields and
/// [`MISSING_VALUE_TOKENS`] become null. A header-only file yields a frame
/// with zero rows.
pub fn read_csv_table(path: &Path, options: &IngestOptions) -> Result<CsvUpload> {
    let size_bytes = check_file_size_with_limit(path, options.max_file_size)?;
    validate_encoding(path)?;

    let mut df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .with_parse_options(CsvParseOptions::default().with_null_values(Some(
            NullValues::AllColumns(MISSING_VALUE_TOKENS.iter().map(|&token| token.into()).collect()),
        )))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    strip_header_bom(&mut df).map_err(|e| IngestError::CsvParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    validate_columns(&df, path)?;

    debug!(
        path = %path.display(),
        columns = ?df.get_column_names(),
        "read upload header"
    );
    info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        size_bytes,
        "upload loaded"
    );

    Ok(CsvUpload {
        path: path.to_path_buf(),
        frame: df,
        size_bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn test_read_csv_table_keeps_text() {
        let file = create_temp_csv(b"age,workclass\n39,?\n50,Private\n");
        let upload = read_csv_table(file.path(), &IngestOptions::default()).unwrap();

        assert_eq!(upload.columns(), vec!["age", "workclass"]);
        assert_eq!(upload.frame.height(), 2);
        let age = upload.frame.column("age").unwrap();
        assert_eq!(age.dtype(), &DataType::String);
        let workclass = upload.frame.column("workclass").unwrap().str().unwrap();
        assert_eq!(workclass.get(0), Some("?"));
    }

    #[test]
    fn test_missing_value_tokens_are_null() {
        let file = create_temp_csv(b"age,workclass\nNA,n/a\n40,NULL\nnan,Private\n");
        let upload = read_csv_table(file.path(), &IngestOptions::default()).unwrap();

        let age = upload.frame.column("age").unwrap().str().unwrap();
        let workclass = upload.frame.column("workclass").unwrap().str().unwrap();
        assert_eq!(age.into_iter().collect::<Vec<_>>(), vec![None, Some("40"), None]);
        assert_eq!(
            workclass.into_iter().collect::<Vec<_>>(),
            vec![None, None, Some("Private")]
        );
    }

    #[test]
    fn test_read_csv_table_header_only() {
        let file = create_temp_csv(b"age,workclass\n");
        let upload = read_csv_table(file.path(), &IngestOptions::default()).unwrap();

        assert_eq!(upload.frame.height(), 0);
        assert_eq!(upload.frame.width(), 2);
    }

    #[test]
    fn test_read_csv_table_with_bom() {
        let file = create_temp_csv("\u{feff}age,gender\n25,Male\n".as_bytes());
        let upload = read_csv_table(file.path(), &IngestOptions::default()).unwrap();

        assert_eq!(upload.columns(), vec!["age", "gender"]);
    }

    #[test]
    fn test_empty_file_rejected() {
        let file = create_temp_csv(b"  \n");
        let result = read_csv_table(file.path(), &IngestOptions::default());

        assert!(matches!(result, Err(IngestError::EmptyCsv { .. })));
    }

    #[test]
    fn test_utf16_rejected() {
        let file = create_temp_csv(&[0xFF, 0xFE, b'a', 0x00]);
        let result = validate_encoding(file.path());

        assert!(matches!(
            result,
            Err(IngestError::UnsupportedEncoding {
                encoding: "UTF-16 LE",
                ..
            })
        ));
    }

    #[test]
    fn test_invalid_utf8_rejected() {
        let file = create_temp_csv(b"age,name\n30,\xC3\x28\n");
        let result = validate_encoding(file.path());

        assert!(matches!(
            result,
            Err(IngestError::InvalidUtf8 { offset: 12, .. })
        ));
    }

    #[test]
    fn test_file_too_large() {
        let file = create_temp_csv(b"age\n1\n2\n3\n");
        let options = IngestOptions::default().with_max_file_size(4);
        let result = read_csv_table(file.path(), &options);

        assert!(matches!(result, Err(IngestError::FileTooLarge { .. })));
    }

    #[test]
    fn test_missing_file() {
        let result = read_csv_table(
            Path::new("/nonexistent/adult.csv"),
            &IngestOptions::default(),
        );

        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }
}
