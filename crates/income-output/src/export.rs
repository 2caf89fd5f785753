//! CSV export of labelled results.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use polars::prelude::{AnyValue, DataFrame, PlSmallStr};
use serde::{Deserialize, Serialize};
use tracing::info;

use income_common::cell_text;

use crate::error::{OutputError, Result};

/// File name used when no explicit output path is given.
pub const DEFAULT_RESULTS_FILE_NAME: &str = "predicted_income_results.csv";

/// Where the results file is written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportOptions {
    /// Explicit results file path. Takes precedence over `output_dir`.
    pub output: Option<PathBuf>,
    /// Directory for [`DEFAULT_RESULTS_FILE_NAME`]; defaults to the input's directory.
    pub output_dir: Option<PathBuf>,
}

impl ExportOptions {
    /// Resolve the results path for an upload at `input`.
    ///
    /// ```
    /// use std::path::Path;
    /// use income_output::ExportOptions;
    ///
    /// let options = ExportOptions::default();
    /// assert_eq!(
    ///     options.resolve(Path::new("data/adult.csv")),
    ///     Path::new("data/predicted_income_results.csv")
    /// );
    /// ```
    pub fn resolve(&self, input: &Path) -> PathBuf {
        if let Some(output) = &self.output {
            return output.clone();
        }
        let dir = match &self.output_dir {
            Some(dir) => dir.clone(),
            None => input
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default(),
        };
        dir.join(DEFAULT_RESULTS_FILE_NAME)
    }
}

/// Write a result table as UTF-8 CSV with a header row and no index.
///
/// Rows are written to a sibling temporary file that replaces `path` only once
/// every row is written, so a failed export leaves no partial results file.
/// Returns the number of data rows written.
pub fn write_results_csv(df: &DataFrame, path: &Path) -> Result<usize> {
    ensure_parent_dir(path)?;
    let staging = staging_path(path);

    if let Err(error) = write_rows(df, &staging) {
        let _ = fs::remove_file(&staging);
        return Err(error);
    }
    fs::rename(&staging, path).map_err(|source| OutputError::Persist {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), rows = df.height(), "wrote results");
    Ok(df.height())
}

fn write_rows(df: &DataFrame, path: &Path) -> Result<()> {
    let csv_error = |source: csv::Error| OutputError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = csv::Writer::from_path(path).map_err(csv_error)?;

    let header: Vec<&str> = df
        .get_column_names()
        .into_iter()
        .map(PlSmallStr::as_str)
        .collect();
    writer.write_record(&header).map_err(csv_error)?;

    let columns = df.get_columns();
    let mut record = Vec::with_capacity(columns.len());
    for row_idx in 0..df.height() {
        record.clear();
        for column in columns {
            let value = column.get(row_idx).unwrap_or(AnyValue::Null);
            record.push(cell_text(value));
        }
        writer.write_record(&record).map_err(csv_error)?;
    }
    writer
        .flush()
        .map_err(|source| csv_error(csv::Error::from(source)))?;
    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsStr::to_os_string)
        .unwrap_or_default();
    name.push(".partial");
    path.with_file_name(name)
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_prefers_explicit_output() {
        let options = ExportOptions {
            output: Some(PathBuf::from("out/results.csv")),
            output_dir: Some(PathBuf::from("ignored")),
        };
        assert_eq!(
            options.resolve(Path::new("in/adult.csv")),
            PathBuf::from("out/results.csv")
        );
    }

    #[test]
    fn test_resolve_output_dir() {
        let options = ExportOptions {
            output: None,
            output_dir: Some(PathBuf::from("reports")),
        };
        assert_eq!(
            options.resolve(Path::new("in/adult.csv")),
            PathBuf::from("reports").join(DEFAULT_RESULTS_FILE_NAME)
        );
    }

    #[test]
    fn test_resolve_bare_file_name() {
        assert_eq!(
            ExportOptions::default().resolve(Path::new("adult.csv")),
            PathBuf::from(DEFAULT_RESULTS_FILE_NAME)
        );
    }

    #[test]
    fn test_staging_path_is_sibling() {
        assert_eq!(
            staging_path(Path::new("out/results.csv")),
            PathBuf::from("out/results.csv.partial")
        );
    }
}
