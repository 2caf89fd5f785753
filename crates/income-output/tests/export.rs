//! Result export round trips through the filesystem.

use std::fs;

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};
use tempfile::TempDir;

use income_model::PREDICTED_INCOME_COLUMN;
use income_output::{
    DEFAULT_RESULTS_FILE_NAME, ExportOptions, attach_predictions, map_labels, write_results_csv,
};

fn filtered_upload() -> DataFrame {
    let columns: Vec<Column> = vec![
        Series::new("age".into(), vec![Some("39"), Some("50"), Some("38")]).into_column(),
        Series::new(
            "workclass".into(),
            vec![Some("State-gov"), None, Some("Private")],
        )
        .into_column(),
        Series::new(
            "native-country".into(),
            vec![Some("United-States"), Some("Cuba"), Some("Outlying-US, Guam")],
        )
        .into_column(),
    ];
    DataFrame::new(columns).unwrap()
}

#[test]
fn written_csv_has_input_header_plus_prediction() {
    let dir = TempDir::new().unwrap();
    let path = ExportOptions {
        output: None,
        output_dir: Some(dir.path().to_path_buf()),
    }
    .resolve(&dir.path().join("upload.csv"));
    assert!(path.ends_with(DEFAULT_RESULTS_FILE_NAME));

    let labels = map_labels(&[0, 1, 1]).unwrap();
    let result = attach_predictions(&filtered_upload(), &labels).unwrap();
    let written = write_results_csv(&result, &path).unwrap();
    assert_eq!(written, 3);

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let header: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(
        header,
        vec!["age", "workclass", "native-country", PREDICTED_INCOME_COLUMN]
    );

    let rows: Vec<Vec<String>> = reader
        .records()
        .map(|record| record.unwrap().iter().map(String::from).collect())
        .collect();
    assert_eq!(
        rows,
        vec![
            vec!["39", "State-gov", "United-States", "<=50K"],
            vec!["50", "", "Cuba", ">50K"],
            vec!["38", "Private", "Outlying-US, Guam", ">50K"],
        ]
    );
}

#[test]
fn quoted_fields_survive_export() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("results.csv");

    let labels = map_labels(&[0, 0, 0]).unwrap();
    let result = attach_predictions(&filtered_upload(), &labels).unwrap();
    write_results_csv(&result, &path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"Outlying-US, Guam\""));
    assert!(!dir.path().join("results.csv.partial").exists());
}

#[test]
fn export_creates_missing_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("out").join("results.csv");

    let labels = map_labels(&[1, 1, 0]).unwrap();
    let result = attach_predictions(&filtered_upload(), &labels).unwrap();
    write_results_csv(&result, &path).unwrap();

    assert!(path.exists());
}

#[test]
fn empty_result_writes_header_only() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("results.csv");

    let empty = filtered_upload().head(Some(0));
    let result = attach_predictions(&empty, &[]).unwrap();
    assert_eq!(write_results_csv(&result, &path).unwrap(), 0);

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(
        text.trim_end(),
        "age,workclass,native-country,Predicted_Income"
    );
}
