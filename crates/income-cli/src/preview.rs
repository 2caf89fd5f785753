//! Terminal previews and the run report.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use polars::prelude::{AnyValue, DataFrame};

use income_common::cell_text;
use income_model::IncomeLabel;

use crate::pipeline::BatchResult;

/// Rows shown in each preview table by default.
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn label_cell(text: String) -> Cell {
    let color = if text == IncomeLabel::Above50K.as_str() {
        Color::Green
    } else {
        Color::Yellow
    };
    Cell::new(text).fg(color)
}

/// First `rows` rows of a table, every cell as text.
pub fn preview_table(df: &DataFrame, rows: usize) -> Table {
    let mut table = Table::new();
    let names = df.get_column_names();
    table.set_header(names.iter().map(|name| header_cell(name.as_str())));
    apply_table_style(&mut table);

    let columns = df.get_columns();
    for row_idx in 0..rows.min(df.height()) {
        let cells: Vec<Cell> = columns
            .iter()
            .map(|column| {
                let text = cell_text(column.get(row_idx).unwrap_or(AnyValue::Null));
                if column.name().as_str() == income_model::PREDICTED_INCOME_COLUMN {
                    label_cell(text)
                } else {
                    Cell::new(text)
                }
            })
            .collect();
        table.add_row(cells);
    }
    table
}

/// Shape line printed under a preview.
///
/// ```
/// use polars::prelude::DataFrame;
/// use income_cli::preview::shape_line;
///
/// assert_eq!(shape_line(&DataFrame::empty()), "rows: 0, columns: 0");
/// ```
pub fn shape_line(df: &DataFrame) -> String {
    format!("rows: {}, columns: {}", df.height(), df.width())
}

/// Summary lines for a finished batch.
pub fn report_lines(uploaded: &DataFrame, batch: &BatchResult) -> Vec<String> {
    let (at_most, above) = batch.label_counts();
    let features = batch.negotiation.features.len();
    let mut lines = vec![
        format!("Uploaded {}", shape_line(uploaded)),
        format!(
            "Excluded rows: {} (workclass filter)",
            batch.removed_rows
        ),
        format!(
            "Schema coverage: {} of {} features backed by upload columns",
            batch.negotiation.resolved_count(),
            features
        ),
        format!("Results {}", shape_line(&batch.results)),
        format!(
            "Total predictions: {} ({}: {}, {}: {})",
            batch.labels.len(),
            IncomeLabel::AtMost50K,
            at_most,
            IncomeLabel::Above50K,
            above
        ),
    ];
    let unresolved: Vec<&str> = batch.negotiation.unresolved().collect();
    if !unresolved.is_empty() {
        lines.push(format!("Filled with 0: {}", unresolved.join(", ")));
    }
    lines
}

#[cfg(test)]
mod tests {
    use polars::prelude::{Column, IntoColumn, NamedFrom, Series};

    use super::*;

    #[test]
    fn test_preview_limits_rows() {
        let columns: Vec<Column> = vec![
            Series::new("age".into(), vec!["39", "50", "38"]).into_column(),
            Series::new("Predicted_Income".into(), vec!["<=50K", ">50K", ">50K"]).into_column(),
        ];
        let df = DataFrame::new(columns).unwrap();

        let mut table = preview_table(&df, 2);
        table.force_no_tty();
        let rendered = table.to_string();

        assert_eq!(table.row_iter().count(), 2);
        assert!(rendered.contains("Predicted_Income"));
        assert!(rendered.contains("39"));
        assert!(rendered.contains("<=50K"));
        assert!(!rendered.contains("38"));
    }

    #[test]
    fn test_preview_of_empty_frame() {
        let table = preview_table(&DataFrame::empty(), DEFAULT_PREVIEW_ROWS);
        assert_eq!(table.row_iter().count(), 0);
    }
}
