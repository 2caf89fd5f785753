use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::{Cell, CellAlignment, Table};
use tracing::info;

use income_classifier::{ModelContext, load_model_context};
use income_cli::RunError;
use income_cli::pipeline::{BatchOptions, PredictRequest, PredictionRun, RowFilter, predict_file};
use income_cli::preview::apply_table_style;
use income_ingest::{IngestOptions, read_csv_table};
use income_model::catalogued_columns;
use income_output::ExportOptions;
use income_transform::{AlignOptions, CategoryOrder, ColumnNegotiation, negotiate};

use crate::cli::{CategoryOrderArg, PredictArgs, SchemaArgs};

const BYTES_PER_MB: u64 = 1024 * 1024;

pub fn run_predict(args: &PredictArgs) -> Result<PredictionRun> {
    let request = predict_request(args);
    info!(
        input = %request.input.display(),
        model = %request.model.display(),
        excluded = ?request.batch.row_filter.excluded_workclass,
        "starting prediction"
    );
    predict_file(&request).with_context(|| format!("predict {}", args.input.display()))
}

fn predict_request(args: &PredictArgs) -> PredictRequest {
    let row_filter = if args.no_row_filter {
        RowFilter::disabled()
    } else if args.exclude_workclass.is_empty() {
        RowFilter::default()
    } else {
        RowFilter {
            excluded_workclass: args.exclude_workclass.clone(),
        }
    };
    let category_order = match args.category_order {
        CategoryOrderArg::Lexicographic => CategoryOrder::Lexicographic,
        CategoryOrderArg::FirstSeen => CategoryOrder::FirstSeen,
    };

    PredictRequest {
        input: args.input.clone(),
        model: args.model.clone(),
        ingest: IngestOptions::default()
            .with_max_file_size(args.max_file_size_mb.saturating_mul(BYTES_PER_MB)),
        batch: BatchOptions {
            row_filter,
            align: AlignOptions::new().with_category_order(category_order),
        },
        export: ExportOptions {
            output: args.output.clone(),
            output_dir: args.output_dir.clone(),
        },
        dry_run: args.dry_run,
    }
}

pub fn run_schema(args: &SchemaArgs) -> Result<()> {
    let context = load_model_context(&args.model)
        .map_err(RunError::from)
        .with_context(|| format!("load model {}", args.model.display()))?;

    let negotiation = match &args.input {
        Some(input) => negotiate_upload(input, &context)?,
        None => {
            let catalogue: Vec<&str> = catalogued_columns().map(|(name, _)| name).collect();
            negotiate(&catalogue, context.schema())
        }
    };

    println!("Model: {}", args.model.display());
    print_schema_table(&negotiation);
    if !negotiation.shadowed.is_empty() {
        println!(
            "Ignored (named like generated indicators): {}",
            negotiation.shadowed.join(", ")
        );
    }
    println!(
        "{} features, {} backed by {}",
        negotiation.features.len(),
        negotiation.resolved_count(),
        if args.input.is_some() {
            "upload columns"
        } else {
            "census columns"
        }
    );
    Ok(())
}

fn negotiate_upload(input: &Path, context: &ModelContext) -> Result<ColumnNegotiation> {
    let upload = read_csv_table(input, &IngestOptions::default())
        .map_err(RunError::from)
        .with_context(|| format!("read {}", input.display()))?;
    Ok(negotiate(&upload.columns(), context.schema()))
}

fn print_schema_table(negotiation: &ColumnNegotiation) {
    let mut table = Table::new();
    table.set_header(vec!["#", "Feature", "Source"]);
    apply_table_style(&mut table);
    for (index, (feature, source)) in negotiation.features.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1).set_alignment(CellAlignment::Right),
            Cell::new(feature),
            Cell::new(source.describe()),
        ]);
    }
    println!("{table}");
}
