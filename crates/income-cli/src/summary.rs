use income_cli::pipeline::PredictionRun;
use income_cli::preview::{preview_table, report_lines, shape_line};

pub fn print_summary(run: &PredictionRun, preview_rows: usize) {
    println!("Input: {}", run.upload.path.display());
    println!("Uploaded data (first {preview_rows} rows):");
    println!("{}", preview_table(&run.upload.frame, preview_rows));
    println!("{}", shape_line(&run.upload.frame));
    println!();
    println!("Prediction results (first {preview_rows} rows):");
    println!("{}", preview_table(&run.batch.results, preview_rows));
    println!();
    for line in report_lines(&run.upload.frame, &run.batch) {
        println!("{line}");
    }
    match &run.output {
        Some(path) => println!("Results: {}", path.display()),
        None => println!("Results: not written (dry run)"),
    }
}
