//! Scan command implementation.

use spinescan_engine::{export, ScanError};
use spinescan_types::BatchSummary;
use tracing::info;

use super::{expand_path, Pipeline};
use crate::cli::ScanArgs;
use crate::output::Output;

pub fn run(args: ScanArgs, output: &Output) -> anyhow::Result<()> {
    let input_dir = expand_path(&args.input_dir);
    let output_file = expand_path(&args.output);

    // Fail before the models are loaded
    if !input_dir.is_dir() {
        return Err(ScanError::InvalidInputDir(input_dir).into());
    }

    let pipeline = Pipeline::from_args(&args.engine)?;
    let runner = pipeline.runner();

    let report = runner.run(&input_dir)?;
    let rows = export::write_csv(&output_file, runner.layout(), &report.results)?;

    info!("Total images processed: {}", report.results.len());

    let summary = BatchSummary {
        input_dir: input_dir.display().to_string(),
        output_file: output_file.display().to_string(),
        layout: runner.layout(),
        images_processed: report.results.len(),
        images_without_text: report.images_without_text(),
        rows_written: rows,
        skipped: report.skipped,
    };

    output.print_summary(&summary)
}
