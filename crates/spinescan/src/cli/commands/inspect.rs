//! Inspect command implementation (single image, no table written).

use super::{expand_path, Pipeline};
use crate::cli::InspectArgs;
use crate::output::Output;

pub fn run(args: InspectArgs, output: &Output) -> anyhow::Result<()> {
    let image = expand_path(&args.image);

    let pipeline = Pipeline::from_args(&args.engine)?;
    let inspection = pipeline.runner().inspect(&image)?;

    output.print_inspection(&inspection)
}
