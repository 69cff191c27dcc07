//! CLI command definitions using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod commands;

/// Reads artist/album labels off photographed record spines.
#[derive(Parser)]
#[command(name = "spinescan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a directory of spine photos and write a CSV table
    Scan(ScanArgs),

    /// Show the reconstructed lines and fields for a single image
    Inspect(InspectArgs),
}

/// How reconstructed text is split into artist and album.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Separator/word-position split, one row per line
    Pattern,
    /// Named-entity lookup with positional fallback, one row per image
    Entity,
}

/// Options shared by every command that runs the pipeline.
#[derive(Args)]
pub struct EngineArgs {
    /// Segmentation strategy
    #[arg(long, value_enum, default_value = "pattern", env = "SPINESCAN_STRATEGY")]
    pub strategy: Strategy,

    /// Entity lexicon JSON used by the entity strategy
    #[arg(long, env = "SPINESCAN_LEXICON")]
    pub lexicon: Option<String>,

    /// Directory containing text-detection.rten and text-recognition.rten
    #[arg(long, env = "SPINESCAN_MODELS_DIR")]
    pub models_dir: Option<String>,

    /// Vertical gap, as a fraction of image height, that starts a new line
    #[arg(long, default_value = "0.03")]
    pub line_gap: f32,

    /// Drop detections below this confidence
    #[arg(long, default_value = "0.0")]
    pub min_confidence: f32,
}

/// Scan command arguments.
#[derive(Parser)]
pub struct ScanArgs {
    /// Directory of spine photos
    #[arg(env = "SPINESCAN_INPUT_DIR")]
    pub input_dir: String,

    /// Destination CSV file (overwritten)
    #[arg(long, short = 'o', default_value = "album_data.csv", env = "SPINESCAN_OUTPUT")]
    pub output: String,

    #[command(flatten)]
    pub engine: EngineArgs,
}

/// Inspect command arguments.
#[derive(Parser)]
pub struct InspectArgs {
    /// Image to inspect
    pub image: String,

    #[command(flatten)]
    pub engine: EngineArgs,
}
