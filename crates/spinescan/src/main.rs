//! spinescan: reads artist/album labels off photographed record spines.

mod cli;
mod output;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

fn main() {
    // Logs go to stderr so --json output stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    use output::Output;

    let output = Output::new(cli.json);

    match cli.command {
        Commands::Scan(args) => cli::commands::scan::run(args, &output),
        Commands::Inspect(args) => cli::commands::inspect::run(args, &output),
    }
}
