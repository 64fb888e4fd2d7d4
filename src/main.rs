//! CLI entry point for the quantum poetry generator

use clap::Parser;
use quantum_poetry::io::cli::{Cli, CommandProcessor};
use tracing_subscriber::EnvFilter;

fn main() -> quantum_poetry::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let mut processor = CommandProcessor::from_cli(&cli, std::io::stdout().lock());
    processor.execute(&cli.command)
}
