//! CLI entry point for the crossword layout generator

use clap::Parser;
use crosswave::io::cli::{Cli, SweepProcessor};

fn main() -> crosswave::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    SweepProcessor::new(cli).process()?;
    Ok(())
}
