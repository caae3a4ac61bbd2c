//! CLI entry point for the deterministic level generation tool

use clap::Parser;
use gridworld::io::cli::{Cli, LevelProcessor};

fn main() -> gridworld::Result<()> {
    let cli = Cli::parse();
    let processor = LevelProcessor::new(cli);
    processor.process()
}
