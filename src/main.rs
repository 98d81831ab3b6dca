//! CLI entry point for the sprite sheet slicer

use clap::Parser;
use spriteslice::io::cli::{Cli, FileProcessor};

fn main() -> spriteslice::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
