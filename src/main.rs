//! CLI entry point for tiled texture preview generation

use clap::Parser;
use tilepreview::io::cli::{Cli, FileProcessor};

fn main() -> tilepreview::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
