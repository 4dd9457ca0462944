//! CLI entry point for the knot mosaic decoder

use clap::Parser;
use mosaic_pd::io::cli::{Cli, FileProcessor};
use mosaic_pd::io::error::CatalogError;

fn main() -> Result<(), CatalogError> {
    env_logger::init();
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
