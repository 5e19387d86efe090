//! CLI entry point for patch-based texture quilting

use clap::Parser;
use quiltcut::io::cli::{Cli, FileProcessor};
use quiltcut::io::logging::init_logging;

fn main() -> quiltcut::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
