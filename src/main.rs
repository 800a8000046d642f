//! # dsindex
//!
//! Command-line front end for the dataset index writer.
//!
//! ## Usage
//!
//! ```bash
//! # Convert the built-in sample datasets
//! dsindex demo ./samples
//!
//! # Uncompressed blobs, debug logging
//! dsindex -vv demo ./samples --uncompressed
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}
