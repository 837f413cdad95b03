//! Tradespace Search Executive
//!
//! Expand a tradespace search into architecture documents.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin tse -- landsat8.json ./out
//! ```

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::error;

/// Tradespace search executive
#[derive(Parser, Debug)]
#[command(name = "tse")]
#[command(about = "Write one architecture document per point of a tradespace search")]
struct Args {
    /// Tradespace search input JSON file
    infile: PathBuf,

    /// Architecture output directory
    #[arg(default_value = ".")]
    outdir: PathBuf,
}

fn main() {
    tradespace_cli::init_logging();

    let args = Args::parse();

    if !args.outdir.is_dir() {
        error!("{} is not a directory", args.outdir.display());
        process::exit(2);
    }

    if let Err(e) = tradespace_cli::execute(&args.infile, &args.outdir) {
        error!("{:#}", e);
        process::exit(1);
    }
}
