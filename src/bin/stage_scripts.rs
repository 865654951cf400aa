//! Stage a book's configured scripts and print the resulting asset descriptor.

use std::path::PathBuf;

use anyhow::Result;
use book_script_assets::{BookContext, website};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Debug, Parser)]
#[command(name = "stage-scripts", version, about)]
struct Cli {
    /// Book root directory.
    #[arg(long, default_value = ".")]
    book: PathBuf,

    /// Configuration file to use instead of `<book>/book.json`.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the descriptor on a single line.
    #[arg(long)]
    compact: bool,

    /// Log each copied script.
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let book = match &cli.config {
        Some(config) => BookContext::from_path(&cli.book, config)?,
        None => BookContext::discover(&cli.book)?,
    };

    let assets = website(&book)?;
    let rendered = if cli.compact {
        serde_json::to_string(&assets)?
    } else {
        serde_json::to_string_pretty(&assets)?
    };
    println!("{rendered}");

    Ok(())
}
