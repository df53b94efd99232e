//! lodge entity store console
//!
//! This binary opens the interactive shell over the registry persisted
//! in `file.json` in the current directory. The registry is reloaded
//! before the first prompt and saved after every mutating command.
//!
//! Usage:
//!   lodge [--verbose]

use anyhow::{Context, Result};
use clap::Parser;
use lodge_console::Shell;
use lodge_storage::FileStore;
use std::io;
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "lodge")]
#[command(about = "Interactive console for the lodge entity store")]
struct Args {
    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    // stdout belongs to the shell; logs go to stderr
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();

    let mut store = FileStore::new();
    store
        .reload()
        .context("failed to load the entity registry")?;
    debug!(entities = store.len(), "registry loaded");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    Shell::new(store)
        .run(&mut input, &mut output)
        .context("shell session failed")?;
    Ok(())
}
