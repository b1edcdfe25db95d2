//! `oshi` - a terminal host for the Oshi theme toggle.
//!
//! Storage lives in a JSON file between runs; the document root is
//! rebuilt on each run from `--root-class` and, optionally, the OS
//! color scheme.

mod app;
mod file_storage;

use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::app::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = io::stdout();
    app::run(cli, &mut stdout.lock())
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "oshi=debug,oshi_cli=debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
