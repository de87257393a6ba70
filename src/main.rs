// src/main.rs
use anyhow::Result;
use clap::Parser as _;
use std::io;
use tracing_subscriber::EnvFilter;
use vaultask::{Args, run};

fn main() -> Result<()> {
    // stdout is reserved for the widget text.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("vaultask=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    run(args)
}
