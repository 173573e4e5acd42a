//! fixgen CLI — regenerate round-trip fixtures from the reference page.
//!
//! One run fetches the pinned serialization reference page and rewrites the
//! generated fixture artifact.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli).await
}
