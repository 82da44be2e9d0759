//! tsdev: developer scripts for the Typesharp compiler.
//!
//! Dumps the reserved-word enumeration into a token document and generates
//! the per-directory readmes under `src/`.

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
