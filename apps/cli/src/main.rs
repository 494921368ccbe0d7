//! papertally CLI: literature-mining tally for papers citing a tool.
//!
//! Locates the methods and results sections of every paper in a corpus,
//! keeps those citing the tool, and counts the dominant vocabulary term.

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
