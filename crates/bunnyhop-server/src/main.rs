// Bunnyhop CLI entry point

use anyhow::Result;
use bunnyhop_server::cli::{self, Cli};
use bunnyhop_server::logging;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries resolve/list output
    logging::init_logging(&cli.log_level);

    cli::run(cli).await
}
