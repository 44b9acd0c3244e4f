use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use croissy_weather::cli::Cli;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    croissy_weather::run(cli).await
}
