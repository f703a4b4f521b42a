mod cli;
mod commands;
mod telemetry;

use clap::Parser;
use cli::CliArgs;
use telemetry::init_telemetry;

fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();

    init_telemetry()?;
    tracing::debug!(?args, "parsed arguments");

    for line in commands::run(args.command)? {
        println!("{line}");
    }
    Ok(())
}
