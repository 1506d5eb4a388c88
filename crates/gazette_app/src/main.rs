mod cli;
mod config;
mod runner;

use anyhow::{Context, Result};
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::AppConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    engine_logging::initialize(cli.log.into(), cli.level_filter(), &config.log_file);

    match cli.command {
        Command::Run => {
            let summary = runner::run(&config)?;
            println!("{summary}");
            if !summary.skipped.is_empty() {
                println!("skipped gazette ids: {:?}", summary.skipped);
            }
        }
        Command::Pending => {
            for gazette in runner::pending(&config)? {
                println!(
                    "{}\t{}\t{}\t{}",
                    gazette.id, gazette.date, gazette.territory_name, gazette.file_path
                );
            }
        }
    }
    Ok(())
}
