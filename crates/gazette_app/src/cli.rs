use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use engine_logging::LogDestination;
use log::LevelFilter;

/// Extracts text from pending gazettes and indexes it.
#[derive(Debug, Parser)]
#[command(name = "gazette_app", version, about)]
pub struct Cli {
    /// Path to the RON configuration file.
    #[arg(short, long, default_value = "gazette.ron")]
    pub config: PathBuf,
    /// Where log output goes.
    #[arg(long, value_enum, default_value_t = LogTarget::Terminal)]
    pub log: LogTarget,
    /// Increase logging verbosity (-v, -vv).
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogTarget {
    Terminal,
    File,
    Both,
}

impl From<LogTarget> for LogDestination {
    fn from(target: LogTarget) -> Self {
        match target {
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::File => LogDestination::File,
            LogTarget::Both => LogDestination::Both,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Extract, index and mark every pending gazette.
    Run,
    /// List pending gazettes without processing them.
    Pending,
}

impl Cli {
    pub fn level_filter(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
