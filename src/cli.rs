use std::path::PathBuf;

use clap::Parser;

/// Guess the number between 1 and 10 before the clock runs out.
#[derive(Debug, Clone, Parser)]
#[command(name = "guessr", version, about)]
pub struct Cli {
    /// Config file (default: <config_dir>/guessr/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Seed for the target generator, to replay the same targets
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Write logs here instead of the configured log file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
