use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "recur-solve")]
#[command(about = "Solve recurrence relations using Master's Theorem")]
pub struct CliConfig {
    /// Recurrence relation to solve, e.g. "T(N) = 3T(N/2) + O(1)".
    /// When omitted, submissions are read line by line from stdin.
    pub equation: Option<String>,

    #[arg(long, help = "Path to a TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Output format: text or json")]
    pub format: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
