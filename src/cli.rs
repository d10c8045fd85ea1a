//! Command-line interface for the `gol` shell.

use clap::Parser;

/// Conway's Game of Life on a bounded board, driven by shell commands on stdin
#[derive(Parser, Debug)]
#[command(name = "gol")]
#[command(about = "Interactive Game of Life shell", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Start with a game of this many columns (needs --rows)
    #[arg(long, requires = "rows")]
    pub columns: Option<usize>,

    /// Start with a game of this many rows (needs --columns)
    #[arg(long, requires = "columns")]
    pub rows: Option<usize>,

    /// Seed for the `random` command
    #[arg(long)]
    pub seed: Option<u64>,

    /// Don't print the prompt before each command
    #[arg(long)]
    pub no_prompt: bool,

    /// Default log filter, overridden by RUST_LOG
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
