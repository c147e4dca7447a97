//! Command-line interface for strictly_oxo.

use clap::Parser;

/// Strictly OXO - noughts and crosses on resizable boards
#[derive(Parser, Debug)]
#[command(name = "strictly_oxo")]
#[command(about = "Play generalized noughts and crosses in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML game config
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Number of rows (1-9)
    #[arg(long)]
    pub rows: Option<usize>,

    /// Number of columns (1-9)
    #[arg(long)]
    pub columns: Option<usize>,

    /// Run length needed to win (at least 3)
    #[arg(short, long)]
    pub win_threshold: Option<usize>,

    /// Player symbols in turn order, e.g. "XOZ"
    #[arg(short, long)]
    pub players: Option<String>,
}
