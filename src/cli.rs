//! Command-line interface for tictactoe_oracle.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe with game-state prediction scoring
#[derive(Parser, Debug)]
#[command(name = "tictactoe_oracle")]
#[command(about = "Play tic-tac-toe while a model predicts the game state", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to TOML configuration (defaults are used if missing)
    #[arg(short, long, global = true, default_value = "tictactoe_oracle.toml")]
    pub config: PathBuf,

    /// Oracle command, space-separated (overrides the config file)
    #[arg(long, global = true)]
    pub oracle_command: Option<String>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the computer (default)
    Play {
        /// Model to use; skips the selection prompt
        #[arg(short, long)]
        model: Option<String>,

        /// Pause before computer moves, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// List prediction models and their availability
    Models,

    /// Classify a board given as 9 comma-separated cells (x, o, b)
    Classify {
        /// Board cells in index order, e.g. "x,o,b,b,x,b,b,b,o"
        board: String,

        /// Model to compare against the real state
        #[arg(short, long, default_value = "rule_based")]
        model: String,
    },
}

impl Cli {
    /// Oracle command override split into words.
    pub fn oracle_command_parts(&self) -> Option<Vec<String>> {
        self.oracle_command
            .as_ref()
            .map(|cmd| cmd.split_whitespace().map(|s| s.to_string()).collect())
    }
}
