//! Command-line interface for minimax_tictactoe.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use minimax_tictactoe::Mark;

/// Minimax Tic-Tac-Toe - play against a computer that never loses
#[derive(Parser, Debug)]
#[command(name = "minimax_tictactoe")]
#[command(about = "Tic-tac-toe against an exhaustive minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it doesn't exist)
    #[arg(short, long, global = true, default_value = "minimax_tictactoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Your display name. Skips the name prompt when given.
        #[arg(short, long)]
        name: Option<String>,

        /// Pause before the computer replies, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// Print the minimax move for a board
    Solve {
        /// Nine cells row by row: X, O, and _ . - or space for empty
        board: String,

        /// Mark to move (defaults to whoever's turn it is by piece count)
        #[arg(short, long)]
        mark: Option<Mark>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Let minimax play both sides from an empty board
    Selfplay {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
