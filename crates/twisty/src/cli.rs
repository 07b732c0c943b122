//! Command-line interface for twisty.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Twisty - scramble, turn, and solve a 3x3x3 cube
#[derive(Parser, Debug)]
#[command(name = "twisty")]
#[command(about = "Scramble, turn, and solve a 3x3x3 cube", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if it is missing)
    #[arg(long, global = true, default_value = "twisty.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scramble a solved cube and print the result
    Scramble {
        /// Number of random turns (config value if omitted)
        #[arg(short, long)]
        moves: Option<usize>,

        /// Seed for a reproducible scramble
        #[arg(long)]
        seed: Option<u64>,

        /// Print the cube state as JSON instead of a net
        #[arg(long)]
        json: bool,
    },

    /// Apply an algorithm such as "R U R' U'" and print the result
    Apply {
        /// Whitespace-separated move tokens
        algorithm: String,

        /// Scramble this many turns before applying
        #[arg(long, default_value = "0")]
        scramble: usize,

        /// Seed for a reproducible scramble
        #[arg(long)]
        seed: Option<u64>,

        /// Print the cube state as JSON instead of a net
        #[arg(long)]
        json: bool,
    },

    /// Play a scrambled cube interactively from stdin
    Play {
        /// Number of scramble turns (config value if omitted)
        #[arg(short, long)]
        moves: Option<usize>,

        /// Seed for a reproducible scramble
        #[arg(long)]
        seed: Option<u64>,
    },
}
