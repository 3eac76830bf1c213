//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Stripbot - Reddit bot replying to !xkcd commands with comic metadata
#[derive(Parser, Debug)]
#[command(name = "stripbot")]
#[command(about = "Reddit bot replying to !xkcd commands with comic metadata", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Watch the configured subreddits and reply to trigger commands
    Run {
        /// Path to a configuration TOML file (skips the default search)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Do not serve the stats API
        #[arg(long)]
        no_stats: bool,
    },

    /// Fetch one comic and print the reply the bot would post
    Comic {
        /// Comic number (latest comic when omitted)
        number: Option<String>,
    },
}
