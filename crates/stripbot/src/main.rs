//! Stripbot CLI binary.
//!
//! This binary provides command-line access to the bot:
//! - Run the comment-stream watcher against the configured subreddits
//! - Fetch a single comic and print the reply the bot would post

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, print_comic, run_bot};

    // Parse command-line arguments
    let cli = Cli::parse();

    // Credentials may live in a .env file during development
    dotenvy::dotenv().ok();

    // Initialize tracing; RUST_LOG wins over the verbosity flag
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // Execute the requested command
    match cli.command {
        Commands::Run { config, no_stats } => {
            run_bot(config.as_deref(), no_stats).await?;
        }

        Commands::Comic { number } => {
            print_comic(number.as_deref()).await?;
        }
    }

    Ok(())
}
