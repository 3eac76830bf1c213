//! Command handlers.

use std::path::Path;
use std::sync::Arc;
use stripbot_bot::{BotConfig, BotMetrics, ReplyPacer, StreamProcessor, Supervisor, serve_stats};
use stripbot_comics::XkcdClient;
use stripbot_core::{ComicNumber, format_comic};
use stripbot_error::{ConfigError, StripbotResult};
use stripbot_reddit::{RedditClient, RedditCommentSource, RedditCredentials};
use tracing::{error, info};

/// Start the bot and run until Ctrl-C.
pub async fn run_bot(config_path: Option<&Path>, no_stats: bool) -> StripbotResult<()> {
    let config = match config_path {
        Some(path) => BotConfig::from_file(path)?,
        None => BotConfig::load()?,
    };
    info!(subreddits = ?config.subreddits, "Loaded configuration");

    let credentials = RedditCredentials::from_env()?;
    let reddit = Arc::new(RedditClient::new(credentials)?);

    // Fail fast on bad credentials before touching the stream.
    let username = reddit.me().await?;
    info!("Logged in as u/{}", username);

    let metrics = BotMetrics::new();

    if !no_stats {
        let addr = config.stats_addr.parse().map_err(|e| {
            ConfigError::new(format!(
                "Invalid stats address {}: {}",
                config.stats_addr, e
            ))
        })?;
        let stats_metrics = metrics.clone();
        tokio::spawn(async move {
            if let Err(e) = serve_stats(addr, stats_metrics).await {
                error!(error = %e, "Stats API stopped");
            }
        });
    }

    let source = RedditCommentSource::new(
        Arc::clone(&reddit),
        config.subreddits.clone(),
        config.poll_interval(),
        config.page_size,
    );
    let lookup = XkcdClient::new()?;
    let pacer = ReplyPacer::new(config.pace_interval());
    let processor = StreamProcessor::new(lookup, Arc::clone(&reddit), pacer, metrics.clone());
    let supervisor = Supervisor::new(source, processor, config.backoff_interval(), metrics);

    let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Shutdown signal received");
        }
        let _ = shutdown_tx.send(true);
    });

    supervisor.run(shutdown_rx).await;
    Ok(())
}

/// Fetch one comic and print the reply the bot would post.
///
/// Development aid: exercises the validator, lookup client, and formatter
/// without a Reddit account.
pub async fn print_comic(raw_number: Option<&str>) -> StripbotResult<()> {
    let number = match raw_number {
        Some(raw) => Some(
            ComicNumber::parse(raw)
                .map_err(|_| ConfigError::new(format!("Not a valid comic number: {}", raw)))?,
        ),
        None => None,
    };

    let client = XkcdClient::new()?;
    match client.fetch_comic(number).await {
        Some(comic) => println!("{}", format_comic(&comic)),
        None => println!("{}", stripbot_core::format_fetch_failure()),
    }

    Ok(())
}
