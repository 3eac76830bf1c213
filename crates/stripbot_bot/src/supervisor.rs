//! Outer resilience loop.

use crate::{BotMetrics, StreamProcessor};
use std::time::Duration;
use stripbot_interface::{ComicLookup, CommentSource, ReplySink};
use tokio::sync::watch;
use tracing::{error, info, instrument, warn};

/// Supervises the comment stream, restarting the subscription after faults.
///
/// The loop is infinite by design: any stream-level fault (connectivity
/// loss, auth expiry, transient 5xx) is logged, answered with a fixed
/// backoff sleep, and followed by a fresh subscription. Only the shutdown
/// channel ends the loop; the process never crashes on a stream fault.
pub struct Supervisor<C, L, S> {
    source: C,
    processor: StreamProcessor<L, S>,
    backoff: Duration,
    metrics: BotMetrics,
}

impl<C, L, S> Supervisor<C, L, S>
where
    C: CommentSource,
    L: ComicLookup,
    S: ReplySink,
{
    /// Create a supervisor around a processor and its comment source.
    pub fn new(
        source: C,
        processor: StreamProcessor<L, S>,
        backoff: Duration,
        metrics: BotMetrics,
    ) -> Self {
        Self {
            source,
            processor,
            backoff,
            metrics,
        }
    }

    /// Run until `shutdown` flips to `true`.
    ///
    /// Shutdown is honored at three points: before each subscription,
    /// mid-stream, and during the backoff sleep.
    #[instrument(skip(self, shutdown))]
    pub async fn run(mut self, mut shutdown: watch::Receiver<bool>) {
        info!(backoff_secs = self.backoff.as_secs(), "Supervisor started");

        loop {
            if *shutdown.borrow() {
                break;
            }

            let stream = self.source.subscribe();
            tokio::select! {
                result = self.processor.run(stream) => match result {
                    Ok(()) => warn!("Comment stream ended, resubscribing after backoff"),
                    Err(e) => {
                        error!(error = %e, "Stream fault, resubscribing after backoff");
                        self.metrics.record_error();
                    }
                },
                _ = shutdown.changed() => {
                    info!("Shutdown requested mid-stream");
                    break;
                }
            }

            tokio::select! {
                _ = tokio::time::sleep(self.backoff) => {}
                _ = shutdown.changed() => {
                    info!("Shutdown requested during backoff");
                    break;
                }
            }
        }

        info!("Supervisor stopped");
    }
}
