//! Counters for bot operations.

use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Metrics collector shared between the processor, supervisor, and stats API.
#[derive(Debug, Clone)]
pub struct BotMetrics {
    inner: Arc<BotMetricsInner>,
}

#[derive(Debug)]
struct BotMetricsInner {
    comments_processed: AtomicU64,
    replies_sent: AtomicU64,
    errors: AtomicU64,
    last_reply: parking_lot::Mutex<Option<Instant>>,
}

impl Default for BotMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl BotMetrics {
    /// Creates a new metrics collector with all counters at zero.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(BotMetricsInner {
                comments_processed: AtomicU64::new(0),
                replies_sent: AtomicU64::new(0),
                errors: AtomicU64::new(0),
                last_reply: parking_lot::Mutex::new(None),
            }),
        }
    }

    /// Records a processed comment.
    pub fn record_comment(&self) {
        self.inner.comments_processed.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a delivered reply.
    pub fn record_reply(&self) {
        self.inner.replies_sent.fetch_add(1, Ordering::Relaxed);
        *self.inner.last_reply.lock() = Some(Instant::now());
    }

    /// Records an error (reply failure, lookup absence, or stream fault).
    pub fn record_error(&self) {
        self.inner.errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Gets the processed-comment count.
    pub fn comments_processed(&self) -> u64 {
        self.inner.comments_processed.load(Ordering::Relaxed)
    }

    /// Gets the delivered-reply count.
    pub fn replies_sent(&self) -> u64 {
        self.inner.replies_sent.load(Ordering::Relaxed)
    }

    /// Gets the error count.
    pub fn errors(&self) -> u64 {
        self.inner.errors.load(Ordering::Relaxed)
    }

    /// Gets time since the last delivered reply.
    pub fn time_since_last_reply(&self) -> Option<std::time::Duration> {
        self.inner.last_reply.lock().map(|instant| instant.elapsed())
    }

    /// Creates a serializable snapshot of current counters.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            comments_processed: self.comments_processed(),
            replies_sent: self.replies_sent(),
            errors: self.errors(),
            seconds_since_last_reply: self.time_since_last_reply().map(|d| d.as_secs()),
        }
    }
}

/// Serializable snapshot of bot counters.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    /// Comments handled by the processor
    pub comments_processed: u64,
    /// Replies delivered to the platform
    pub replies_sent: u64,
    /// Errors observed (reply failures, lookup absences, stream faults)
    pub errors: u64,
    /// Seconds since the last delivered reply
    pub seconds_since_last_reply: Option<u64>,
}
