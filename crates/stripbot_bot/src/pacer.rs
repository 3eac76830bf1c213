//! Reply pacing.
//!
//! The host rate-limits reply posting, so the processor spaces replies a
//! fixed period apart. The spacing is enforced with a governor GCRA
//! limiter acquired before each send: the first reply passes immediately,
//! each subsequent one waits out the remainder of the period.

use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use std::sync::Arc;
use std::time::Duration;

type DirectRateLimiter = RateLimiter<NotKeyed, InMemoryState, DefaultClock>;

/// Paces replies to at most one per fixed period.
#[derive(Clone)]
pub struct ReplyPacer {
    limiter: Option<Arc<DirectRateLimiter>>,
}

impl ReplyPacer {
    /// Create a pacer with the given minimum period between replies.
    ///
    /// A zero period disables pacing (useful in tests).
    pub fn new(period: Duration) -> Self {
        let limiter = Quota::with_period(period).map(|quota| Arc::new(RateLimiter::direct(quota)));
        Self { limiter }
    }

    /// Wait until the next reply may be sent.
    pub async fn pace(&self) {
        if let Some(limiter) = &self.limiter {
            limiter.until_ready().await;
        }
    }
}

impl std::fmt::Debug for ReplyPacer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReplyPacer")
            .field("enabled", &self.limiter.is_some())
            .finish()
    }
}
