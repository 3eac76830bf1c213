//! Comment processing pipeline for the stripbot Reddit comic bot.
//!
//! This crate owns the state and failure handling of the bot: the dedup
//! ledger, reply pacing, the per-comment state machine, the supervisor
//! that survives stream faults, counters, and the stats API that exposes
//! them.
//!
//! # Known limitations
//!
//! The dedup ledger lives in memory only and grows for the life of the
//! process; a restart forgets it, so comments handled just before a crash
//! may receive a duplicate reply. Both behaviors are deliberate.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod config;
mod ledger;
mod metrics;
mod pacer;
mod processor;
mod supervisor;

pub use api::{ApiState, create_router, serve_stats};
pub use config::BotConfig;
pub use ledger::DedupLedger;
pub use metrics::{BotMetrics, MetricsSnapshot};
pub use pacer::ReplyPacer;
pub use processor::{CommentOutcome, StreamProcessor};
pub use supervisor::Supervisor;
