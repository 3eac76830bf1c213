//! Stripbot - Reddit comic reply bot
//!
//! Stripbot watches live subreddit comment feeds for the `!xkcd` trigger
//! command (optionally followed by a comic number), fetches the matching
//! comic metadata from the public xkcd JSON API, and posts a formatted
//! reply. Every comment is answered at most once per process run, replies
//! are paced to respect host rate limits, and stream faults are survived
//! with a fixed backoff.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use stripbot::{ComicLookup, XkcdClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = XkcdClient::new()?;
//!
//!     if let Some(comic) = client.fetch(None).await {
//!         println!("#{}: {}", comic.num, comic.title);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Stripbot is organized as a workspace with focused crates:
//!
//! - `stripbot_error` - Error types
//! - `stripbot_core` - Core data types, command parsing, reply formatting
//! - `stripbot_interface` - Trait seams for injected collaborators
//! - `stripbot_comics` - xkcd JSON API client
//! - `stripbot_reddit` - Reddit authentication, comment stream, replies
//! - `stripbot_bot` - Dedup ledger, pacing, processor, supervisor, stats API
//!
//! This crate (`stripbot`) re-exports everything for convenience and ships
//! the `stripbot` binary.

#![forbid(unsafe_code)]

pub use stripbot_bot::*;
pub use stripbot_comics::*;
pub use stripbot_core::*;
pub use stripbot_error::*;
pub use stripbot_interface::*;
pub use stripbot_reddit::*;
