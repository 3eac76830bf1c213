//! Error types for the stripbot workspace.
//!
//! This crate provides the foundation error types used throughout the bot.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use stripbot_error::{StripbotResult, HttpError};
//!
//! fn fetch_data() -> StripbotResult<String> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod http;
mod json;
mod config;
mod stream;
mod error;

pub use http::HttpError;
pub use json::JsonError;
pub use config::ConfigError;
pub use stream::{StreamError, StreamErrorKind};
pub use error::{StripbotError, StripbotErrorKind, StripbotResult};
