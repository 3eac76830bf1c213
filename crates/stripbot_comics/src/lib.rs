//! xkcd JSON API client.
//!
//! Fetches comic metadata from the public `info.0.json` endpoints. The
//! client performs exactly one GET per lookup and collapses every failure
//! mode (transport error, non-success status, malformed body) into an
//! absent comic; retry policy belongs to the callers.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;

pub use client::XkcdClient;
