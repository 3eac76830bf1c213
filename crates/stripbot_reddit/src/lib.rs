//! Reddit REST integration.
//!
//! This crate provides the platform side of the bot: OAuth password-grant
//! authentication, a polling comment stream over the newest-comments
//! listing, and reply posting with transient-error retry.
//!
//! Credentials come from the environment (see [`RedditCredentials`]);
//! everything else is injected by the caller.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod auth;
mod client;
mod config;
mod models;
mod stream;

pub use client::RedditClient;
pub use config::RedditCredentials;
pub use models::{CommentData, Listing, ListingData, Thing};
pub use stream::RedditCommentSource;
