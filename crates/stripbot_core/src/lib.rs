//! Core data types for the stripbot Reddit comic bot.
//!
//! This crate provides the foundation data types used across the bot: the
//! observed [`Comment`], the fetched [`Comic`], trigger-command parsing,
//! comic-number validation, and reply formatting.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod comic;
mod command;
mod comment;
mod number;
mod reply;

pub use comic::Comic;
pub use command::{TriggerCommand, TriggerParser};
pub use comment::Comment;
pub use number::{ComicNumber, InvalidComicNumber};
pub use reply::{ReplyError, format_comic, format_error, format_fetch_failure};
