//! Comment types for the inbound feed.

use serde::{Deserialize, Serialize};

/// A single comment observed on the inbound feed.
///
/// Comments are immutable once observed; identity is the `id` field. The
/// dedup ledger keys on `id` to guarantee at-most-one reply per comment
/// within a process lifetime.
///
/// # Examples
///
/// ```
/// use stripbot_core::Comment;
///
/// let comment = Comment {
///     id: "kx2f9a".to_string(),
///     body: "please !xkcd 353".to_string(),
///     subreddit: "test".to_string(),
/// };
///
/// assert_eq!(comment.id, "kx2f9a");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Opaque comment identifier assigned by the platform
    pub id: String,
    /// The comment body text
    pub body: String,
    /// Name of the subreddit the comment was posted in
    pub subreddit: String,
}
