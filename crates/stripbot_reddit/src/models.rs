//! JSON deserialization models for Reddit listing data.
//!
//! These models cover only the slice of the listing schema the bot reads:
//! `t1` comment things inside a `Listing` envelope. They are separate from
//! the core [`Comment`] type because they mirror the wire format, while the
//! core type is the bot's own view of a comment.

use derive_getters::Getters;
use serde::Deserialize;
use stripbot_core::Comment;

/// Listing envelope returned by the newest-comments endpoint.
#[derive(Debug, Clone, Deserialize, Getters)]
pub struct Listing {
    /// Listing payload
    data: ListingData,
}

/// Payload of a listing response.
#[derive(Debug, Clone, Deserialize, Getters)]
pub struct ListingData {
    /// Things in the listing, newest first
    children: Vec<Thing>,
}

/// A single `kind`/`data` wrapper in a listing.
#[derive(Debug, Clone, Deserialize, Getters)]
pub struct Thing {
    /// Thing kind tag (`t1` for comments)
    kind: String,
    /// Comment payload
    data: CommentData,
}

/// Comment fields the bot consumes.
#[derive(Debug, Clone, Deserialize, Getters)]
pub struct CommentData {
    /// Opaque comment id (without the kind prefix)
    id: String,
    /// Comment body text
    body: String,
    /// Subreddit display name
    subreddit: String,
}

impl CommentData {
    /// Fullname used when addressing this comment in the reply API.
    pub fn fullname(&self) -> String {
        format!("t1_{}", self.id)
    }

    /// Convert the wire model into the bot's comment type.
    pub fn to_comment(&self) -> Comment {
        Comment {
            id: self.id.clone(),
            body: self.body.clone(),
            subreddit: self.subreddit.clone(),
        }
    }
}

impl Listing {
    /// Extract comments from the listing, oldest first.
    ///
    /// Non-`t1` things are skipped.
    pub fn into_comments_oldest_first(self) -> Vec<CommentData> {
        let mut comments: Vec<CommentData> = self
            .data
            .children
            .into_iter()
            .filter(|thing| thing.kind == "t1")
            .map(|thing| thing.data)
            .collect();
        comments.reverse();
        comments
    }
}
