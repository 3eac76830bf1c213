//! Trait definitions for the bot's injected collaborators.

use async_trait::async_trait;
use futures_util::stream::Stream;
use std::pin::Pin;
use std::sync::Arc;
use stripbot_core::{Comic, ComicNumber, Comment};
use stripbot_error::StripbotResult;

/// A live feed of comments, delivered oldest-first.
///
/// Items are `Err` when the feed itself faults (connectivity loss, auth
/// expiry, transport rejection); the supervisor treats such an item as the
/// end of the subscription and resubscribes after backoff.
pub type CommentStream = Pin<Box<dyn Stream<Item = StripbotResult<Comment>> + Send>>;

/// Source of comment subscriptions.
///
/// Each call to `subscribe` opens a fresh subscription; the supervisor calls
/// it again after every stream-level fault.
pub trait CommentSource: Send + Sync {
    /// Open a new comment subscription.
    fn subscribe(&self) -> CommentStream;
}

/// Fetches comic metadata by number.
#[async_trait]
pub trait ComicLookup: Send + Sync {
    /// Fetch the comic addressed by `number`, or the latest comic when
    /// `number` is `None`.
    ///
    /// Returns `None` on any failure; no error escapes this boundary.
    async fn fetch(&self, number: Option<ComicNumber>) -> Option<Comic>;
}

/// Sends reply text back to the platform as a child of a comment.
#[async_trait]
pub trait ReplySink: Send + Sync {
    /// Post `body` as a reply to `comment`.
    async fn reply(&self, comment: &Comment, body: &str) -> StripbotResult<()>;
}

// Shared handles forward to the underlying implementation, so one platform
// client can serve as several collaborators at once.

#[async_trait]
impl<T: ComicLookup + ?Sized> ComicLookup for Arc<T> {
    async fn fetch(&self, number: Option<ComicNumber>) -> Option<Comic> {
        (**self).fetch(number).await
    }
}

#[async_trait]
impl<T: ReplySink + ?Sized> ReplySink for Arc<T> {
    async fn reply(&self, comment: &Comment, body: &str) -> StripbotResult<()> {
        (**self).reply(comment, body).await
    }
}
