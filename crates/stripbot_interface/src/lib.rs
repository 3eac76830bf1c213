//! Trait seams between the processing loop and its collaborators.
//!
//! The stream processor is constructed against these traits rather than
//! concrete platform clients, so tests can inject fakes and the platform
//! integrations stay swappable.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{CommentSource, CommentStream, ComicLookup, ReplySink};
