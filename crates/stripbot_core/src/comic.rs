//! Comic metadata record.

use serde::{Deserialize, Serialize};

/// Metadata for one published comic strip.
///
/// Deserialized from the xkcd `info.0.json` endpoint. A `Comic` crossing a
/// component boundary is always fully populated; lookup failure is
/// represented as the absence of a `Comic`, never a partial record.
///
/// # Examples
///
/// ```
/// use stripbot_core::Comic;
///
/// let comic: Comic = serde_json::from_str(
///     r#"{"num":353,"title":"Python","alt":"Hello world","img":"https://imgs.xkcd.com/comics/python.png"}"#,
/// ).unwrap();
///
/// assert_eq!(comic.num, 353);
/// assert_eq!(comic.title, "Python");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comic {
    /// Comic number (strictly positive)
    pub num: u32,
    /// Comic title
    pub title: String,
    /// Alt/hover text
    pub alt: String,
    /// Direct image URL
    pub img: String,
}
