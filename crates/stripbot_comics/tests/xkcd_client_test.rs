//! Live API tests for the xkcd client.
//!
//! These hit the real xkcd endpoint and are gated behind the `api` feature:
//! `cargo test -p stripbot_comics --features api`

#![cfg(feature = "api")]

use stripbot_comics::XkcdClient;
use stripbot_core::ComicNumber;

#[tokio::test]
async fn fetches_latest_comic() {
    let client = XkcdClient::new().unwrap();
    let comic = client.fetch_comic(None).await.expect("latest comic");
    assert!(comic.num > 0);
    assert!(!comic.title.is_empty());
    assert!(comic.img.starts_with("https://"));
}

#[tokio::test]
async fn fetches_comic_353() {
    let client = XkcdClient::new().unwrap();
    let number = ComicNumber::parse("353").unwrap();
    let comic = client.fetch_comic(Some(number)).await.expect("comic 353");
    assert_eq!(comic.num, 353);
    assert_eq!(comic.title, "Python");
}

#[tokio::test]
async fn out_of_range_comic_is_absent() {
    let client = XkcdClient::new().unwrap();
    let number = ComicNumber::parse("4000000").unwrap();
    assert!(client.fetch_comic(Some(number)).await.is_none());
}
