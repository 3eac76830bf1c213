//! Polling comment stream.
//!
//! Reddit has no push feed for comments; the stream polls the
//! newest-comments listing and diffs against a bounded window of recently
//! seen ids. The first successful poll only primes that window, so the bot
//! never answers comments that predate its subscription.

use crate::RedditClient;
use async_stream::stream;
use std::collections::{HashSet, VecDeque};
use std::sync::Arc;
use std::time::Duration;
use stripbot_interface::{CommentSource, CommentStream};
use tracing::{debug, info};

/// A [`CommentSource`] backed by the Reddit newest-comments listing.
///
/// Each [`subscribe`](CommentSource::subscribe) call opens an independent
/// subscription with its own seen-window; the supervisor opens a fresh one
/// after every stream fault.
pub struct RedditCommentSource {
    client: Arc<RedditClient>,
    subreddits: Vec<String>,
    poll_interval: Duration,
    page_size: u32,
}

impl RedditCommentSource {
    /// Create a source polling `subreddits` every `poll_interval`.
    pub fn new(
        client: Arc<RedditClient>,
        subreddits: Vec<String>,
        poll_interval: Duration,
        page_size: u32,
    ) -> Self {
        Self {
            client,
            subreddits,
            poll_interval,
            page_size,
        }
    }

    /// The `+`-joined multi path used in listing requests.
    fn multi_path(&self) -> String {
        self.subreddits.join("+")
    }
}

impl CommentSource for RedditCommentSource {
    fn subscribe(&self) -> CommentStream {
        let client = Arc::clone(&self.client);
        let path = self.multi_path();
        let poll_interval = self.poll_interval;
        let page_size = self.page_size;
        // Window large enough that an id cannot scroll out between polls.
        let window_cap = (page_size as usize) * 4;

        info!(subreddits = %path, "Opening comment subscription");

        Box::pin(stream! {
            let mut window: VecDeque<String> = VecDeque::with_capacity(window_cap);
            let mut window_ids: HashSet<String> = HashSet::with_capacity(window_cap);
            let mut primed = false;

            loop {
                match client.newest_comments(&path, page_size).await {
                    Ok(listing) => {
                        let mut fresh = 0usize;
                        for data in listing.into_comments_oldest_first() {
                            if window_ids.contains(data.id()) {
                                continue;
                            }
                            if window.len() == window_cap {
                                if let Some(evicted) = window.pop_front() {
                                    window_ids.remove(&evicted);
                                }
                            }
                            window.push_back(data.id().clone());
                            window_ids.insert(data.id().clone());

                            if primed {
                                fresh += 1;
                                yield Ok(data.to_comment());
                            }
                        }
                        if primed {
                            debug!(fresh, "Poll complete");
                        } else {
                            debug!(existing = window.len(), "Primed seen-window, skipping existing comments");
                            primed = true;
                        }
                    }
                    Err(e) => {
                        // Stream faults end the subscription; the supervisor
                        // backs off and resubscribes.
                        yield Err(e);
                        return;
                    }
                }

                tokio::time::sleep(poll_interval).await;
            }
        })
    }
}
