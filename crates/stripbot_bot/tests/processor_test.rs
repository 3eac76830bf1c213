//! Scenario tests for the stream processor and supervisor.
//!
//! Collaborators are faked through the interface traits; no network or
//! platform account is involved.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::Duration;
use stripbot_bot::{BotMetrics, CommentOutcome, ReplyPacer, StreamProcessor, Supervisor};
use stripbot_core::{Comic, ComicNumber, Comment, ReplyError, format_error, format_fetch_failure};
use stripbot_error::{HttpError, StreamError, StreamErrorKind, StripbotResult};
use stripbot_interface::{ComicLookup, CommentSource, CommentStream, ReplySink};
use tokio::sync::watch;

fn comic(num: u32, title: &str) -> Comic {
    Comic {
        num,
        title: title.to_string(),
        alt: format!("alt text for {}", title),
        img: format!("https://imgs.xkcd.com/comics/{}.png", num),
    }
}

fn comment(id: &str, body: &str) -> Comment {
    Comment {
        id: id.to_string(),
        body: body.to_string(),
        subreddit: "test".to_string(),
    }
}

/// Lookup fake serving canned comics and recording every call.
#[derive(Default)]
struct FakeLookup {
    comics: HashMap<u32, Comic>,
    latest: Option<Comic>,
    calls: Mutex<Vec<Option<u32>>>,
}

impl FakeLookup {
    fn with_latest(latest: Comic) -> Self {
        Self {
            latest: Some(latest),
            ..Self::default()
        }
    }

    fn with_comic(mut self, comic: Comic) -> Self {
        self.comics.insert(comic.num, comic);
        self
    }

    fn calls(&self) -> Vec<Option<u32>> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl ComicLookup for FakeLookup {
    async fn fetch(&self, number: Option<ComicNumber>) -> Option<Comic> {
        let key = number.map(|n| n.get());
        self.calls.lock().push(key);
        match key {
            Some(num) => self.comics.get(&num).cloned(),
            None => self.latest.clone(),
        }
    }
}

/// Sink fake collecting delivered replies, optionally failing every send.
#[derive(Default)]
struct FakeSink {
    replies: Mutex<Vec<(String, String)>>,
    fail: bool,
}

impl FakeSink {
    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn replies(&self) -> Vec<(String, String)> {
        self.replies.lock().clone()
    }
}

#[async_trait]
impl ReplySink for FakeSink {
    async fn reply(&self, comment: &Comment, body: &str) -> StripbotResult<()> {
        if self.fail {
            return Err(HttpError::new("sink rejected the reply").into());
        }
        self.replies
            .lock()
            .push((comment.id.clone(), body.to_string()));
        Ok(())
    }
}

fn processor(
    lookup: Arc<FakeLookup>,
    sink: Arc<FakeSink>,
    metrics: BotMetrics,
) -> StreamProcessor<Arc<FakeLookup>, Arc<FakeSink>> {
    StreamProcessor::new(lookup, sink, ReplyPacer::new(Duration::ZERO), metrics)
}

#[tokio::test]
async fn non_trigger_comment_is_ignored_and_left_unmarked() {
    let lookup = Arc::new(FakeLookup::with_latest(comic(100, "Latest")));
    let sink = Arc::new(FakeSink::default());
    let metrics = BotMetrics::new();
    let mut processor = processor(Arc::clone(&lookup), Arc::clone(&sink), metrics.clone());

    let outcome = processor
        .process(&comment("c1", "just talking about comics"))
        .await;

    assert_eq!(outcome, CommentOutcome::NoTrigger);
    assert!(lookup.calls().is_empty());
    assert!(sink.replies().is_empty());
    assert_eq!(processor.ledger_len(), 0);
    assert_eq!(metrics.comments_processed(), 0);
}

#[tokio::test]
async fn numbered_trigger_replies_with_that_comic() {
    let lookup = Arc::new(
        FakeLookup::with_latest(comic(100, "Latest")).with_comic(comic(353, "Python")),
    );
    let sink = Arc::new(FakeSink::default());
    let metrics = BotMetrics::new();
    let mut processor = processor(Arc::clone(&lookup), Arc::clone(&sink), metrics.clone());

    let outcome = processor.process(&comment("c1", "please !xkcd 353")).await;

    assert_eq!(outcome, CommentOutcome::Replied);
    assert_eq!(lookup.calls(), vec![Some(353)]);

    let replies = sink.replies();
    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0].0, "c1");
    assert!(replies[0].1.contains("Python"));
    assert!(replies[0].1.contains("https://xkcd.com/353"));

    assert_eq!(metrics.comments_processed(), 1);
    assert_eq!(metrics.replies_sent(), 1);
    assert_eq!(metrics.errors(), 0);
}

#[tokio::test]
async fn negative_sign_is_dropped_by_the_parser() {
    // The digit-only capture never sees the minus sign, so "!xkcd -5"
    // requests comic 5.
    let lookup = Arc::new(FakeLookup::with_latest(comic(100, "Latest")).with_comic(comic(5, "Blown apart")));
    let sink = Arc::new(FakeSink::default());
    let mut processor = processor(Arc::clone(&lookup), Arc::clone(&sink), BotMetrics::new());

    let outcome = processor.process(&comment("c1", "!xkcd -5")).await;

    assert_eq!(outcome, CommentOutcome::Replied);
    assert_eq!(lookup.calls(), vec![Some(5)]);
}

#[tokio::test]
async fn bare_trigger_fetches_the_latest_comic() {
    let lookup = Arc::new(FakeLookup::with_latest(comic(2916, "Machine Learning")));
    let sink = Arc::new(FakeSink::default());
    let mut processor = processor(Arc::clone(&lookup), Arc::clone(&sink), BotMetrics::new());

    let outcome = processor.process(&comment("c1", "!xkcd")).await;

    assert_eq!(outcome, CommentOutcome::Replied);
    assert_eq!(lookup.calls(), vec![None]);

    let replies = sink.replies();
    assert!(replies[0].1.contains("Machine Learning"));
    assert!(replies[0].1.contains("https://xkcd.com/2916"));
}

#[tokio::test]
async fn invalid_number_gets_the_fixed_error_reply() {
    let lookup = Arc::new(FakeLookup::with_latest(comic(100, "Latest")));
    let sink = Arc::new(FakeSink::default());
    let metrics = BotMetrics::new();
    let mut processor = processor(Arc::clone(&lookup), Arc::clone(&sink), metrics.clone());

    let outcome = processor.process(&comment("c1", "!xkcd 0")).await;

    assert_eq!(outcome, CommentOutcome::InvalidNumber);
    assert!(lookup.calls().is_empty());

    let replies = sink.replies();
    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0].1, format_error(ReplyError::InvalidNumber));

    // Rejected comments are marked seen like answered ones.
    let again = processor.process(&comment("c1", "!xkcd 0")).await;
    assert_eq!(again, CommentOutcome::DuplicateSkipped);
    assert_eq!(metrics.comments_processed(), 1);
}

#[tokio::test]
async fn duplicate_comment_is_skipped() {
    let lookup = Arc::new(FakeLookup::with_latest(comic(100, "Latest")));
    let sink = Arc::new(FakeSink::default());
    let metrics = BotMetrics::new();
    let mut processor = processor(Arc::clone(&lookup), Arc::clone(&sink), metrics.clone());

    let first = processor.process(&comment("c1", "!xkcd")).await;
    let second = processor.process(&comment("c1", "!xkcd")).await;

    assert_eq!(first, CommentOutcome::Replied);
    assert_eq!(second, CommentOutcome::DuplicateSkipped);
    assert_eq!(sink.replies().len(), 1);
    assert_eq!(metrics.comments_processed(), 1);
    assert_eq!(metrics.replies_sent(), 1);
}

#[tokio::test]
async fn failed_lookup_sends_apology_and_marks_seen() {
    // No canned comics at all, so every lookup comes back absent.
    let lookup = Arc::new(FakeLookup::default());
    let sink = Arc::new(FakeSink::default());
    let metrics = BotMetrics::new();
    let mut processor = processor(Arc::clone(&lookup), Arc::clone(&sink), metrics.clone());

    let outcome = processor.process(&comment("c1", "!xkcd 99999")).await;

    assert_eq!(outcome, CommentOutcome::LookupAbsent);
    assert_eq!(sink.replies()[0].1, format_fetch_failure());
    assert_eq!(metrics.errors(), 1);

    // Policy: a failed lookup still consumes the comment.
    let again = processor.process(&comment("c1", "!xkcd 99999")).await;
    assert_eq!(again, CommentOutcome::DuplicateSkipped);
    assert_eq!(metrics.errors(), 1);
}

#[tokio::test]
async fn reply_failure_counts_an_error() {
    let lookup = Arc::new(FakeLookup::with_latest(comic(100, "Latest")));
    let sink = Arc::new(FakeSink::failing());
    let metrics = BotMetrics::new();
    let mut processor = processor(Arc::clone(&lookup), Arc::clone(&sink), metrics.clone());

    let outcome = processor.process(&comment("c1", "!xkcd")).await;

    assert_eq!(outcome, CommentOutcome::ReplyFailed);
    assert_eq!(metrics.replies_sent(), 0);
    assert_eq!(metrics.errors(), 1);

    // Still consumed; the ledger guarantee is at-most-one reply.
    let again = processor.process(&comment("c1", "!xkcd")).await;
    assert_eq!(again, CommentOutcome::DuplicateSkipped);
}

#[tokio::test]
async fn run_stops_at_the_first_stream_fault() {
    let lookup = Arc::new(FakeLookup::with_latest(comic(100, "Latest")));
    let sink = Arc::new(FakeSink::default());
    let mut processor = processor(Arc::clone(&lookup), Arc::clone(&sink), BotMetrics::new());

    let items: Vec<StripbotResult<Comment>> = vec![
        Ok(comment("c1", "!xkcd")),
        Err(StreamError::new(StreamErrorKind::ConnectionFailed(
            "socket closed".to_string(),
        ))
        .into()),
        Ok(comment("c2", "!xkcd")),
    ];
    let stream: CommentStream = Box::pin(futures_util::stream::iter(items));

    let result = processor.run(stream).await;

    assert!(result.is_err());
    // The comment before the fault was handled, the one after was not.
    assert_eq!(sink.replies().len(), 1);
    assert_eq!(sink.replies()[0].0, "c1");
}

/// Source fake handing out one scripted subscription per `subscribe` call,
/// then pending streams forever.
struct ScriptedSource {
    subscriptions: Mutex<VecDeque<Vec<StripbotResult<Comment>>>>,
}

impl ScriptedSource {
    fn new(subscriptions: Vec<Vec<StripbotResult<Comment>>>) -> Self {
        Self {
            subscriptions: Mutex::new(subscriptions.into()),
        }
    }
}

impl CommentSource for ScriptedSource {
    fn subscribe(&self) -> CommentStream {
        match self.subscriptions.lock().pop_front() {
            Some(items) => Box::pin(futures_util::stream::iter(items)),
            None => Box::pin(futures_util::stream::pending::<StripbotResult<Comment>>()),
        }
    }
}

#[tokio::test]
async fn supervisor_resubscribes_after_a_stream_fault() {
    let lookup = Arc::new(FakeLookup::with_latest(comic(100, "Latest")));
    let sink = Arc::new(FakeSink::default());
    let metrics = BotMetrics::new();
    let processor = processor(Arc::clone(&lookup), Arc::clone(&sink), metrics.clone());

    // First subscription faults mid-stream; the second delivers one more
    // comment and ends cleanly.
    let source = ScriptedSource::new(vec![
        vec![
            Ok(comment("c1", "!xkcd")),
            Err(StreamError::new(StreamErrorKind::ConnectionFailed(
                "socket closed".to_string(),
            ))
            .into()),
        ],
        vec![Ok(comment("c2", "!xkcd"))],
    ]);

    let supervisor = Supervisor::new(
        source,
        processor,
        Duration::from_millis(10),
        metrics.clone(),
    );

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let handle = tokio::spawn(supervisor.run(shutdown_rx));

    // Both comments answered means the supervisor survived the fault and
    // resubscribed.
    for _ in 0..200 {
        if sink.replies().len() == 2 {
            break;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    shutdown_tx.send(true).unwrap();
    handle.await.unwrap();

    let replies = sink.replies();
    assert_eq!(replies.len(), 2);
    assert_eq!(replies[0].0, "c1");
    assert_eq!(replies[1].0, "c2");
    assert_eq!(metrics.replies_sent(), 2);
    // The fault itself was counted.
    assert!(metrics.errors() >= 1);
}

#[tokio::test]
async fn supervisor_honors_shutdown_during_backoff() {
    let lookup = Arc::new(FakeLookup::with_latest(comic(100, "Latest")));
    let sink = Arc::new(FakeSink::default());
    let metrics = BotMetrics::new();
    let processor = processor(Arc::clone(&lookup), Arc::clone(&sink), metrics.clone());

    // The only subscription ends immediately, parking the supervisor in a
    // long backoff sleep.
    let source = ScriptedSource::new(vec![vec![]]);
    let supervisor = Supervisor::new(source, processor, Duration::from_secs(3600), metrics);

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let handle = tokio::spawn(supervisor.run(shutdown_rx));

    tokio::time::sleep(Duration::from_millis(20)).await;
    shutdown_tx.send(true).unwrap();

    tokio::time::timeout(Duration::from_secs(1), handle)
        .await
        .expect("supervisor should stop promptly")
        .unwrap();
}
