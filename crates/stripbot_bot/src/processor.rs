//! The per-comment state machine.

use crate::{BotMetrics, DedupLedger, ReplyPacer};
use futures_util::StreamExt;
use stripbot_core::{
    Comment, ComicNumber, ReplyError, TriggerParser, format_comic, format_error,
    format_fetch_failure,
};
use stripbot_error::StripbotResult;
use stripbot_interface::{ComicLookup, CommentStream, ReplySink};
use tracing::{debug, error, info, instrument, warn};

/// What the processor did with one comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentOutcome {
    /// Already in the ledger; nothing done
    DuplicateSkipped,
    /// No trigger token in the body; left unmarked
    NoTrigger,
    /// Captured number failed validation; error reply sent
    InvalidNumber,
    /// Lookup came back absent; apology sent
    LookupAbsent,
    /// Comic reply delivered
    Replied,
    /// Reply delivery failed after retries
    ReplyFailed,
}

/// Orchestrates parsing, validation, lookup, and replying for each comment.
///
/// Constructed once with its collaborators injected and driven over a
/// comment stream by the supervisor. All per-comment failures are handled
/// here; only stream-level faults escape [`StreamProcessor::run`].
pub struct StreamProcessor<L, S> {
    parser: TriggerParser,
    lookup: L,
    sink: S,
    ledger: DedupLedger,
    pacer: ReplyPacer,
    metrics: BotMetrics,
}

impl<L: ComicLookup, S: ReplySink> StreamProcessor<L, S> {
    /// Create a processor with an empty ledger.
    pub fn new(lookup: L, sink: S, pacer: ReplyPacer, metrics: BotMetrics) -> Self {
        Self {
            parser: TriggerParser::new(),
            lookup,
            sink,
            ledger: DedupLedger::new(),
            pacer,
            metrics,
        }
    }

    /// Number of comments in the dedup ledger.
    pub fn ledger_len(&self) -> usize {
        self.ledger.len()
    }

    /// Consume `stream` until it ends or faults.
    ///
    /// A faulted item propagates to the caller; everything else is handled
    /// in place.
    pub async fn run(&mut self, mut stream: CommentStream) -> StripbotResult<()> {
        while let Some(item) = stream.next().await {
            let comment = item?;
            self.process(&comment).await;
        }
        Ok(())
    }

    /// Run one comment through the state machine.
    #[instrument(skip(self, comment), fields(comment_id = %comment.id, subreddit = %comment.subreddit))]
    pub async fn process(&mut self, comment: &Comment) -> CommentOutcome {
        if self.ledger.seen(&comment.id) {
            debug!("Duplicate comment, skipping");
            return CommentOutcome::DuplicateSkipped;
        }

        // Non-trigger comments are never marked seen; re-evaluating them
        // on a later delivery is harmless because they never match.
        let Some(command) = self.parser.parse(&comment.body) else {
            return CommentOutcome::NoTrigger;
        };

        info!("Found trigger command");
        self.metrics.record_comment();

        let number = match command.number.as_deref() {
            Some(raw) => match ComicNumber::parse(raw) {
                Ok(number) => Some(number),
                Err(_) => {
                    warn!(raw, "Rejected comic number");
                    self.send_reply(comment, format_error(ReplyError::InvalidNumber))
                        .await;
                    self.ledger.mark_seen(&comment.id);
                    return CommentOutcome::InvalidNumber;
                }
            },
            None => None,
        };

        let Some(comic) = self.lookup.fetch(number).await else {
            // Marked seen even though the lookup failed: one stream pass
            // delivers each comment once, and the ledger's guarantee is
            // at-most-one reply, not retry-until-success.
            self.metrics.record_error();
            self.send_reply(comment, format_fetch_failure()).await;
            self.ledger.mark_seen(&comment.id);
            return CommentOutcome::LookupAbsent;
        };

        let body = format_comic(&comic);
        let delivered = self.send_reply(comment, &body).await;
        self.ledger.mark_seen(&comment.id);

        if delivered {
            info!(num = comic.num, title = %comic.title, "Replied with comic");
            self.metrics.record_reply();
            CommentOutcome::Replied
        } else {
            CommentOutcome::ReplyFailed
        }
    }

    /// Pace, then deliver a reply. Returns whether delivery succeeded.
    async fn send_reply(&self, comment: &Comment, body: &str) -> bool {
        self.pacer.pace().await;
        match self.sink.reply(comment, body).await {
            Ok(()) => true,
            Err(e) => {
                error!(
                    comment_id = %comment.id,
                    subreddit = %comment.subreddit,
                    error = %e,
                    "Reply delivery failed"
                );
                self.metrics.record_error();
                false
            }
        }
    }
}
