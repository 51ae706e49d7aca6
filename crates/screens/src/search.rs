//! Debounced free-text search.
//!
//! Every keystroke updates the draft immediately for display; the committed
//! value only follows after [`SEARCH_QUIET_PERIOD`] with no further input.
//! A new keystroke aborts and reschedules the pending timer. Enter bypasses
//! the timer: the caller invokes [`DebouncedSearch::flush`] and applies the
//! full filter form directly.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Quiet period before a search keystroke is committed.
pub const SEARCH_QUIET_PERIOD: Duration = Duration::from_millis(300);

/// One debounce timer for a reactive search field.
///
/// Must be created inside a tokio runtime; each keystroke spawns the timer
/// task that delivers the value on the paired channel.
#[derive(Debug)]
pub struct DebouncedSearch {
    quiet: Duration,
    tx: mpsc::UnboundedSender<String>,
    pending: Option<JoinHandle<()>>,
}

impl DebouncedSearch {
    /// Create a debouncer with the standard quiet period, returning the
    /// receiver the screen loop drains.
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<String>) {
        Self::with_quiet_period(SEARCH_QUIET_PERIOD)
    }

    /// Create a debouncer with a custom quiet period.
    #[must_use]
    pub fn with_quiet_period(quiet: Duration) -> (Self, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                quiet,
                tx,
                pending: None,
            },
            rx,
        )
    }

    /// Record a keystroke: cancel any pending commit and schedule delivery
    /// of `value` after the quiet period.
    pub fn keystroke(&mut self, value: String) {
        self.cancel_pending();

        let tx = self.tx.clone();
        // The quiet period is measured from this keystroke, not from when
        // the spawned task first runs.
        let deadline = tokio::time::Instant::now() + self.quiet;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            // Receiver may be gone during shutdown; nothing to do then.
            let _ = tx.send(value);
        }));
    }

    /// Cancel the pending commit, if any. Used for the Enter key, which
    /// applies the whole filter form immediately instead.
    pub fn flush(&mut self) {
        self.cancel_pending();
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for DebouncedSearch {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
