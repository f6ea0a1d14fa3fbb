//! Cancellable debounce timer.
//!
//! The pending recompute is held as an explicit task handle so it can be
//! aborted on every reschedule and on drop. Last value wins: a superseded
//! schedule is discarded entirely, never executed or queued.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;

/// Default quiet period before a scheduled task fires.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(1000);

/// A debounce timer that runs a task after a quiet period.
///
/// Each call to [`schedule`](Debouncer::schedule) aborts the previously
/// pending task (if any) and arms a new one. Dropping the debouncer aborts
/// the pending task, so a torn-down owner can never be fired against.
///
/// Requires an ambient tokio runtime.
#[derive(Debug)]
pub struct Debouncer {
    /// Quiet period between the last schedule and the task firing.
    delay: Duration,
    /// Handle to the pending task, if one is armed.
    pending: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl Debouncer {
    /// Create a debouncer with the given quiet period.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Arc::new(Mutex::new(None)),
        }
    }

    /// Get the configured quiet period.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `task` to run after the quiet period.
    ///
    /// Cancels any previously scheduled task. The superseded task is
    /// discarded, not executed.
    pub fn schedule<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let delay = self.delay;
        if let Ok(mut guard) = self.pending.lock() {
            if let Some(handle) = guard.take() {
                handle.abort();
            }
            *guard = Some(tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                task.await;
            }));
        }
    }

    /// Cancel the pending task, if any.
    pub fn cancel(&self) {
        if let Ok(mut guard) = self.pending.lock()
            && let Some(handle) = guard.take()
        {
            handle.abort();
        }
    }

    /// Check whether a task is currently armed and not yet finished.
    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .map(|guard| guard.as_ref().is_some_and(|h| !h.is_finished()))
            .unwrap_or(false)
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
