//! Render wakeups for the passive event loop.
//!
//! The widget owns a [`WakeupHandle`] from construction and notifies it on
//! every state change that warrants a render check: a selection toggle, a
//! cursor move, the debounced filter recompute firing. The runner awaits the
//! same handle, so a quiet-period expiry re-renders without any input
//! arriving.
//!
//! Notifications coalesce: at most one permit is stored, so a burst of
//! mutations wakes the loop once. With no loop attached the permit is simply
//! never consumed, which lets the widget run standalone (e.g. in tests).

use std::sync::Arc;

use tokio::sync::Notify;

/// Shared wakeup signal between a widget and its event loop.
///
/// Cloning yields another handle to the same signal.
#[derive(Debug, Clone, Default)]
pub struct WakeupHandle {
    notify: Arc<Notify>,
}

impl WakeupHandle {
    /// Create a new handle with no pending wakeup.
    pub fn new() -> Self {
        Self::default()
    }

    /// Signal that state changed and a render check is due.
    ///
    /// Non-blocking; callable from sync and async contexts alike.
    pub fn notify(&self) {
        self.notify.notify_one();
    }

    /// Wait until the next wakeup.
    ///
    /// Resolves immediately if a wakeup arrived since the last await.
    pub async fn awoken(&self) {
        self.notify.notified().await;
    }
}
