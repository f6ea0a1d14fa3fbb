//! Runner error types.

use thiserror::Error;

/// Errors from the terminal runner.
///
/// Widget operations themselves are total; only terminal setup and the
/// input event stream can fail.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// Terminal I/O failed (setup, teardown, or rendering).
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input event stream ended unexpectedly.
    #[error("input event stream closed")]
    EventStreamClosed,
}
