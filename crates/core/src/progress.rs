//! Step notifications for callers that display progress.

use std::time::Duration;

/// Receives pipeline step notifications.
pub trait Progress {
    /// Step `step` of `total` is starting.
    fn step(&self, step: usize, total: usize, label: &str);

    /// The step named `label` finished.
    fn step_done(&self, _label: &str, _elapsed: Duration) {}
}

/// Discards every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl Progress for NoProgress {
    fn step(&self, _step: usize, _total: usize, _label: &str) {}
}
