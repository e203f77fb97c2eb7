//! Scoped log suppression.

use log::LevelFilter;

/// Lowers the global log level to `Error` until dropped, then restores the
/// previous level exactly.
///
/// Used around the font compiler so its progress and warning output stays
/// hidden while fatal errors still get through.
#[must_use = "logs are only suppressed while the guard is alive"]
#[derive(Debug)]
pub struct QuietLogs {
    previous: LevelFilter,
}

impl QuietLogs {
    pub fn enter() -> Self {
        let previous = log::max_level();
        log::set_max_level(previous.min(LevelFilter::Error));
        Self { previous }
    }
}

impl Drop for QuietLogs {
    fn drop(&mut self) {
        log::set_max_level(self.previous);
    }
}
