//! Time source for submission timestamps.

use chrono::{DateTime, Utc};

/// Supplies the instant a work is stamped with when it is accepted.
///
/// Handlers take a `&dyn Clock` so tests can pin `submitted_at`.
pub trait Clock: Send + Sync {
    /// The instant to record as `submitted_at`.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time, used by the running server.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
