//! Testability port for injecting time.

use chrono::{DateTime, Utc};

/// Wall clock used for JSON-RPC ids and result timestamps.
///
/// Tests substitute `FixedClock`.
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
