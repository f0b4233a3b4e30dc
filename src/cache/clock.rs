// Time source for cache expiry
// Author: kelexine (https://github.com/kelexine)

use chrono::{DateTime, Utc};

/// Supplies the current time to the cache so expiry can be driven by tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
