use std::cell::Cell;
use std::time::{Duration, Instant};

/// How long the "copied" acknowledgment stays visible.
pub const COPIED_DISPLAY: Duration = Duration::from_millis(2000);

/// Source of the current time for the copied acknowledgment.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Cell<Instant>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Cell::new(Instant::now()),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

/// The transient "copied" acknowledgment.
///
/// There is a single deadline: arming it again replaces the previous one, so
/// repeated copies never stack expiry callbacks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopiedFlag {
    expires_at: Option<Instant>,
}

impl CopiedFlag {
    pub fn arm(&mut self, now: Instant) {
        self.expires_at = Some(now + COPIED_DISPLAY);
    }

    pub fn reset(&mut self) {
        self.expires_at = None;
    }

    pub fn is_set(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|deadline| now < deadline)
    }
}
