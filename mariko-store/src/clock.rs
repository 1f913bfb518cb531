//! Time source abstraction
//!
//! Record stamps, the 7-day activity windows, retention cutoffs and the
//! cleanup gate all ask the clock for "now", so tests pin time with
//! [`ManualClock`].

use std::cell::Cell;
use std::rc::Rc;

use chrono::{DateTime, Utc};

/// Source of "now" for the store.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Deterministic clock for tests and replays. Clones share the same
/// underlying instant, so a test keeps one handle and moves the store's
/// copy through it.
#[derive(Debug, Clone)]
pub struct ManualClock(Rc<Cell<DateTime<Utc>>>);

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self(Rc::new(Cell::new(start)))
    }

    pub fn set(&self, instant: DateTime<Utc>) {
        self.0.set(instant);
    }

    pub fn advance(&self, delta: chrono::Duration) {
        self.0.set(self.0.get() + delta);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.0.get()
    }
}
