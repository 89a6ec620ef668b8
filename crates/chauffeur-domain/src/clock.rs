//! Wall-clock time sources

use std::cell::Cell;

use chrono::{DateTime, Duration, Utc};

/// Source of the current time for expiry checks
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Clock backed by the system time
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Manually advanced clock for simulating time passage
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Cell<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    pub fn advance(&self, by: Duration) {
        debug_assert!(by >= Duration::zero(), "clock must not move backwards");
        self.now.set(self.now.get() + by);
    }

    pub fn advance_minutes(&self, minutes: i64) {
        self.advance(Duration::minutes(minutes));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn manual_clock_advances_in_minutes() {
        let start = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        let clock = ManualClock::new(start);
        assert_eq!(clock.now(), start);

        clock.advance_minutes(91);
        assert_eq!(clock.now(), start + Duration::minutes(91));
    }

    #[test]
    fn borrowed_clock_reads_through() {
        let start = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        let clock = ManualClock::new(start);
        let borrowed: &ManualClock = &clock;
        clock.advance_minutes(5);
        assert_eq!(Clock::now(&borrowed), start + Duration::minutes(5));
    }
}
