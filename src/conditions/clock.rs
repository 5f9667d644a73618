//! Timestamp source for transition times

use chrono::{DateTime, SubsecRound, Utc};

/// Source of the current time
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

/// Drop sub-second precision so stored times survive a round trip through
/// second-resolution serialization unchanged.
pub fn truncate_to_second(t: DateTime<Utc>) -> DateTime<Utc> {
    t.trunc_subsecs(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    #[test]
    fn test_truncate_to_second() {
        let t = Utc
            .with_ymd_and_hms(2024, 5, 6, 7, 8, 9)
            .unwrap()
            .with_nanosecond(987_654_321)
            .unwrap();
        let truncated = truncate_to_second(t);
        assert_eq!(truncated.nanosecond(), 0);
        assert_eq!(truncated.second(), 9);
    }

    #[test]
    fn test_reference_clock_delegates() {
        let mut clock = MockClock::new();
        let fixed = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        clock.expect_now().times(1).return_const(fixed);
        let by_ref: &MockClock = &clock;
        assert_eq!(Clock::now(&by_ref), fixed);
    }
}
