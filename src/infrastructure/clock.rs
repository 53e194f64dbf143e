use crate::domain::expiry::YearMonth;
use crate::domain::ports::Clock;
use time::OffsetDateTime;

/// Reads the wall clock on every call.
///
/// UTC is used so that results do not depend on the host's timezone
/// configuration.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn today(&self) -> YearMonth {
        YearMonth::from_date(OffsetDateTime::now_utc().date())
    }
}

/// Always reports the same month. Used by tests and by `--as-of`.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    today: YearMonth,
}

impl FixedClock {
    pub fn new(today: YearMonth) -> Self {
        Self { today }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> YearMonth {
        self.today
    }
}
