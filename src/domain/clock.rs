use chrono::{Local, NaiveDate};

/// Supplies the calendar date used for daily-limit bookkeeping.
///
/// Injected into deposit/withdraw calls so that behavior stays
/// deterministic under test instead of reading the system clock directly.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the local system date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a fixed date, for tests and replay tooling.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
