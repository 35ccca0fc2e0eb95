//! Clock implementations.

use chrono::{Local, NaiveDate};

use crate::infrastructure::ports::ClockPort;

/// System clock - uses the machine's local date.
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockPort for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Fixed clock for testing.
#[cfg(test)]
pub struct FixedClock(pub NaiveDate);

#[cfg(test)]
impl ClockPort for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
