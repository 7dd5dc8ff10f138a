//! Wall-clock seam: calendar date + local hour

use std::fmt;

/// Local calendar date in the host's display format (e.g. `"Sat Oct 17 2026"`).
/// Only equality matters; the string is compared, never parsed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CalendarDate(String);

impl CalendarDate {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CalendarDate {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub trait Clock {
    fn today(&self) -> CalendarDate;
    /// Local hour, 0..=23
    fn hour(&self) -> u32;
}

/// Settable clock for tests and replays
#[derive(Clone, Debug)]
pub struct FixedClock {
    date: CalendarDate,
    hour: u32,
}

impl FixedClock {
    pub fn new(date: impl Into<String>, hour: u32) -> Self {
        Self { date: CalendarDate::new(date), hour }
    }

    pub fn set(&mut self, date: impl Into<String>, hour: u32) {
        self.date = CalendarDate::new(date);
        self.hour = hour;
    }

    pub fn set_hour(&mut self, hour: u32) {
        self.hour = hour;
    }
}

impl Clock for FixedClock {
    fn today(&self) -> CalendarDate {
        self.date.clone()
    }

    fn hour(&self) -> u32 {
        self.hour
    }
}
