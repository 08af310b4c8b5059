//! Wall-clock source for level timestamps.

use chrono::{Local, NaiveTime};

use crate::defaults;

/// Source of the `HH:MM:SS` wall-clock time prepended to log lines.
pub trait Clock: Send + Sync {
    /// Current local time formatted as `HH:MM:SS`
    fn now_hms(&self) -> String;

    /// The timestamp prefix written before a message, e.g. `"[14:03:59] "`
    fn timestamp(&self) -> String {
        format!("[{}] ", self.now_hms())
    }
}

/// The system's local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_hms(&self) -> String {
        Local::now().format(defaults::TIMESTAMP_FORMAT).to_string()
    }
}

/// A clock frozen at a single time of day. Makes formatted output
/// reproducible.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(NaiveTime);

impl FixedClock {
    /// Returns `None` if the components do not form a valid time of day.
    pub fn from_hms(hour: u32, min: u32, sec: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, min, sec).map(Self)
    }
}

impl Clock for FixedClock {
    fn now_hms(&self) -> String {
        self.0.format(defaults::TIMESTAMP_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_timestamp() {
        let clock = FixedClock::from_hms(9, 5, 3).unwrap();
        assert_eq!(clock.now_hms(), "09:05:03");
        assert_eq!(clock.timestamp(), "[09:05:03] ");
        assert!(FixedClock::from_hms(25, 0, 0).is_none());
    }

    #[test]
    fn test_system_clock_shape() {
        let stamp = SystemClock.timestamp();
        assert_eq!(stamp.len(), 11);
        assert!(stamp.starts_with('['));
        assert!(stamp.ends_with("] "));
        assert_eq!(stamp.as_bytes()[3], b':');
    }
}
