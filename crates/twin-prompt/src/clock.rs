//! Wall-clock access for the timestamp embedded in the prompt.

use chrono::{Local, NaiveDateTime, Timelike};

/// `strftime` pattern for the embedded timestamp (`YYYY-MM-DD HH:MM:SS`).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Source of the current local time.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Reads the local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(NaiveDateTime);

impl FixedClock {
    pub fn new(at: NaiveDateTime) -> Self {
        Self(at)
    }

    /// Parse an instant written in [`TIMESTAMP_FORMAT`].
    pub fn parse(s: &str) -> Result<Self, chrono::ParseError> {
        NaiveDateTime::parse_from_str(s.trim(), TIMESTAMP_FORMAT).map(Self)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Format an instant for embedding, dropping sub-second precision.
pub fn format_timestamp(at: NaiveDateTime) -> String {
    let at = at.with_nanosecond(0).unwrap_or(at);
    at.format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32, milli: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_milli_opt(h, m, s, milli)
            .unwrap()
    }

    #[test]
    fn formats_with_zero_padding() {
        assert_eq!(format_timestamp(at(9, 5, 3, 0)), "2024-03-07 09:05:03");
    }

    #[test]
    fn sub_second_precision_is_dropped() {
        assert_eq!(
            format_timestamp(at(12, 0, 1, 10)),
            format_timestamp(at(12, 0, 1, 990))
        );
    }

    #[test]
    fn different_seconds_differ() {
        assert_ne!(
            format_timestamp(at(12, 0, 1, 999)),
            format_timestamp(at(12, 0, 2, 0))
        );
    }

    #[test]
    fn fixed_clock_parses_its_own_format() {
        let clock = FixedClock::parse("2024-03-07 23:59:58").unwrap();
        assert_eq!(clock.now(), at(23, 59, 58, 0));
        assert!(FixedClock::parse("07/03/2024").is_err());
    }

    #[test]
    fn system_clock_output_has_expected_shape() {
        let s = format_timestamp(SystemClock.now());
        assert_eq!(s.len(), 19);
        assert!(NaiveDateTime::parse_from_str(&s, TIMESTAMP_FORMAT).is_ok());
    }
}
