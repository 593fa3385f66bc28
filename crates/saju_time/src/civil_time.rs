//! Validated civil (wall-clock) date/time.
//!
//! Provides `CivilTime`, the canonical timestamp type of the engine. A
//! `CivilTime` is a clock reading with no zone attached; whether it is a
//! zone's civil time, true local time, or UT depends on where it came from.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::{MAX_SUPPORTED_YEAR, MIN_SUPPORTED_YEAR, calendar_to_jd, julian_day_number};

/// Accepted textual forms, tried in order.
const PARSE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Calendar date and time of day with whole-second precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "NaiveDateTime", into = "NaiveDateTime")]
pub struct CivilTime {
    inner: NaiveDateTime,
}

impl CivilTime {
    /// Build a civil time, rejecting nonexistent dates and years outside
    /// 1900..=9999, the span the solar model covers.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, TimeError> {
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            TimeError::InvalidCivilTime(format!("{year:04}-{month:02}-{day:02} is not a date"))
        })?;
        let inner = date.and_hms_opt(hour, minute, second).ok_or_else(|| {
            TimeError::InvalidCivilTime(format!(
                "{hour:02}:{minute:02}:{second:02} is not a time of day"
            ))
        })?;
        Self::from_naive(inner)
    }

    /// Wrap a chrono timestamp, enforcing the supported epoch.
    pub fn from_naive(inner: NaiveDateTime) -> Result<Self, TimeError> {
        if inner.year() < MIN_SUPPORTED_YEAR {
            return Err(TimeError::OutOfRange(format!(
                "{inner} precedes {MIN_SUPPORTED_YEAR}-01-01"
            )));
        }
        if inner.year() > MAX_SUPPORTED_YEAR {
            return Err(TimeError::OutOfRange(format!(
                "{inner} is after {MAX_SUPPORTED_YEAR}-12-31"
            )));
        }
        Ok(Self {
            inner: inner.with_nanosecond(0).unwrap_or(inner),
        })
    }

    pub fn year(&self) -> i32 {
        self.inner.year()
    }

    pub fn month(&self) -> u32 {
        self.inner.month()
    }

    pub fn day(&self) -> u32 {
        self.inner.day()
    }

    pub fn hour(&self) -> u32 {
        self.inner.hour()
    }

    pub fn minute(&self) -> u32 {
        self.inner.minute()
    }

    pub fn second(&self) -> u32 {
        self.inner.second()
    }

    /// The underlying chrono value.
    pub fn as_naive(&self) -> NaiveDateTime {
        self.inner
    }

    /// Shift by a signed, possibly fractional, number of minutes.
    ///
    /// The result is rounded to the nearest second. It may fall before
    /// 1900-01-01: shifted readings are derived values, not inputs.
    pub fn shifted_minutes(&self, minutes: f64) -> Result<Self, TimeError> {
        if !minutes.is_finite() {
            return Err(TimeError::InvalidCivilTime(format!(
                "cannot shift by {minutes} minutes"
            )));
        }
        let seconds = (minutes * 60.0).round() as i64;
        let inner = TimeDelta::try_seconds(seconds)
            .and_then(|delta| self.inner.checked_add_signed(delta))
            .ok_or_else(|| {
                TimeError::InvalidCivilTime(format!("shift of {minutes} minutes overflows"))
            })?;
        Ok(Self { inner })
    }

    /// Julian Day Number of this reading's calendar date.
    pub fn julian_day_number(&self) -> i64 {
        julian_day_number(self.year(), self.month(), self.day())
    }

    /// Fractional Julian Date of this reading, on whatever scale it is in.
    pub fn to_jd(&self) -> f64 {
        let day_frac = f64::from(self.day())
            + f64::from(self.hour()) / 24.0
            + f64::from(self.minute()) / 1440.0
            + f64::from(self.second()) / 86_400.0;
        calendar_to_jd(self.year(), self.month(), day_frac)
    }
}

impl TryFrom<NaiveDateTime> for CivilTime {
    type Error = TimeError;

    fn try_from(value: NaiveDateTime) -> Result<Self, Self::Error> {
        Self::from_naive(value)
    }
}

impl From<CivilTime> for NaiveDateTime {
    fn from(value: CivilTime) -> Self {
        value.inner
    }
}

impl FromStr for CivilTime {
    type Err = TimeError;

    /// Parse `YYYY-MM-DDThh:mm[:ss]` (a space may replace the `T`), or a
    /// bare date `YYYY-MM-DD` meaning 00:00.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        for fmt in PARSE_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
                return Self::from_naive(dt);
            }
        }
        if let Some(dt) = NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
        {
            return Self::from_naive(dt);
        }
        Err(TimeError::InvalidCivilTime(format!(
            "cannot parse '{s}', expected YYYY-MM-DDThh:mm[:ss]"
        )))
    }
}

impl Display for CivilTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner.format("%Y-%m-%dT%H:%M:%S"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_constructor() {
        let t = CivilTime::new(2024, 3, 20, 12, 30, 45).unwrap();
        assert_eq!(t.year(), 2024);
        assert_eq!(t.month(), 3);
        assert_eq!(t.day(), 20);
        assert_eq!(t.hour(), 12);
        assert_eq!(t.minute(), 30);
        assert_eq!(t.second(), 45);
    }

    #[test]
    fn rejects_nonexistent_date() {
        let err = CivilTime::new(2023, 2, 29, 0, 0, 0).unwrap_err();
        assert!(matches!(err, TimeError::InvalidCivilTime(_)));
    }

    #[test]
    fn rejects_hour_24() {
        assert!(CivilTime::new(2023, 1, 1, 24, 0, 0).is_err());
    }

    #[test]
    fn rejects_pre_1900() {
        let err = CivilTime::new(1899, 12, 31, 23, 59, 59).unwrap_err();
        assert!(matches!(err, TimeError::OutOfRange(_)));
    }

    #[test]
    fn rejects_past_9999() {
        let err = CivilTime::new(10_000, 1, 1, 0, 0, 0).unwrap_err();
        assert!(matches!(err, TimeError::OutOfRange(_)));
        assert!(CivilTime::new(9999, 12, 31, 23, 59, 59).is_ok());
    }

    #[test]
    fn parse_forms() {
        let a: CivilTime = "1990-05-15T14:30".parse().unwrap();
        let b: CivilTime = "1990-05-15 14:30:00".parse().unwrap();
        assert_eq!(a, b);
        let c: CivilTime = "1990-05-15".parse().unwrap();
        assert_eq!(c.hour(), 0);
    }

    #[test]
    fn parse_garbage_fails() {
        assert!("yesterday".parse::<CivilTime>().is_err());
    }

    #[test]
    fn display_round_trip() {
        let t = CivilTime::new(2024, 1, 15, 7, 5, 9).unwrap();
        assert_eq!(t.to_string(), "2024-01-15T07:05:09");
        assert_eq!(t.to_string().parse::<CivilTime>().unwrap(), t);
    }

    #[test]
    fn shift_crosses_midnight() {
        let t = CivilTime::new(2024, 1, 1, 0, 10, 0).unwrap();
        let s = t.shifted_minutes(-32.0).unwrap();
        assert_eq!((s.year(), s.month(), s.day()), (2023, 12, 31));
        assert_eq!((s.hour(), s.minute()), (23, 38));
    }

    #[test]
    fn shift_rounds_to_second() {
        let t = CivilTime::new(2024, 1, 1, 12, 0, 0).unwrap();
        let s = t.shifted_minutes(-32.08).unwrap();
        assert_eq!((s.hour(), s.minute(), s.second()), (11, 27, 55));
    }

    #[test]
    fn shift_nan_fails() {
        let t = CivilTime::new(2024, 1, 1, 12, 0, 0).unwrap();
        assert!(t.shifted_minutes(f64::NAN).is_err());
    }

    #[test]
    fn jd_at_noon_j2000() {
        let t = CivilTime::new(2000, 1, 1, 12, 0, 0).unwrap();
        assert!((t.to_jd() - 2_451_545.0).abs() < 1e-9);
        assert_eq!(t.julian_day_number(), 2_451_545);
    }
}
