//! Wall-clock time of day
//!
//! Persistence hands interview times over as strings in either 12-hour
//! (`"10:00 AM"`) or 24-hour (`"14:30"`) form. [`TimeOfDay`] normalises both
//! into minutes since midnight at the boundary so the scheduling core only
//! ever compares integers.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::{MINUTES_PER_DAY, MINUTES_PER_HOUR};
use crate::errors::TimeParseError;

/// Minutes since local midnight, always `< 1440`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub const MIDNIGHT: Self = Self(0);

    /// Build from an hour (0-23) and minute (0-59).
    pub const fn from_hm(hour: u16, minute: u16) -> Option<Self> {
        if hour < 24 && minute < MINUTES_PER_HOUR {
            Some(Self(hour * MINUTES_PER_HOUR + minute))
        } else {
            None
        }
    }

    /// Build from minutes since midnight; `None` at or past 24:00.
    pub const fn from_minutes(minutes: u16) -> Option<Self> {
        if minutes < MINUTES_PER_DAY {
            Some(Self(minutes))
        } else {
            None
        }
    }

    pub const fn minutes(self) -> u16 {
        self.0
    }

    pub const fn hour(self) -> u16 {
        self.0 / MINUTES_PER_HOUR
    }

    pub const fn minute(self) -> u16 {
        self.0 % MINUTES_PER_HOUR
    }

    /// Returns `None` when the result would cross midnight.
    pub const fn checked_add_minutes(self, minutes: u16) -> Option<Self> {
        match self.0.checked_add(minutes) {
            Some(total) => Self::from_minutes(total),
            None => None,
        }
    }

    /// Parse a 12-hour or 24-hour wall-clock string.
    ///
    /// Accepted forms: `"14:30"`, `"8:05"`, `"14:30:00"` (seconds are
    /// dropped), `"10:00 AM"`, `"9:15pm"`, `"12:00 PM"` (noon),
    /// `"12:00 AM"` (midnight). Bare `H:MM` without a marker is read as
    /// 24-hour time, except `12:MM`, which is rejected as ambiguous.
    ///
    /// # Errors
    /// Fails on empty input, a missing minutes component (`"10"`), a bare
    /// `12:MM`, hours or minutes out of range for the detected clock, or
    /// anything else.
    pub fn parse(input: &str) -> Result<Self, TimeParseError> {
        Self::parse_with(input, false)
    }

    /// Parse the 24-hour form written by `Display` and serde.
    ///
    /// Same as [`parse`](Self::parse) but a bare `12:MM` is noon, since
    /// `Display` never emits a 12-hour value without its marker.
    ///
    /// # Errors
    /// As [`parse`](Self::parse), minus the ambiguity check.
    pub fn parse_24_hour(input: &str) -> Result<Self, TimeParseError> {
        Self::parse_with(input, true)
    }

    fn parse_with(input: &str, bare_twelve_is_noon: bool) -> Result<Self, TimeParseError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(TimeParseError::Empty);
        }

        let upper = trimmed.to_ascii_uppercase();
        let (clock, meridiem) = split_meridiem(&upper);

        let Some((hour_part, rest)) = clock.split_once(':') else {
            return Err(if is_digits(clock, 1, 2) {
                TimeParseError::MissingMinutes(trimmed.to_string())
            } else {
                TimeParseError::Malformed(trimmed.to_string())
            });
        };

        let minute_part = match rest.split_once(':') {
            Some((minutes, seconds)) => {
                if !is_digits(seconds, 2, 2) || parse_digits(seconds) >= 60 {
                    return Err(TimeParseError::Malformed(trimmed.to_string()));
                }
                minutes
            }
            None => rest,
        };

        if !is_digits(hour_part, 1, 2) {
            return Err(TimeParseError::Malformed(trimmed.to_string()));
        }
        if minute_part.is_empty() {
            return Err(TimeParseError::MissingMinutes(trimmed.to_string()));
        }
        if !is_digits(minute_part, 2, 2) {
            return Err(TimeParseError::Malformed(trimmed.to_string()));
        }

        let hour = parse_digits(hour_part);
        let minute = parse_digits(minute_part);
        if minute >= MINUTES_PER_HOUR {
            return Err(TimeParseError::MinuteOutOfRange(trimmed.to_string()));
        }

        let hour24 = match meridiem {
            None if hour == 12 && !bare_twelve_is_noon => {
                return Err(TimeParseError::Ambiguous(trimmed.to_string()))
            }
            None if hour < 24 => hour,
            Some(_) if !(1..=12).contains(&hour) => {
                return Err(TimeParseError::HourOutOfRange(trimmed.to_string()))
            }
            Some(Meridiem::Am) => hour % 12,
            Some(Meridiem::Pm) => hour % 12 + 12,
            None => return Err(TimeParseError::HourOutOfRange(trimmed.to_string())),
        };

        Self::from_hm(hour24, minute).ok_or_else(|| TimeParseError::Malformed(trimmed.to_string()))
    }

    /// `"h:MM AM"` rendering used by the UI.
    pub fn to_12_hour_string(self) -> String {
        let (hour, suffix) = match self.hour() {
            0 => (12, "AM"),
            h @ 1..=11 => (h, "AM"),
            12 => (12, "PM"),
            h => (h - 12, "PM"),
        };
        format!("{hour}:{:02} {suffix}", self.minute())
    }

    /// Same time as a chrono `NaiveTime` with zero seconds.
    pub fn to_naive_time(self) -> NaiveTime {
        NaiveTime::from_hms_opt(u32::from(self.hour()), u32::from(self.minute()), 0)
            .unwrap_or(NaiveTime::MIN)
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        // hour() < 24 and minute() < 60 by construction
        Self((time.hour() * 60 + time.minute()) as u16)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse_24_hour(&raw).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Meridiem {
    Am,
    Pm,
}

fn split_meridiem(upper: &str) -> (&str, Option<Meridiem>) {
    if let Some(clock) = upper.strip_suffix("AM") {
        (clock.trim_end(), Some(Meridiem::Am))
    } else if let Some(clock) = upper.strip_suffix("PM") {
        (clock.trim_end(), Some(Meridiem::Pm))
    } else {
        (upper, None)
    }
}

fn is_digits(s: &str, min_len: usize, max_len: usize) -> bool {
    (min_len..=max_len).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
}

// Callers check `is_digits` first, so at most two ASCII digits reach here.
fn parse_digits(s: &str) -> u16 {
    s.bytes().fold(0, |acc, b| acc * 10 + u16::from(b - b'0'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(hour: u16, minute: u16) -> TimeOfDay {
        TimeOfDay::from_hm(hour, minute).unwrap()
    }

    #[test]
    fn test_parse_24_hour() {
        assert_eq!(TimeOfDay::parse("14:30").unwrap(), t(14, 30));
        assert_eq!(TimeOfDay::parse("08:00").unwrap(), t(8, 0));
        assert_eq!(TimeOfDay::parse("8:05").unwrap(), t(8, 5));
        assert_eq!(TimeOfDay::parse("00:00").unwrap(), TimeOfDay::MIDNIGHT);
        assert_eq!(TimeOfDay::parse("23:59").unwrap(), t(23, 59));
        assert_eq!(TimeOfDay::parse(" 09:15 ").unwrap(), t(9, 15));
    }

    #[test]
    fn test_parse_with_seconds() {
        assert_eq!(TimeOfDay::parse("14:30:00").unwrap(), t(14, 30));
        assert!(TimeOfDay::parse("14:30:75").is_err());
        assert!(TimeOfDay::parse("14:30:0").is_err());
    }

    #[test]
    fn test_parse_12_hour() {
        assert_eq!(TimeOfDay::parse("10:00 AM").unwrap(), t(10, 0));
        assert_eq!(TimeOfDay::parse("2:30 PM").unwrap(), t(14, 30));
        assert_eq!(TimeOfDay::parse("9:15pm").unwrap(), t(21, 15));
        assert_eq!(TimeOfDay::parse("12:00 PM").unwrap(), t(12, 0));
        assert_eq!(TimeOfDay::parse("12:00 AM").unwrap(), TimeOfDay::MIDNIGHT);
        assert_eq!(TimeOfDay::parse("12:45 am").unwrap(), t(0, 45));
    }

    #[test]
    fn test_bare_twelve_is_ambiguous() {
        for raw in ["12:00", "12:30", " 12:45:00 "] {
            assert!(matches!(TimeOfDay::parse(raw), Err(TimeParseError::Ambiguous(_))), "{raw}");
        }
        assert_eq!(TimeOfDay::parse("12:00 PM").unwrap(), t(12, 0));
        assert_eq!(TimeOfDay::parse("00:30").unwrap(), t(0, 30));
        assert_eq!(TimeOfDay::parse_24_hour("12:00").unwrap(), t(12, 0));
    }

    #[test]
    fn test_parse_rejects_missing_minutes() {
        assert_eq!(
            TimeOfDay::parse("10"),
            Err(TimeParseError::MissingMinutes("10".to_string()))
        );
        assert!(matches!(TimeOfDay::parse("10 AM"), Err(TimeParseError::MissingMinutes(_))));
        assert!(matches!(TimeOfDay::parse("10:"), Err(TimeParseError::MissingMinutes(_))));
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert!(matches!(TimeOfDay::parse("24:00"), Err(TimeParseError::HourOutOfRange(_))));
        assert!(matches!(TimeOfDay::parse("13:00 PM"), Err(TimeParseError::HourOutOfRange(_))));
        assert!(matches!(TimeOfDay::parse("0:30 AM"), Err(TimeParseError::HourOutOfRange(_))));
        assert!(matches!(TimeOfDay::parse("10:60"), Err(TimeParseError::MinuteOutOfRange(_))));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(TimeOfDay::parse("   "), Err(TimeParseError::Empty));
        assert!(matches!(TimeOfDay::parse("ten"), Err(TimeParseError::Malformed(_))));
        assert!(matches!(TimeOfDay::parse("10:0"), Err(TimeParseError::Malformed(_))));
        assert!(matches!(TimeOfDay::parse("10:00 XM"), Err(TimeParseError::Malformed(_))));
        assert!(matches!(TimeOfDay::parse("-1:00"), Err(TimeParseError::Malformed(_))));
    }

    #[test]
    fn test_display_and_12_hour_rendering() {
        assert_eq!(t(9, 5).to_string(), "09:05");
        assert_eq!(t(0, 0).to_12_hour_string(), "12:00 AM");
        assert_eq!(t(9, 5).to_12_hour_string(), "9:05 AM");
        assert_eq!(t(12, 30).to_12_hour_string(), "12:30 PM");
        assert_eq!(t(17, 0).to_12_hour_string(), "5:00 PM");
    }

    #[test]
    fn test_display_output_parses_back() {
        for minutes in (0..MINUTES_PER_DAY).step_by(37) {
            let time = TimeOfDay::from_minutes(minutes).unwrap();
            assert_eq!(TimeOfDay::parse_24_hour(&time.to_string()).unwrap(), time);
            assert_eq!(TimeOfDay::parse(&time.to_12_hour_string()).unwrap(), time);
        }
    }

    #[test]
    fn test_checked_add_stops_at_midnight() {
        assert_eq!(t(17, 0).checked_add_minutes(60), Some(t(18, 0)));
        assert_eq!(t(23, 30).checked_add_minutes(30), None);
    }

    #[test]
    fn test_serde_uses_string_form() {
        let json = serde_json::to_string(&t(14, 30)).unwrap();
        assert_eq!(json, r#""14:30""#);
        let back: TimeOfDay = serde_json::from_str(r#""2:30 PM""#).unwrap();
        assert_eq!(back, t(14, 30));
        assert!(serde_json::from_str::<TimeOfDay>(r#""10""#).is_err());
        let noon: TimeOfDay = serde_json::from_str(&serde_json::to_string(&t(12, 15)).unwrap()).unwrap();
        assert_eq!(noon, t(12, 15));
    }

    #[test]
    fn test_naive_time_conversion() {
        let naive = NaiveTime::from_hms_opt(16, 45, 12).unwrap();
        assert_eq!(TimeOfDay::from(naive), t(16, 45));
        assert_eq!(t(16, 45).to_naive_time(), NaiveTime::from_hms_opt(16, 45, 0).unwrap());
    }
}
