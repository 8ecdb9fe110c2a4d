//! Comparison granularity and calendar truncation.
//!
//! Two instants are compared by first truncating both to the start of the
//! enclosing [`ComparisonUnit`] (in wall-clock time of the evaluation zone)
//! and then comparing the truncated values. `2020-06-24T10:30` and
//! `2020-06-24T23:00` are equal at [`ComparisonUnit::Day`] but not at
//! [`ComparisonUnit::Hour`].

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

// ── Configurable week start ─────────────────────────────────────────────────

/// Which day begins a week for [`ComparisonUnit::Week`] truncation.
///
/// [`ComparisonUnit::IsoWeek`] ignores this and always starts on Monday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStartDay {
    /// ISO 8601 convention (Monday = day 0 of the week).
    Monday,
    /// US/Canada convention (Sunday = day 0 of the week).
    #[default]
    Sunday,
}

/// How many days `weekday` is from the week-start day.
fn days_from_week_start(weekday: Weekday, week_start: WeekStartDay) -> u64 {
    match week_start {
        WeekStartDay::Monday => weekday.num_days_from_monday() as u64,
        WeekStartDay::Sunday => weekday.num_days_from_sunday() as u64,
    }
}

fn start_of_week(date: NaiveDate, week_start: WeekStartDay) -> Option<NaiveDate> {
    date.checked_sub_days(Days::new(days_from_week_start(date.weekday(), week_start)))
}

// ── ComparisonUnit ──────────────────────────────────────────────────────────

/// The calendar granularity at which two instants are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ComparisonUnit {
    Year,
    Month,
    /// Week starting on the configured [`WeekStartDay`].
    Week,
    /// ISO 8601 week, always starting on Monday.
    IsoWeek,
    #[default]
    Day,
    Hour,
    Minute,
    Second,
}

impl ComparisonUnit {
    pub const ALL: [ComparisonUnit; 8] = [
        ComparisonUnit::Year,
        ComparisonUnit::Month,
        ComparisonUnit::Week,
        ComparisonUnit::IsoWeek,
        ComparisonUnit::Day,
        ComparisonUnit::Hour,
        ComparisonUnit::Minute,
        ComparisonUnit::Second,
    ];

    /// Canonical name, as accepted by [`FromStr`] and emitted by serde.
    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonUnit::Year => "year",
            ComparisonUnit::Month => "month",
            ComparisonUnit::Week => "week",
            ComparisonUnit::IsoWeek => "isoWeek",
            ComparisonUnit::Day => "day",
            ComparisonUnit::Hour => "hour",
            ComparisonUnit::Minute => "minute",
            ComparisonUnit::Second => "second",
        }
    }

    /// Truncate a wall-clock datetime to the start of the enclosing unit.
    ///
    /// Returns `None` only when the start of the unit falls outside the
    /// representable date range.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use date_comparison::{ComparisonUnit, WeekStartDay};
    ///
    /// let dt = NaiveDate::from_ymd_opt(2020, 6, 18)
    ///     .unwrap()
    ///     .and_hms_opt(14, 30, 15)
    ///     .unwrap();
    /// let start = ComparisonUnit::Month.truncate(dt, WeekStartDay::Sunday).unwrap();
    /// assert_eq!(start.to_string(), "2020-06-01 00:00:00");
    /// ```
    pub fn truncate(self, dt: NaiveDateTime, week_start: WeekStartDay) -> Option<NaiveDateTime> {
        let date = dt.date();
        match self {
            ComparisonUnit::Year => NaiveDate::from_ymd_opt(date.year(), 1, 1)?.and_hms_opt(0, 0, 0),
            ComparisonUnit::Month => {
                NaiveDate::from_ymd_opt(date.year(), date.month(), 1)?.and_hms_opt(0, 0, 0)
            }
            ComparisonUnit::Week => start_of_week(date, week_start)?.and_hms_opt(0, 0, 0),
            ComparisonUnit::IsoWeek => {
                start_of_week(date, WeekStartDay::Monday)?.and_hms_opt(0, 0, 0)
            }
            ComparisonUnit::Day => date.and_hms_opt(0, 0, 0),
            ComparisonUnit::Hour => date.and_hms_opt(dt.hour(), 0, 0),
            ComparisonUnit::Minute => date.and_hms_opt(dt.hour(), dt.minute(), 0),
            ComparisonUnit::Second => date.and_hms_opt(dt.hour(), dt.minute(), dt.second()),
        }
    }
}

impl fmt::Display for ComparisonUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComparisonUnit {
    type Err = ParseError;

    /// Parse a unit name. Short aliases are case-sensitive (`M` is month,
    /// `m` is minute); long names are not.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let unit = match trimmed {
            "y" => Some(ComparisonUnit::Year),
            "M" => Some(ComparisonUnit::Month),
            "w" => Some(ComparisonUnit::Week),
            "W" => Some(ComparisonUnit::IsoWeek),
            "d" | "D" => Some(ComparisonUnit::Day),
            "h" => Some(ComparisonUnit::Hour),
            "m" => Some(ComparisonUnit::Minute),
            "s" => Some(ComparisonUnit::Second),
            _ => match trimmed.to_lowercase().as_str() {
                "year" | "years" => Some(ComparisonUnit::Year),
                "month" | "months" => Some(ComparisonUnit::Month),
                "week" | "weeks" => Some(ComparisonUnit::Week),
                "isoweek" | "isoweeks" => Some(ComparisonUnit::IsoWeek),
                "day" | "days" | "date" => Some(ComparisonUnit::Day),
                "hour" | "hours" => Some(ComparisonUnit::Hour),
                "minute" | "minutes" => Some(ComparisonUnit::Minute),
                "second" | "seconds" => Some(ComparisonUnit::Second),
                _ => None,
            },
        };
        unit.ok_or_else(|| ParseError::UnknownUnit(s.to_string()))
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
