//! Accepted date representations and their normalization to an instant.
//!
//! A date may arrive in one of four shapes:
//!
//! - an absolute instant ([`DateRepresentation::Instant`])
//! - a datetime carrying its own timezone ([`DateRepresentation::Zoned`])
//! - a short integer sequence `[year, month0, day]` ([`DateRepresentation::Parts`])
//! - a date string ([`DateRepresentation::Text`])
//!
//! Anything else (numbers, booleans, objects, mixed arrays) is carried as
//! [`DateRepresentation::Unrecognized`] so that callers holding dynamic values
//! can hand them over unchanged and receive the uniform "invalid" answer.
//!
//! # Date strings
//!
//! The parser accepts ISO 8601 / RFC 3339 (`2020-06-18`, `2020-06`, `2020`,
//! `2020-06-18T10:30:15.250Z`, `2020-06-18 10:30+02:00`), RFC 2822, slash
//! dates (`2020/06/18`, `06/18/2020`), month-name dates (`June 18, 2020`,
//! `18 Jun 2020`) and browser date strings
//! (`Thu Jun 18 2020 10:30:15 GMT+0100`). Strings with an offset denote an
//! absolute instant; strings without one are wall-clock time in the
//! evaluation zone.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;
use serde_json::Value;

use crate::zone::EvaluationZone;

/// Sequences with this many elements or more are not dates.
const MAX_PARTS: usize = 4;

/// A date-like input value. Never mutated by this crate.
#[derive(Debug, Clone, PartialEq)]
pub enum DateRepresentation {
    /// An absolute point in time.
    Instant(DateTime<Utc>),
    /// A datetime bound to an IANA timezone.
    Zoned(DateTime<Tz>),
    /// `[year, month, day]` with a zero-based month. Missing trailing fields
    /// default to January and the 1st; an empty sequence means today.
    Parts(Vec<i64>),
    /// A string to be parsed as a date.
    Text(String),
    /// A value of no accepted shape. Always invalid.
    Unrecognized(Value),
}

impl DateRepresentation {
    /// Classify a dynamic JSON value.
    ///
    /// Strings become [`Text`](Self::Text) and arrays made only of integers
    /// become [`Parts`](Self::Parts). Everything else is unrecognized.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::String(s) => DateRepresentation::Text(s.clone()),
            Value::Array(items) => items
                .iter()
                .map(json_integer)
                .collect::<Option<Vec<i64>>>()
                .map(DateRepresentation::Parts)
                .unwrap_or_else(|| DateRepresentation::Unrecognized(value.clone())),
            other => DateRepresentation::Unrecognized(other.clone()),
        }
    }

    /// Whether this value can be interpreted as a date.
    ///
    /// A sequence must have fewer than four elements that form a real calendar
    /// date, and a string must parse. Instants are always valid, including the
    /// Unix epoch itself.
    pub fn is_valid(&self) -> bool {
        match self {
            DateRepresentation::Instant(_) | DateRepresentation::Zoned(_) => true,
            DateRepresentation::Parts(parts) => {
                parts.len() < MAX_PARTS
                    && (parts.is_empty() || date_from_parts(parts, NaiveDate::MIN).is_some())
            }
            DateRepresentation::Text(s) => parse_date_string(s).is_some(),
            DateRepresentation::Unrecognized(_) => false,
        }
    }

    /// Resolve to an absolute instant.
    ///
    /// `zone` interprets wall-clock inputs and `now` supplies today's date for
    /// an empty sequence. Returns `None` for invalid values.
    pub fn normalize(&self, zone: EvaluationZone, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            DateRepresentation::Instant(dt) => Some(*dt),
            DateRepresentation::Zoned(dt) => Some(dt.with_timezone(&Utc)),
            DateRepresentation::Parts(parts) => {
                let today = zone.wall_clock(now)?.date();
                let date = date_from_parts(parts, today)?;
                zone.resolve(date.and_hms_opt(0, 0, 0)?)
            }
            DateRepresentation::Text(s) => match parse_date_string(s)? {
                ParsedText::Absolute(dt) => Some(dt),
                ParsedText::WallClock(naive) => zone.resolve(naive),
            },
            DateRepresentation::Unrecognized(_) => None,
        }
    }
}

impl fmt::Display for DateRepresentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateRepresentation::Instant(dt) => write!(f, "{}", dt.to_rfc3339()),
            DateRepresentation::Zoned(dt) => {
                write!(f, "{} [{}]", dt.to_rfc3339(), dt.timezone().name())
            }
            DateRepresentation::Parts(parts) => write!(f, "{parts:?}"),
            DateRepresentation::Text(s) => write!(f, "'{s}'"),
            DateRepresentation::Unrecognized(value) => write!(f, "{value}"),
        }
    }
}

impl From<DateTime<Utc>> for DateRepresentation {
    fn from(dt: DateTime<Utc>) -> Self {
        DateRepresentation::Instant(dt)
    }
}

impl From<DateTime<chrono::Local>> for DateRepresentation {
    fn from(dt: DateTime<chrono::Local>) -> Self {
        DateRepresentation::Instant(dt.with_timezone(&Utc))
    }
}

impl From<DateTime<chrono::FixedOffset>> for DateRepresentation {
    fn from(dt: DateTime<chrono::FixedOffset>) -> Self {
        DateRepresentation::Instant(dt.with_timezone(&Utc))
    }
}

impl From<DateTime<Tz>> for DateRepresentation {
    fn from(dt: DateTime<Tz>) -> Self {
        DateRepresentation::Zoned(dt)
    }
}

impl From<Vec<i64>> for DateRepresentation {
    fn from(parts: Vec<i64>) -> Self {
        DateRepresentation::Parts(parts)
    }
}

impl From<&[i64]> for DateRepresentation {
    fn from(parts: &[i64]) -> Self {
        DateRepresentation::Parts(parts.to_vec())
    }
}

impl From<&str> for DateRepresentation {
    fn from(s: &str) -> Self {
        DateRepresentation::Text(s.to_string())
    }
}

impl From<String> for DateRepresentation {
    fn from(s: String) -> Self {
        DateRepresentation::Text(s)
    }
}

impl From<&Value> for DateRepresentation {
    fn from(value: &Value) -> Self {
        DateRepresentation::from_json(value)
    }
}

impl From<Value> for DateRepresentation {
    fn from(value: Value) -> Self {
        DateRepresentation::from_json(&value)
    }
}

/// An integral JSON number, including floats with no fractional part.
fn json_integer(value: &Value) -> Option<i64> {
    let Value::Number(n) = value else {
        return None;
    };
    n.as_i64().or_else(|| {
        let f = n.as_f64()?;
        (f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64).then_some(f as i64)
    })
}

/// Build a calendar date from `[year, month0, day]`.
fn date_from_parts(parts: &[i64], today: NaiveDate) -> Option<NaiveDate> {
    if parts.len() >= MAX_PARTS {
        return None;
    }
    let Some(&year) = parts.first() else {
        return Some(today);
    };
    let year = i32::try_from(year).ok()?;
    let month0 = parts.get(1).copied().unwrap_or(0);
    let day = parts.get(2).copied().unwrap_or(1);
    let month = u32::try_from(month0.checked_add(1)?).ok()?;
    let day = u32::try_from(day).ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

// ── Date-string parsing ─────────────────────────────────────────────────────

/// Outcome of parsing a date string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParsedText {
    /// The string carried an offset.
    Absolute(DateTime<Utc>),
    /// The string had no offset; its meaning depends on the evaluation zone.
    WallClock(NaiveDateTime),
}

const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%dT%H:%M%z",
];

const WALL_CLOCK_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%b %d, %Y",
    "%b %d %Y",
    "%d %B %Y",
    "%d %b %Y",
    "%a, %d %b %Y",
    "%a %b %d %Y",
];

const GMT_OFFSET_FORMAT: &str = "%a %b %d %Y %H:%M:%S GMT%z";

/// Parse a date string, trying the most specific shapes first.
fn parse_date_string(input: &str) -> Option<ParsedText> {
    let s = input.trim();
    if s.is_empty() {
        return None;
    }

    try_rfc3339(s)
        .or_else(|| try_iso_with_offset(s))
        .or_else(|| try_rfc2822(s))
        .or_else(|| try_gmt_offset(s))
        .map(ParsedText::Absolute)
        .or_else(|| {
            try_wall_clock(s)
                .or_else(|| try_date_only(s))
                .or_else(|| try_year_month(s))
                .or_else(|| try_year(s))
                .map(ParsedText::WallClock)
        })
}

/// Canonical ISO spelling: `T` between date and time, `Z` as `+00:00`.
fn canonical_iso(s: &str) -> String {
    let mut out = s.to_string();
    let bytes = s.as_bytes();
    if bytes.len() > 10
        && bytes[10] == b' '
        && bytes[..10].iter().filter(|b| **b == b'-').count() == 2
    {
        out.replace_range(10..11, "T");
    }
    match out.strip_suffix(['Z', 'z']) {
        Some(stripped) => format!("{stripped}+00:00"),
        None => out,
    }
}

fn try_rfc3339(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
}

fn try_iso_with_offset(s: &str) -> Option<DateTime<Utc>> {
    let canonical = canonical_iso(s);
    OFFSET_FORMATS.iter().find_map(|fmt| {
        DateTime::parse_from_str(&canonical, fmt)
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
    })
}

fn try_rfc2822(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc2822(s)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
}

/// `Thu Jun 18 2020 10:30:15 GMT+0100 (British Summer Time)`. The zone name
/// in parentheses is optional and ignored.
fn try_gmt_offset(s: &str) -> Option<DateTime<Utc>> {
    let s = match s.split_once(" (") {
        Some((head, tail)) if tail.ends_with(')') => head,
        _ => s,
    };
    DateTime::parse_from_str(s, GMT_OFFSET_FORMAT)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
}

fn try_wall_clock(s: &str) -> Option<NaiveDateTime> {
    let canonical = canonical_iso(s);
    WALL_CLOCK_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(&canonical, fmt).ok())
}

fn try_date_only(s: &str) -> Option<NaiveDateTime> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// `YYYY-MM` → first of the month.
fn try_year_month(s: &str) -> Option<NaiveDateTime> {
    let (year, month) = s.split_once('-')?;
    if year.len() != 4 || month.len() != 2 {
        return None;
    }
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, 1)?.and_hms_opt(0, 0, 0)
}

/// `YYYY` → January 1st.
fn try_year(s: &str) -> Option<NaiveDateTime> {
    if s.len() != 4 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year: i32 = s.parse().ok()?;
    NaiveDate::from_ymd_opt(year, 1, 1)?.and_hms_opt(0, 0, 0)
}

// ── Tests ───────────────────────────────────────────────────────────────────
