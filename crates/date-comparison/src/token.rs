//! Relative-date tokens and the comparator's second operand.
//!
//! The second operand of a comparison may name a day relative to the current
//! moment instead of a fixed date. Tokens are the sentinel strings
//! `__TODAY__`, `__YESTERDAY__` and `__TOMORROW__`, matched exactly.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Days, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ParseError;
use crate::representation::DateRepresentation;
use crate::zone::EvaluationZone;

/// A day relative to the current moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelativeToken {
    #[serde(rename = "__TODAY__")]
    Today,
    #[serde(rename = "__YESTERDAY__")]
    Yesterday,
    #[serde(rename = "__TOMORROW__")]
    Tomorrow,
}

impl RelativeToken {
    pub const ALL: [RelativeToken; 3] = [
        RelativeToken::Today,
        RelativeToken::Yesterday,
        RelativeToken::Tomorrow,
    ];

    /// The sentinel string for this token.
    pub fn as_str(&self) -> &'static str {
        match self {
            RelativeToken::Today => "__TODAY__",
            RelativeToken::Yesterday => "__YESTERDAY__",
            RelativeToken::Tomorrow => "__TOMORROW__",
        }
    }

    /// Resolve to an instant: `now`, shifted by one calendar day in `zone` for
    /// yesterday and tomorrow. The wall-clock time of day is kept.
    pub fn resolve(&self, now: DateTime<Utc>, zone: EvaluationZone) -> Option<DateTime<Utc>> {
        let shifted = match self {
            RelativeToken::Today => return Some(now),
            RelativeToken::Yesterday => zone.wall_clock(now)?.checked_sub_days(Days::new(1))?,
            RelativeToken::Tomorrow => zone.wall_clock(now)?.checked_add_days(Days::new(1))?,
        };
        zone.resolve(shifted)
    }
}

impl fmt::Display for RelativeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RelativeToken {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RelativeToken::ALL
            .into_iter()
            .find(|token| token.as_str() == s)
            .ok_or_else(|| ParseError::UnknownToken(s.to_string()))
    }
}

// ── ComparisonTarget ────────────────────────────────────────────────────────

/// The second operand of a comparison: a date, or a relative token.
#[derive(Debug, Clone, PartialEq)]
pub enum ComparisonTarget {
    Date(DateRepresentation),
    Token(RelativeToken),
}

impl ComparisonTarget {
    /// Classify a dynamic JSON value. Strings equal to a token sentinel become
    /// [`Token`](Self::Token); everything else goes through
    /// [`DateRepresentation::from_json`].
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::String(s) => ComparisonTarget::from(s.as_str()),
            other => ComparisonTarget::Date(DateRepresentation::from_json(other)),
        }
    }

    /// Tokens are always valid; dates follow [`DateRepresentation::is_valid`].
    pub fn is_valid(&self) -> bool {
        match self {
            ComparisonTarget::Date(date) => date.is_valid(),
            ComparisonTarget::Token(_) => true,
        }
    }

    /// Resolve to an instant against the current moment `now`.
    pub fn normalize(&self, zone: EvaluationZone, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            ComparisonTarget::Date(date) => date.normalize(zone, now),
            ComparisonTarget::Token(token) => token.resolve(now, zone),
        }
    }
}

impl fmt::Display for ComparisonTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComparisonTarget::Date(date) => fmt::Display::fmt(date, f),
            ComparisonTarget::Token(token) => fmt::Display::fmt(token, f),
        }
    }
}

impl From<RelativeToken> for ComparisonTarget {
    fn from(token: RelativeToken) -> Self {
        ComparisonTarget::Token(token)
    }
}

impl From<DateRepresentation> for ComparisonTarget {
    fn from(date: DateRepresentation) -> Self {
        ComparisonTarget::Date(date)
    }
}

impl From<&str> for ComparisonTarget {
    fn from(s: &str) -> Self {
        match s.parse::<RelativeToken>() {
            Ok(token) => ComparisonTarget::Token(token),
            Err(_) => ComparisonTarget::Date(DateRepresentation::from(s)),
        }
    }
}

impl From<String> for ComparisonTarget {
    fn from(s: String) -> Self {
        match s.parse::<RelativeToken>() {
            Ok(token) => ComparisonTarget::Token(token),
            Err(_) => ComparisonTarget::Date(DateRepresentation::Text(s)),
        }
    }
}

impl From<DateTime<Utc>> for ComparisonTarget {
    fn from(dt: DateTime<Utc>) -> Self {
        ComparisonTarget::Date(dt.into())
    }
}

impl From<DateTime<Tz>> for ComparisonTarget {
    fn from(dt: DateTime<Tz>) -> Self {
        ComparisonTarget::Date(dt.into())
    }
}

impl From<Vec<i64>> for ComparisonTarget {
    fn from(parts: Vec<i64>) -> Self {
        ComparisonTarget::Date(DateRepresentation::Parts(parts))
    }
}

impl From<&Value> for ComparisonTarget {
    fn from(value: &Value) -> Self {
        ComparisonTarget::from_json(value)
    }
}

impl From<Value> for ComparisonTarget {
    fn from(value: Value) -> Self {
        ComparisonTarget::from_json(&value)
    }
}
