//! The timezone in which calendar days, weeks, and months are drawn.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Local, NaiveDateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::ParseError;

/// Where wall-clock time is evaluated.
///
/// "Today" and every unit boundary depend on the zone: 23:30 UTC on June 18
/// is already June 19 in Tokyo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvaluationZone {
    /// The host system's local timezone.
    #[default]
    Local,
    /// An IANA timezone.
    Named(Tz),
}

impl EvaluationZone {
    /// Express an instant as wall-clock time in this zone.
    ///
    /// `None` when the offset pushes the wall-clock time outside chrono's
    /// range, as it does for `DateTime::<Utc>::MAX_UTC` east of Greenwich.
    pub fn wall_clock(&self, instant: DateTime<Utc>) -> Option<NaiveDateTime> {
        let naive = instant.naive_utc();
        let offset = match self {
            EvaluationZone::Local => Local.offset_from_utc_datetime(&naive).fix(),
            EvaluationZone::Named(tz) => tz.offset_from_utc_datetime(&naive).fix(),
        };
        naive.checked_add_signed(Duration::seconds(offset.local_minus_utc().into()))
    }

    /// Interpret a wall-clock time in this zone as an absolute instant.
    ///
    /// Ambiguous times (DST fall-back) resolve to the earlier instant. Times
    /// skipped by a forward transition are read with the offset in force
    /// before it, which moves them forward by the length of the gap.
    pub fn resolve(&self, naive: NaiveDateTime) -> Option<DateTime<Utc>> {
        match self {
            EvaluationZone::Local => resolve_in(&Local, naive),
            EvaluationZone::Named(tz) => resolve_in(tz, naive),
        }
    }
}

fn resolve_in<T: TimeZone>(tz: &T, naive: NaiveDateTime) -> Option<DateTime<Utc>> {
    if let Some(dt) = tz.from_local_datetime(&naive).earliest() {
        return Some(dt.with_timezone(&Utc));
    }
    let before = naive.checked_sub_signed(Duration::days(1))?;
    let offset = tz.from_local_datetime(&before).earliest()?.offset().fix();
    let utc = naive.checked_sub_signed(Duration::seconds(offset.local_minus_utc().into()))?;
    Some(Utc.from_utc_datetime(&utc))
}

impl fmt::Display for EvaluationZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvaluationZone::Local => f.write_str("local"),
            EvaluationZone::Named(tz) => f.write_str(tz.name()),
        }
    }
}

impl FromStr for EvaluationZone {
    type Err = ParseError;

    /// `"local"` (any case) or an IANA timezone name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("local") {
            return Ok(EvaluationZone::Local);
        }
        s.parse::<Tz>()
            .map(EvaluationZone::Named)
            .map_err(|_| ParseError::InvalidTimezone(s.to_string()))
    }
}
