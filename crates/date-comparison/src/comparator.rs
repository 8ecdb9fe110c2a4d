//! Boundary predicates and the two-value comparator.
//!
//! [`DateComparator`] answers "is this date in the past / today / in the
//! future?" and "how do these two dates order at a given unit?". It holds a
//! [`Clock`] and [`CompareOptions`] but no other state: the current moment is
//! read fresh on every call.
//!
//! # Invalid input
//!
//! Every operation validates its inputs before normalizing them. An input that
//! fails validation never reaches comparison logic:
//!
//! - every boundary predicate returns `false`, whatever its polarity. Both
//!   [`DateComparator::is_in_future`] and [`DateComparator::is_not_in_future`]
//!   return `false` for `"notadate"`; the pairs are complements only for
//!   valid input.
//! - [`DateComparator::compare`] returns [`ComparisonError`].

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDateTime, Utc};
use tracing::{debug, trace};

use crate::clock::{Clock, SystemClock};
use crate::error::{ComparisonError, Result};
use crate::representation::DateRepresentation;
use crate::token::ComparisonTarget;
use crate::unit::{ComparisonUnit, WeekStartDay};
use crate::zone::EvaluationZone;

/// Options for [`DateComparator`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompareOptions {
    /// Where calendar days and unit boundaries are drawn.
    pub zone: EvaluationZone,
    /// Which day starts a [`ComparisonUnit::Week`].
    pub week_start: WeekStartDay,
}

// ── Boundary ────────────────────────────────────────────────────────────────

/// A yes/no question about one date relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boundary {
    InFuture,
    NotInFuture,
    TodayOrInFuture,
    NotTodayOrInFuture,
    InPast,
    NotInPast,
    TodayOrInPast,
    NotTodayOrInPast,
    Today,
    NotToday,
}

impl Boundary {
    pub const ALL: [Boundary; 10] = [
        Boundary::InFuture,
        Boundary::NotInFuture,
        Boundary::TodayOrInFuture,
        Boundary::NotTodayOrInFuture,
        Boundary::InPast,
        Boundary::NotInPast,
        Boundary::TodayOrInPast,
        Boundary::NotTodayOrInPast,
        Boundary::Today,
        Boundary::NotToday,
    ];

    /// Whether a date whose day orders as `day` against today satisfies this
    /// boundary.
    pub fn accepts(&self, day: Ordering) -> bool {
        match self {
            Boundary::InFuture | Boundary::NotTodayOrInPast => day == Ordering::Greater,
            Boundary::NotInFuture | Boundary::TodayOrInPast => day != Ordering::Greater,
            Boundary::TodayOrInFuture | Boundary::NotInPast => day != Ordering::Less,
            Boundary::NotTodayOrInFuture | Boundary::InPast => day == Ordering::Less,
            Boundary::Today => day == Ordering::Equal,
            Boundary::NotToday => day != Ordering::Equal,
        }
    }
}

// ── DateComparator ──────────────────────────────────────────────────────────

/// Evaluates dates against the current moment of a [`Clock`].
#[derive(Debug, Clone, Default)]
pub struct DateComparator<C = SystemClock> {
    clock: C,
    options: CompareOptions,
}

impl DateComparator<SystemClock> {
    /// The system clock in the local timezone with Sunday-start weeks.
    pub fn system() -> Self {
        DateComparator::new(SystemClock)
    }
}

impl<C: Clock> DateComparator<C> {
    pub fn new(clock: C) -> Self {
        DateComparator {
            clock,
            options: CompareOptions::default(),
        }
    }

    pub fn with_options(mut self, options: CompareOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &CompareOptions {
        &self.options
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Whether `input` is a date this comparator can work with.
    ///
    /// Stricter than [`DateRepresentation::is_valid`]: the input must also
    /// have a calendar day in the evaluation zone, so every value accepted
    /// here gets a real answer from the predicates.
    pub fn is_valid_date_representation(&self, input: &DateRepresentation) -> bool {
        self.day_relative_to_today(input).is_some()
    }

    /// Evaluate a [`Boundary`] at day granularity. `false` for invalid input.
    pub fn check(&self, boundary: Boundary, input: &DateRepresentation) -> bool {
        self.day_relative_to_today(input)
            .is_some_and(|day| boundary.accepts(day))
    }

    /// The input's day is strictly after today.
    pub fn is_in_future(&self, input: &DateRepresentation) -> bool {
        self.check(Boundary::InFuture, input)
    }

    /// The input's day is today or earlier.
    pub fn is_not_in_future(&self, input: &DateRepresentation) -> bool {
        self.check(Boundary::NotInFuture, input)
    }

    /// The input's day is today or later.
    pub fn is_today_or_in_future(&self, input: &DateRepresentation) -> bool {
        self.check(Boundary::TodayOrInFuture, input)
    }

    /// The input's day is strictly before today.
    pub fn is_not_today_or_in_future(&self, input: &DateRepresentation) -> bool {
        self.check(Boundary::NotTodayOrInFuture, input)
    }

    /// The input's day is strictly before today.
    pub fn is_in_past(&self, input: &DateRepresentation) -> bool {
        self.check(Boundary::InPast, input)
    }

    /// The input's day is today or later.
    pub fn is_not_in_past(&self, input: &DateRepresentation) -> bool {
        self.check(Boundary::NotInPast, input)
    }

    /// The input's day is today or earlier.
    pub fn is_today_or_in_past(&self, input: &DateRepresentation) -> bool {
        self.check(Boundary::TodayOrInPast, input)
    }

    /// The input's day is strictly after today.
    pub fn is_not_today_or_in_past(&self, input: &DateRepresentation) -> bool {
        self.check(Boundary::NotTodayOrInPast, input)
    }

    /// The input's day is today, whatever the time of day.
    pub fn is_today(&self, input: &DateRepresentation) -> bool {
        self.check(Boundary::Today, input)
    }

    /// The input's day is not today.
    pub fn is_not_today(&self, input: &DateRepresentation) -> bool {
        self.check(Boundary::NotToday, input)
    }

    /// Compare two dates at day granularity.
    ///
    /// See [`compare_with_unit`](Self::compare_with_unit).
    pub fn compare(&self, a: &DateRepresentation, b: &ComparisonTarget) -> Result<Ordering> {
        self.compare_with_unit(a, b, ComparisonUnit::Day)
    }

    /// Compare two dates after truncating both to the start of `unit`.
    ///
    /// `b` may be a relative token, resolved against the current moment.
    /// The result is `Greater` when `a` falls in a later unit than `b`,
    /// `Less` when earlier, and `Equal` when both fall in the same unit.
    /// `ordering as i8` yields the conventional `1` / `-1` / `0`.
    ///
    /// # Errors
    ///
    /// Returns [`ComparisonError::InvalidDate`] if `a` is not a valid date
    /// (tokens are not accepted as `a`), or [`ComparisonError::InvalidTarget`]
    /// if `b` is neither a valid date nor a known token.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cmp::Ordering;
    /// use chrono::{TimeZone, Utc};
    /// use date_comparison::{
    ///     CompareOptions, ComparisonUnit, DateComparator, DateRepresentation, FixedClock,
    /// };
    ///
    /// let now = Utc.with_ymd_and_hms(2020, 6, 18, 12, 0, 0).unwrap();
    /// let comparator = DateComparator::new(FixedClock::new(now)).with_options(CompareOptions {
    ///     zone: "UTC".parse().unwrap(),
    ///     ..CompareOptions::default()
    /// });
    ///
    /// let a: DateRepresentation = "2020-06-18T10:30:15".into();
    /// assert_eq!(comparator.compare(&a, &"__YESTERDAY__".into()), Ok(Ordering::Greater));
    /// assert_eq!(
    ///     comparator.compare_with_unit(&a, &"2020-01-01".into(), ComparisonUnit::Year),
    ///     Ok(Ordering::Equal)
    /// );
    /// ```
    pub fn compare_with_unit(
        &self,
        a: &DateRepresentation,
        b: &ComparisonTarget,
        unit: ComparisonUnit,
    ) -> Result<Ordering> {
        if !a.is_valid() {
            debug!(input = %a, "rejecting invalid date");
            return Err(ComparisonError::InvalidDate(a.to_string()));
        }
        if !b.is_valid() {
            debug!(target = %b, "rejecting invalid comparison target");
            return Err(ComparisonError::InvalidTarget(b.to_string()));
        }

        let now = self.clock.now();
        let zone = self.options.zone;
        let left = a
            .normalize(zone, now)
            .and_then(|instant| self.truncate(instant, unit))
            .ok_or_else(|| ComparisonError::InvalidDate(a.to_string()))?;
        let right = b
            .normalize(zone, now)
            .and_then(|instant| self.truncate(instant, unit))
            .ok_or_else(|| ComparisonError::InvalidTarget(b.to_string()))?;

        trace!(%unit, %left, %right, "comparing truncated datetimes");
        Ok(left.cmp(&right))
    }

    /// How the input's day orders against today, or `None` if invalid.
    fn day_relative_to_today(&self, input: &DateRepresentation) -> Option<Ordering> {
        if !input.is_valid() {
            debug!(input = %input, "rejecting invalid date");
            return None;
        }
        let now = self.clock.now();
        let day = self.truncate(input.normalize(self.options.zone, now)?, ComparisonUnit::Day)?;
        let today = self.truncate(now, ComparisonUnit::Day)?;
        trace!(%day, %today, "comparing calendar days");
        Some(day.cmp(&today))
    }

    /// Wall-clock start of the `unit` containing `instant`, or `None` when it
    /// falls outside the representable range.
    fn truncate(&self, instant: DateTime<Utc>, unit: ComparisonUnit) -> Option<NaiveDateTime> {
        let CompareOptions { zone, week_start } = self.options;
        unit.truncate(zone.wall_clock(instant)?, week_start)
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
