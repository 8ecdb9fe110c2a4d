//! Date formats for JSON-schema validators.
//!
//! Schema validators typically let callers register custom `format` keywords
//! as a name plus a validation function over a JSON value, and optionally a
//! comparison function for range keywords such as `formatMinimum`. This
//! module exposes the boundary predicates under their camelCase names
//! (`isInFuture`, `isNotToday`, ...) and a `compareDates` format whose
//! comparison accepts relative tokens as the bound.

use std::cmp::Ordering;
use std::fmt;

use serde_json::Value;

use crate::clock::{Clock, SystemClock};
use crate::comparator::{Boundary, DateComparator};
use crate::representation::DateRepresentation;
use crate::token::ComparisonTarget;
use crate::unit::ComparisonUnit;

/// Name of the format that validates any date and compares two dates.
pub const COMPARE_DATES: &str = "compareDates";

/// A registrable format keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateFormat {
    /// Valid when the value satisfies the boundary.
    Boundary(Boundary),
    /// Valid for any date; also compares two dates.
    CompareDates,
}

impl DateFormat {
    /// Every format, boundaries first.
    pub fn all() -> impl Iterator<Item = DateFormat> {
        Boundary::ALL
            .into_iter()
            .map(DateFormat::Boundary)
            .chain(std::iter::once(DateFormat::CompareDates))
    }

    /// The keyword name this format is registered under.
    pub fn name(&self) -> &'static str {
        match self {
            DateFormat::Boundary(boundary) => match boundary {
                Boundary::InFuture => "isInFuture",
                Boundary::NotInFuture => "isNotInFuture",
                Boundary::TodayOrInFuture => "isTodayOrInFuture",
                Boundary::NotTodayOrInFuture => "isNotTodayOrInFuture",
                Boundary::InPast => "isInPast",
                Boundary::NotInPast => "isNotInPast",
                Boundary::TodayOrInPast => "isTodayOrInPast",
                Boundary::NotTodayOrInPast => "isNotTodayOrInPast",
                Boundary::Today => "isToday",
                Boundary::NotToday => "isNotToday",
            },
            DateFormat::CompareDates => COMPARE_DATES,
        }
    }

    pub fn from_name(name: &str) -> Option<DateFormat> {
        DateFormat::all().find(|format| format.name() == name)
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Validates and compares JSON values against the date formats.
#[derive(Debug, Clone, Default)]
pub struct DateFormats<C = SystemClock> {
    comparator: DateComparator<C>,
}

impl DateFormats<SystemClock> {
    pub fn system() -> Self {
        DateFormats::new(DateComparator::system())
    }
}

impl<C: Clock> DateFormats<C> {
    pub fn new(comparator: DateComparator<C>) -> Self {
        DateFormats { comparator }
    }

    pub fn comparator(&self) -> &DateComparator<C> {
        &self.comparator
    }

    /// Whether `value` satisfies `format`.
    pub fn validate(&self, format: DateFormat, value: &Value) -> bool {
        let input = DateRepresentation::from_json(value);
        match format {
            DateFormat::Boundary(boundary) => self.comparator.check(boundary, &input),
            DateFormat::CompareDates => self.comparator.is_valid_date_representation(&input),
        }
    }

    /// Validate by keyword name. `None` if no format has that name.
    pub fn validate_named(&self, name: &str, value: &Value) -> Option<bool> {
        DateFormat::from_name(name).map(|format| self.validate(format, value))
    }

    /// The `compareDates` comparison at day granularity. `b` may be a token.
    /// `None` when either side is invalid.
    pub fn compare(&self, a: &Value, b: &Value) -> Option<Ordering> {
        self.compare_with_unit(a, b, ComparisonUnit::Day)
    }

    pub fn compare_with_unit(
        &self,
        a: &Value,
        b: &Value,
        unit: ComparisonUnit,
    ) -> Option<Ordering> {
        let a = DateRepresentation::from_json(a);
        let b = ComparisonTarget::from_json(b);
        self.comparator.compare_with_unit(&a, &b, unit).ok()
    }
}
