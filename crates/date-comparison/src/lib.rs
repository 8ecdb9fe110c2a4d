//! # date-comparison
//!
//! Date boundary predicates and unit-truncated date comparison, for use as
//! custom format keywords in schema-validation pipelines.
//!
//! Inputs may be an absolute instant, a zoned datetime, a `[year, month0, day]`
//! sequence, or a date string. Each is validated, normalized to an instant,
//! and compared against "now" (or a second date) at a calendar granularity.
//! Invalid inputs never panic: predicates answer `false` and the comparator
//! returns an error.
//!
//! The free functions below read the system clock and evaluate in the local
//! timezone. For a fixed clock, another timezone, or Monday-start weeks, build
//! a [`DateComparator`].
//!
//! ## Modules
//!
//! - [`representation`] — Accepted date shapes, validation, and normalization
//! - [`unit`] — Comparison granularity and calendar truncation
//! - [`token`] — `__TODAY__` / `__YESTERDAY__` / `__TOMORROW__` and the comparator's second operand
//! - [`comparator`] — Boundary predicates and the two-value comparator
//! - [`format`] — Named formats over JSON values for schema validators
//! - [`clock`] — The source of "now"
//! - [`zone`] — The timezone in which calendar days are drawn
//! - [`error`] — Error types
//!
//! ## Example
//!
//! ```
//! use std::cmp::Ordering;
//! use date_comparison::{compare, is_in_past, DateRepresentation};
//!
//! let launch = DateRepresentation::from("2020-06-18");
//! assert!(is_in_past(&launch));
//! assert_eq!(compare(&launch, &"__TODAY__".into()), Ok(Ordering::Less));
//! assert!(compare(&"notadate".into(), &"__TODAY__".into()).is_err());
//! ```

use std::cmp::Ordering;

pub mod clock;
pub mod comparator;
pub mod error;
pub mod format;
pub mod representation;
pub mod token;
pub mod unit;
pub mod zone;

pub use clock::{Clock, FixedClock, SystemClock};
pub use comparator::{Boundary, CompareOptions, DateComparator};
pub use error::{ComparisonError, ParseError, Result};
pub use format::{DateFormat, DateFormats, COMPARE_DATES};
pub use representation::DateRepresentation;
pub use token::{ComparisonTarget, RelativeToken};
pub use unit::{ComparisonUnit, WeekStartDay};
pub use zone::EvaluationZone;

/// Whether `input` can be interpreted as a date in the local timezone.
pub fn is_valid_date_representation(input: &DateRepresentation) -> bool {
    DateComparator::system().is_valid_date_representation(input)
}

/// The input's day is strictly after today.
pub fn is_in_future(input: &DateRepresentation) -> bool {
    DateComparator::system().is_in_future(input)
}

/// The input's day is today or earlier. `false` for invalid input.
pub fn is_not_in_future(input: &DateRepresentation) -> bool {
    DateComparator::system().is_not_in_future(input)
}

/// The input's day is today or later.
pub fn is_today_or_in_future(input: &DateRepresentation) -> bool {
    DateComparator::system().is_today_or_in_future(input)
}

/// The input's day is strictly before today. `false` for invalid input.
pub fn is_not_today_or_in_future(input: &DateRepresentation) -> bool {
    DateComparator::system().is_not_today_or_in_future(input)
}

/// The input's day is strictly before today.
pub fn is_in_past(input: &DateRepresentation) -> bool {
    DateComparator::system().is_in_past(input)
}

/// The input's day is today or later. `false` for invalid input.
pub fn is_not_in_past(input: &DateRepresentation) -> bool {
    DateComparator::system().is_not_in_past(input)
}

/// The input's day is today or earlier.
pub fn is_today_or_in_past(input: &DateRepresentation) -> bool {
    DateComparator::system().is_today_or_in_past(input)
}

/// The input's day is strictly after today. `false` for invalid input.
pub fn is_not_today_or_in_past(input: &DateRepresentation) -> bool {
    DateComparator::system().is_not_today_or_in_past(input)
}

/// The input's day is today, whatever the time of day.
pub fn is_today(input: &DateRepresentation) -> bool {
    DateComparator::system().is_today(input)
}

/// The input's day is not today. `false` for invalid input.
pub fn is_not_today(input: &DateRepresentation) -> bool {
    DateComparator::system().is_not_today(input)
}

/// Compare two dates at day granularity. See [`DateComparator::compare_with_unit`].
pub fn compare(a: &DateRepresentation, b: &ComparisonTarget) -> Result<Ordering> {
    DateComparator::system().compare(a, b)
}

/// Compare two dates at `unit` granularity. See [`DateComparator::compare_with_unit`].
pub fn compare_with_unit(
    a: &DateRepresentation,
    b: &ComparisonTarget,
    unit: ComparisonUnit,
) -> Result<Ordering> {
    DateComparator::system().compare_with_unit(a, b, unit)
}
