use std::cmp::Ordering;

use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};
use chrono_tz::Tz;
use date_comparison::{
    Boundary, CompareOptions, ComparisonTarget, ComparisonUnit, DateComparator,
    DateRepresentation, EvaluationZone, FixedClock, WeekStartDay,
};
use proptest::prelude::*;

const ZONES: [Tz; 4] = [
    chrono_tz::UTC,
    chrono_tz::America::New_York,
    chrono_tz::Asia::Tokyo,
    chrono_tz::Pacific::Kiritimati,
];

fn instant_strategy() -> impl Strategy<Value = DateTime<Utc>> {
    // 1970-01-01 .. 2100-01-01
    (0i64..4_102_444_800).prop_map(|secs| Utc.timestamp_opt(secs, 0).unwrap())
}

/// Every instant chrono can represent.
fn full_range_strategy() -> impl Strategy<Value = DateTime<Utc>> {
    (DateTime::<Utc>::MIN_UTC.timestamp()..=DateTime::<Utc>::MAX_UTC.timestamp())
        .prop_map(|secs| Utc.timestamp_opt(secs, 0).unwrap())
}

fn unit_strategy() -> impl Strategy<Value = ComparisonUnit> {
    prop::sample::select(ComparisonUnit::ALL.to_vec())
}

fn zone_strategy() -> impl Strategy<Value = Tz> {
    prop::sample::select(ZONES.to_vec())
}

fn week_start_strategy() -> impl Strategy<Value = WeekStartDay> {
    prop::sample::select(vec![WeekStartDay::Sunday, WeekStartDay::Monday])
}

fn comparator(
    now: DateTime<Utc>,
    tz: Tz,
    week_start: WeekStartDay,
) -> DateComparator<FixedClock> {
    DateComparator::new(FixedClock::new(now)).with_options(CompareOptions {
        zone: EvaluationZone::Named(tz),
        week_start,
    })
}

/// The same instant in every accepted shape. The sequence form carries only
/// the calendar day in `tz`.
fn shapes(instant: DateTime<Utc>, tz: Tz) -> Vec<DateRepresentation> {
    let date = instant.with_timezone(&tz).date_naive();
    vec![
        DateRepresentation::Instant(instant),
        DateRepresentation::Zoned(instant.with_timezone(&tz)),
        DateRepresentation::Text(instant.to_rfc3339()),
        DateRepresentation::Parts(vec![
            date.year() as i64,
            date.month0() as i64,
            date.day() as i64,
        ]),
    ]
}

proptest! {
    #[test]
    fn compare_is_reflexive(
        instant in instant_strategy(),
        now in instant_strategy(),
        unit in unit_strategy(),
        tz in zone_strategy(),
        week_start in week_start_strategy(),
    ) {
        let c = comparator(now, tz, week_start);
        for a in shapes(instant, tz) {
            let b = ComparisonTarget::Date(a.clone());
            prop_assert_eq!(c.compare_with_unit(&a, &b, unit), Ok(Ordering::Equal));
        }
    }

    #[test]
    fn compare_is_antisymmetric(
        a in instant_strategy(),
        b in instant_strategy(),
        unit in unit_strategy(),
        tz in zone_strategy(),
        week_start in week_start_strategy(),
    ) {
        let c = comparator(a, tz, week_start);
        let forward = c.compare_with_unit(&a.into(), &b.into(), unit);
        let backward = c.compare_with_unit(&b.into(), &a.into(), unit);
        prop_assert_eq!(forward.map(Ordering::reverse), backward);
    }

    #[test]
    fn coarser_units_never_reorder(
        a in instant_strategy(),
        b in instant_strategy(),
        tz in zone_strategy(),
    ) {
        // Equal at a fine unit implies equal at every coarser unit
        let c = comparator(a, tz, WeekStartDay::Sunday);
        let at = |unit| c.compare_with_unit(&a.into(), &b.into(), unit);
        if at(ComparisonUnit::Second) == Ok(Ordering::Equal) {
            prop_assert_eq!(at(ComparisonUnit::Minute), Ok(Ordering::Equal));
        }
        if at(ComparisonUnit::Day) == Ok(Ordering::Equal) {
            prop_assert_eq!(at(ComparisonUnit::Month), Ok(Ordering::Equal));
            prop_assert_eq!(at(ComparisonUnit::Year), Ok(Ordering::Equal));
            prop_assert_eq!(at(ComparisonUnit::Week), Ok(Ordering::Equal));
            prop_assert_eq!(at(ComparisonUnit::IsoWeek), Ok(Ordering::Equal));
        }
    }

    #[test]
    fn shapes_agree_on_every_predicate(
        now in instant_strategy(),
        offset_days in -1000i64..1000,
        tz in zone_strategy(),
    ) {
        let c = comparator(now, tz, WeekStartDay::Sunday);
        let instant = now + Duration::days(offset_days);
        let inputs = shapes(instant, tz);
        for boundary in Boundary::ALL {
            let expected = c.check(boundary, &inputs[0]);
            for input in &inputs[1..] {
                prop_assert_eq!(c.check(boundary, input), expected, "{:?} on {}", boundary, input);
            }
        }
    }

    #[test]
    fn dates_after_tomorrow_are_in_future(
        now in instant_strategy(),
        offset_days in 2i64..5000,
        tz in zone_strategy(),
    ) {
        let c = comparator(now, tz, WeekStartDay::Sunday);
        let input = DateRepresentation::Instant(now + Duration::days(offset_days));
        prop_assert!(c.is_in_future(&input));
        prop_assert!(!c.is_in_past(&input));
        prop_assert!(!c.is_today(&input));
    }

    #[test]
    fn any_time_today_is_today(
        now in instant_strategy(),
        seconds_into_day in 0i64..86_400,
    ) {
        let c = comparator(now, chrono_tz::UTC, WeekStartDay::Sunday);
        let midnight = now.date_naive().and_hms_opt(0, 0, 0).unwrap().and_utc();
        let input = DateRepresentation::Instant(midnight + Duration::seconds(seconds_into_day));
        prop_assert!(c.is_today(&input));
        prop_assert!(!c.is_in_future(&input));
        prop_assert!(!c.is_in_past(&input));
    }

    #[test]
    fn validity_agrees_with_predicates_across_full_range(
        instant in full_range_strategy(),
        tz in prop::sample::select(vec![
            chrono_tz::Asia::Tokyo,
            chrono_tz::America::New_York,
            chrono_tz::Pacific::Apia,
        ]),
    ) {
        let now = Utc.with_ymd_and_hms(2026, 2, 18, 14, 30, 0).unwrap();
        let c = comparator(now, tz, WeekStartDay::Sunday);
        let input = DateRepresentation::Instant(instant);
        let valid = c.is_valid_date_representation(&input);
        prop_assert_eq!(valid, c.is_today_or_in_past(&input) || c.is_in_future(&input));
        prop_assert_eq!(c.compare(&input, &"__TODAY__".into()).is_ok(), valid);
    }

    #[test]
    fn arbitrary_strings_never_panic(s in "\\PC{0,40}", now in instant_strategy()) {
        let c = comparator(now, chrono_tz::UTC, WeekStartDay::Sunday);
        let input = DateRepresentation::Text(s);
        let valid = input.is_valid();
        for boundary in Boundary::ALL {
            if !valid {
                prop_assert!(!c.check(boundary, &input));
            }
        }
        prop_assert_eq!(c.compare(&input, &"__TODAY__".into()).is_ok(), valid);
    }
}
