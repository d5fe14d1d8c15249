//! Proleptic Gregorian calendar arithmetic.
//!
//! Implements the helper functions of XML Schema Part 2, Appendix E
//! ("Adding durations to dateTimes") over [`Fields`]. Duration comparison
//! adds whole durations to anchor instants; timezone normalization shifts
//! only the minute field and carries upward from there.

use lexval_core::constants::{REFERENCE_DAY, REFERENCE_MONTH, REFERENCE_YEAR};

use super::core::{Fields, Temporal, TemporalKind, Timezone};

pub(crate) const NANOS_PER_SECOND: i64 = 1_000_000_000;

/// Days in a full 400-year Gregorian cycle.
const DAYS_PER_CYCLE: i64 = 146_097;

/// Returns whether `year` is a leap year.
#[must_use]
pub const fn is_leap_year(year: i64) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in `month` of `year`.
///
/// Months outside `1..=12` wrap into the neighbouring years, so month `0` is
/// December of the previous year.
#[must_use]
pub const fn days_in_month(year: i64, month: i64) -> i64 {
    let year = year + f_quotient_range(month, 1, 13);
    match modulo(month, 1, 13) {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}

/// Greatest integer less than or equal to `a / b`.
#[must_use]
pub const fn f_quotient(a: i64, b: i64) -> i64 {
    a.div_euclid(b)
}

/// `a` reduced into the half-open range `low..high`.
#[must_use]
pub const fn modulo(a: i64, low: i64, high: i64) -> i64 {
    (a - low).rem_euclid(high - low) + low
}

const fn f_quotient_range(a: i64, low: i64, high: i64) -> i64 {
    f_quotient(a - low, high - low)
}

/// Adds `delta` field by field onto `base`, propagating carries.
///
/// Months carry into years first; then nanoseconds → seconds → minutes →
/// hours → days; finally days are folded into months using the length of the
/// month they land in, borrowing the previous month's length on underflow.
#[must_use]
pub fn add_duration(base: &Fields, delta: &Fields) -> Fields {
    let temp = base.month + delta.month;
    let month = modulo(temp, 1, 13);
    let year = base.year + delta.year + f_quotient_range(temp, 1, 13);

    let temp = base.nanosecond + delta.nanosecond;
    let carry = f_quotient(temp, NANOS_PER_SECOND);
    let nanosecond = temp.rem_euclid(NANOS_PER_SECOND);

    let temp = base.second + delta.second + carry;
    let carry = f_quotient(temp, 60);
    let second = temp.rem_euclid(60);

    let temp = base.minute + delta.minute + carry;
    let carry = f_quotient(temp, 60);
    let minute = temp.rem_euclid(60);

    let temp = base.hour + delta.hour + carry;
    let carry = f_quotient(temp, 24);
    let hour = temp.rem_euclid(24);

    let (year, month, day) = fold_days(year, month, base.day + delta.day + carry);

    Fields {
        year,
        month,
        day,
        hour,
        minute,
        second,
        nanosecond,
    }
}

/// Folds an out-of-range day count into the month it lands in, borrowing the
/// previous month's length on underflow.
fn fold_days(mut year: i64, mut month: i64, mut day: i64) -> (i64, i64, i64) {
    // Whole 400-year cycles shift the date without changing month lengths.
    if day.abs() > DAYS_PER_CYCLE {
        let cycles = day / DAYS_PER_CYCLE;
        year += 400 * cycles;
        day -= DAYS_PER_CYCLE * cycles;
    }

    loop {
        let carry = if day < 1 {
            day += days_in_month(year, month - 1);
            -1
        } else if day > days_in_month(year, month) {
            day -= days_in_month(year, month);
            1
        } else {
            break;
        };
        let temp = month + carry;
        month = modulo(temp, 1, 13);
        year += f_quotient_range(temp, 1, 13);
    }
    (year, month, day)
}

/// Shifts local `fields` written with an offset of `offset_minutes` to UTC.
///
/// The carry starts at the minute field: seconds (including a leap second
/// `60`) and fractions are left as written. A carry across year zero lands
/// on year 1 or year -1.
#[must_use]
pub fn apply_offset(fields: &Fields, offset_minutes: i64) -> Fields {
    let temp = fields.minute - offset_minutes;
    let minute = temp.rem_euclid(60);

    let temp = fields.hour + f_quotient(temp, 60);
    let hour = temp.rem_euclid(24);

    let day = fields.day + f_quotient(temp, 24);
    let (year, month, day) = fold_days(fields.year, fields.month, day);

    skip_year_zero(
        fields.year,
        Fields {
            year,
            month,
            day,
            hour,
            minute,
            ..*fields
        },
    )
}

/// Produces the equivalent value with its timezone forced to UTC.
///
/// Values without a timezone, or already in UTC, are returned unchanged. For
/// `time` values the date part is reset afterwards, so times wrap around
/// midnight.
#[must_use]
pub fn normalize_to_utc(temporal: &Temporal) -> Temporal {
    let Timezone::Offset(minutes) = temporal.timezone() else {
        return temporal.clone();
    };
    let original = temporal.fields();
    let mut fields = apply_offset(original, i64::from(minutes));
    tracing::trace!(
        from = ?original,
        to = ?fields,
        offset = minutes,
        "Normalized timezone offset"
    );
    if temporal.kind() == TemporalKind::Time {
        fields = reset_date(fields);
    }
    Temporal::new(temporal.kind(), fields, Timezone::Utc)
}

/// Rolls the `24:00:00` end-of-day form over to `00:00:00` of the next day.
#[must_use]
pub(crate) fn roll_end_of_day(fields: &Fields) -> Fields {
    let midnight = Fields {
        hour: 0,
        ..*fields
    };
    skip_year_zero(
        fields.year,
        add_duration(
            &midnight,
            &Fields {
                day: 1,
                ..Fields::default()
            },
        ),
    )
}

/// Replaces the date part with the reference date used by `time` values.
#[must_use]
pub(crate) const fn reset_date(fields: Fields) -> Fields {
    Fields {
        year: REFERENCE_YEAR,
        month: REFERENCE_MONTH,
        day: REFERENCE_DAY,
        ..fields
    }
}

/// There is no year zero: a carry across it lands on year 1 or year -1.
const fn skip_year_zero(original_year: i64, mut fields: Fields) -> Fields {
    if fields.year == 0 {
        fields.year = if original_year > 0 { -1 } else { 1 };
    }
    fields
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, NaiveDate};

    use super::*;

    #[test]
    fn leap_year_rule() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(1996));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(1997));
        assert!(is_leap_year(-4));
    }

    #[test]
    fn days_in_month_matches_chrono() {
        for year in [1600_i32, 1900, 1999, 2000, 2024, 2100] {
            for month in 1..=12_u32 {
                let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
                let next = if month == 12 {
                    NaiveDate::from_ymd_opt(year + 1, 1, 1).unwrap()
                } else {
                    NaiveDate::from_ymd_opt(year, month + 1, 1).unwrap()
                };
                let expected = (next - first).num_days();
                assert_eq!(
                    days_in_month(i64::from(year), i64::from(month)),
                    expected,
                    "{year}-{month}"
                );
            }
        }
    }

    #[test]
    fn days_in_month_wraps_month_zero() {
        assert_eq!(days_in_month(2001, 0), 31);
        assert_eq!(days_in_month(2000, 14), 28);
        assert_eq!(days_in_month(2001, -10), 29);
    }

    #[test]
    fn quotient_and_modulo_floor() {
        assert_eq!(f_quotient(-1, 60), -1);
        assert_eq!(f_quotient(59, 60), 0);
        assert_eq!(modulo(0, 1, 13), 12);
        assert_eq!(modulo(13, 1, 13), 1);
        assert_eq!(modulo(-11, 1, 13), 1);
    }

    #[test]
    fn add_months_carries_into_year() {
        let base = Fields::date_time(1903, 7, 1, 0, 0, 0);
        let delta = Fields {
            month: 18,
            ..Fields::default()
        };
        assert_eq!(
            add_duration(&base, &delta),
            Fields::date_time(1905, 1, 1, 0, 0, 0)
        );
    }

    #[test]
    fn add_negative_days_borrows_previous_month() {
        let base = Fields::date_time(1903, 3, 1, 0, 0, 0);
        let delta = Fields {
            day: -1,
            ..Fields::default()
        };
        assert_eq!(
            add_duration(&base, &delta),
            Fields::date_time(1903, 2, 28, 0, 0, 0)
        );
    }

    #[test]
    fn add_seconds_cascade() {
        let base = Fields::date_time(1999, 12, 31, 23, 59, 30);
        let delta = Fields {
            second: 45,
            nanosecond: 500_000_000,
            ..Fields::default()
        };
        let sum = add_duration(&base, &delta);
        assert_eq!(sum.year, 2000);
        assert_eq!(sum.month, 1);
        assert_eq!(sum.day, 1);
        assert_eq!(sum.second, 15);
        assert_eq!(sum.nanosecond, 500_000_000);
    }

    #[test]
    fn add_large_day_counts_matches_chrono() {
        let base = NaiveDate::from_ymd_opt(1696, 9, 1).unwrap();
        for days in [400_000_i64, 1_000_000, -1_000_000, 146_097, -146_098] {
            let expected = base + chrono::Duration::days(days);
            let sum = add_duration(
                &Fields::date_time(1696, 9, 1, 0, 0, 0),
                &Fields {
                    day: days,
                    ..Fields::default()
                },
            );
            assert_eq!(
                (sum.year, sum.month, sum.day),
                (
                    i64::from(expected.year()),
                    i64::from(expected.month()),
                    i64::from(expected.day())
                ),
                "{days} days"
            );
        }
    }

    #[test]
    fn apply_offset_crosses_month_boundary() {
        // 2000-03-01T01:00:00+05:00 is 2000-02-29T20:00:00Z
        let local = Fields::date_time(2000, 3, 1, 1, 0, 0);
        assert_eq!(
            apply_offset(&local, 300),
            Fields::date_time(2000, 2, 29, 20, 0, 0)
        );
        // 1999-12-31T23:30:00-01:00 is 2000-01-01T00:30:00Z
        let local = Fields::date_time(1999, 12, 31, 23, 30, 0);
        assert_eq!(
            apply_offset(&local, -60),
            Fields::date_time(2000, 1, 1, 0, 30, 0)
        );
    }

    #[test]
    fn apply_offset_keeps_leap_second() {
        // 1998-12-31T18:59:60-05:00 is 1998-12-31T23:59:60Z
        let local = Fields {
            nanosecond: 250_000_000,
            ..Fields::date_time(1998, 12, 31, 18, 59, 60)
        };
        let utc = apply_offset(&local, -300);
        assert_eq!(
            utc,
            Fields {
                nanosecond: 250_000_000,
                ..Fields::date_time(1998, 12, 31, 23, 59, 60)
            }
        );
    }

    #[test]
    fn apply_offset_skips_year_zero() {
        let local = Fields::date_time(1, 1, 1, 0, 0, 0);
        assert_eq!(
            apply_offset(&local, 14 * 60),
            Fields::date_time(-1, 12, 31, 10, 0, 0)
        );
        let local = Fields::date_time(-1, 12, 31, 23, 0, 0);
        assert_eq!(
            apply_offset(&local, -14 * 60),
            Fields::date_time(1, 1, 1, 13, 0, 0)
        );
    }

    #[test]
    fn normalize_to_utc_keeps_kind() {
        let local = Temporal::new(
            TemporalKind::Date,
            Fields::date_time(2002, 10, 10, 0, 0, 0),
            Timezone::Offset(13 * 60),
        );
        let utc = normalize_to_utc(&local);
        assert_eq!(utc.timezone(), Timezone::Utc);
        assert_eq!(utc.kind(), TemporalKind::Date);
        assert_eq!(*utc.fields(), Fields::date_time(2002, 10, 9, 11, 0, 0));
    }

    #[test]
    fn normalize_to_utc_skips_year_zero() {
        let local = Temporal::new(
            TemporalKind::DateTime,
            Fields::date_time(1, 1, 1, 0, 0, 0),
            Timezone::Offset(60),
        );
        assert_eq!(normalize_to_utc(&local).year(), -1);
    }

    #[test]
    fn roll_end_of_day_carries_year() {
        let end = Fields::date_time(1999, 12, 31, 24, 0, 0);
        assert_eq!(roll_end_of_day(&end), Fields::date_time(2000, 1, 1, 0, 0, 0));

        let end = Fields::date_time(-1, 12, 31, 24, 0, 0);
        assert_eq!(roll_end_of_day(&end).year, 1);
    }
}
