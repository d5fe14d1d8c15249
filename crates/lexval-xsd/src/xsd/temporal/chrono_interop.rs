//! Conversions between `dateTime` values and [`chrono`] instants.
//!
//! Only values that name a single instant in the common era convert: the
//! value must carry a timezone, its year must be positive and its second must
//! not be a leap second.

use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};

use super::calendar::normalize_to_utc;
use super::core::{Fields, Temporal, TemporalKind, Timezone};

impl Temporal {
    /// Returns the UTC instant of a `dateTime` with a timezone.
    ///
    /// Returns `None` for other kinds, local values, years before 1, leap
    /// seconds and years outside chrono's range.
    #[must_use]
    pub fn to_chrono_utc(&self) -> Option<DateTime<Utc>> {
        if self.kind() != TemporalKind::DateTime || self.timezone().is_absent() {
            return None;
        }
        let utc = normalize_to_utc(self);
        let fields = utc.fields();
        if fields.year < 1 || fields.second > 59 {
            return None;
        }

        let date = NaiveDate::from_ymd_opt(
            i32::try_from(fields.year).ok()?,
            u32::try_from(fields.month).ok()?,
            u32::try_from(fields.day).ok()?,
        )?;
        let naive = date.and_hms_nano_opt(
            u32::try_from(fields.hour).ok()?,
            u32::try_from(fields.minute).ok()?,
            u32::try_from(fields.second).ok()?,
            u32::try_from(fields.nanosecond).ok()?,
        )?;
        Some(naive.and_utc())
    }

    /// Builds a UTC `dateTime` from a chrono instant.
    ///
    /// Returns `None` for instants before year 1 and for leap seconds.
    #[must_use]
    pub fn from_chrono_utc(instant: &DateTime<Utc>) -> Option<Self> {
        if instant.year() < 1 || instant.nanosecond() >= 1_000_000_000 {
            return None;
        }
        let fields = Fields {
            year: i64::from(instant.year()),
            month: i64::from(instant.month()),
            day: i64::from(instant.day()),
            hour: i64::from(instant.hour()),
            minute: i64::from(instant.minute()),
            second: i64::from(instant.second()),
            nanosecond: i64::from(instant.nanosecond()),
        };
        Some(Self::new(TemporalKind::DateTime, fields, Timezone::Utc))
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::xsd::temporal::parse::{parse_date, parse_date_time};

    #[test]
    fn offset_date_time_to_chrono() {
        let dt = parse_date_time("2002-10-10T12:00:00.125-05:00").unwrap();
        let expected = Utc.with_ymd_and_hms(2002, 10, 10, 17, 0, 0).unwrap()
            + chrono::Duration::milliseconds(125);
        assert_eq!(dt.to_chrono_utc(), Some(expected));
    }

    #[test]
    fn unconvertible_values() {
        assert_eq!(parse_date_time("2002-10-10T12:00:00").unwrap().to_chrono_utc(), None);
        assert_eq!(parse_date("2002-10-10Z").unwrap().to_chrono_utc(), None);
        assert_eq!(parse_date_time("-0001-01-01T00:00:00Z").unwrap().to_chrono_utc(), None);
        assert_eq!(parse_date_time("1998-12-31T23:59:60Z").unwrap().to_chrono_utc(), None);
    }

    #[test]
    fn chrono_round_trip() {
        let instant = Utc.with_ymd_and_hms(1999, 12, 31, 23, 59, 59).unwrap()
            + chrono::Duration::nanoseconds(1);
        let temporal = Temporal::from_chrono_utc(&instant).unwrap();
        assert_eq!(temporal.canonical(), "1999-12-31T23:59:59.000000001Z");
        assert_eq!(temporal.to_chrono_utc(), Some(instant));
        assert_eq!(
            temporal,
            parse_date_time("1999-12-31T23:59:59.000000001Z").unwrap()
        );
    }
}
