//! Canonical lexical forms for temporal values.
//!
//! `dateTime` and `time` always render their seconds with at least one
//! fractional digit (`00:00:00.0`). Durations omit zero components and
//! render the zero duration as `PT0S`.

use std::fmt::Write;

use super::core::{Duration, Temporal, TemporalKind};

/// Renders the canonical form of a date/time value.
#[must_use]
pub fn format_temporal(temporal: &Temporal) -> String {
    let fields = temporal.fields();
    let mut out = String::with_capacity(32);

    match temporal.kind() {
        TemporalKind::DateTime => {
            push_year(&mut out, fields.year);
            let _ = write!(out, "-{:02}-{:02}T", fields.month, fields.day);
            push_time(&mut out, temporal);
        }
        TemporalKind::Date => {
            push_year(&mut out, fields.year);
            let _ = write!(out, "-{:02}-{:02}", fields.month, fields.day);
        }
        TemporalKind::Time => push_time(&mut out, temporal),
        TemporalKind::GYearMonth => {
            push_year(&mut out, fields.year);
            let _ = write!(out, "-{:02}", fields.month);
        }
        TemporalKind::GYear => push_year(&mut out, fields.year),
        TemporalKind::GMonthDay => {
            let _ = write!(out, "--{:02}-{:02}", fields.month, fields.day);
        }
        TemporalKind::GDay => {
            let _ = write!(out, "---{:02}", fields.day);
        }
        TemporalKind::GMonth => {
            let _ = write!(out, "--{:02}", fields.month);
        }
    }

    let _ = write!(out, "{}", temporal.timezone());
    out
}

/// Renders the canonical form of a duration.
#[must_use]
pub fn format_duration(duration: &Duration) -> String {
    if duration.is_zero() {
        return "PT0S".to_string();
    }

    let fields = duration.fields();
    let mut out = String::with_capacity(24);
    if duration.is_negative() {
        out.push('-');
    }
    out.push('P');

    for (value, designator) in [
        (fields.year, 'Y'),
        (fields.month, 'M'),
        (fields.day, 'D'),
    ] {
        if value != 0 {
            let _ = write!(out, "{}{designator}", value.unsigned_abs());
        }
    }

    if fields.hour != 0 || fields.minute != 0 || fields.second != 0 || fields.nanosecond != 0 {
        out.push('T');
        for (value, designator) in [(fields.hour, 'H'), (fields.minute, 'M')] {
            if value != 0 {
                let _ = write!(out, "{}{designator}", value.unsigned_abs());
            }
        }
        if fields.second != 0 || fields.nanosecond != 0 {
            let _ = write!(out, "{}", fields.second.unsigned_abs());
            if fields.nanosecond != 0 {
                out.push('.');
                out.push_str(&fraction_digits(fields.nanosecond.unsigned_abs()));
            }
            out.push('S');
        }
    }
    out
}

/// Appends a year padded to four digits, with a leading `-` when negative.
fn push_year(out: &mut String, year: i64) {
    if year < 0 {
        out.push('-');
    }
    let _ = write!(out, "{:04}", year.unsigned_abs());
}

/// Appends `hh:mm:ss.f`, keeping at least one fractional digit.
fn push_time(out: &mut String, temporal: &Temporal) {
    let fields = temporal.fields();
    let _ = write!(
        out,
        "{:02}:{:02}:{:02}.",
        fields.hour, fields.minute, fields.second
    );
    if fields.nanosecond == 0 {
        out.push('0');
    } else {
        out.push_str(&fraction_digits(fields.nanosecond.unsigned_abs()));
    }
}

/// Nanoseconds as fractional digits without trailing zeros.
fn fraction_digits(nanos: u64) -> String {
    let padded = format!("{nanos:09}");
    padded.trim_end_matches('0').to_string()
}
