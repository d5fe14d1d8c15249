//! Parsers for the date/time family (XML Schema Part 2 §3.2.7–3.2.14).

use lexval_core::constants::{MAX_TIMEZONE_MINUTES, REFERENCE_DAY, REFERENCE_MONTH, REFERENCE_YEAR};

use super::scanner::{Scanner, parse_bounded, parse_fraction};
use crate::xsd::error::{ParseError, ParseResult};
use crate::xsd::temporal::calendar;
use crate::xsd::temporal::core::{Fields, Temporal, TemporalKind, Timezone};

/// Parses a `dateTime` value.
///
/// Format: `['-']CCYY-MM-DDThh:mm:ss['.'s+][Z|(+|-)hh:mm]`
///
/// An explicit timezone is folded into UTC; `24:00:00` rolls to the next day.
///
/// ## Errors
/// Returns a lexical error for malformed input, a range error for
/// out-of-domain fields and an overflow error for oversized digit runs.
pub fn parse_date_time(s: &str) -> ParseResult<Temporal> {
    parse_temporal(TemporalKind::DateTime, s)
}

/// Parses a `date` value.
///
/// Format: `['-']CCYY-MM-DD[Z|(+|-)hh:mm]`
///
/// ## Errors
/// Returns an error if the literal is malformed or out of range.
pub fn parse_date(s: &str) -> ParseResult<Temporal> {
    parse_temporal(TemporalKind::Date, s)
}

/// Parses a `time` value.
///
/// Format: `hh:mm:ss['.'s+][Z|(+|-)hh:mm]`
///
/// ## Errors
/// Returns an error if the literal is malformed or out of range.
pub fn parse_time(s: &str) -> ParseResult<Temporal> {
    parse_temporal(TemporalKind::Time, s)
}

/// Parses a `gYearMonth` value (`['-']CCYY-MM[tz]`).
///
/// ## Errors
/// Returns an error if the literal is malformed or out of range.
pub fn parse_g_year_month(s: &str) -> ParseResult<Temporal> {
    parse_temporal(TemporalKind::GYearMonth, s)
}

/// Parses a `gYear` value (`['-']CCYY[tz]`).
///
/// ## Errors
/// Returns an error if the literal is malformed or out of range.
pub fn parse_g_year(s: &str) -> ParseResult<Temporal> {
    parse_temporal(TemporalKind::GYear, s)
}

/// Parses a `gMonthDay` value (`--MM-DD[tz]`).
///
/// ## Errors
/// Returns an error if the literal is malformed or out of range.
pub fn parse_g_month_day(s: &str) -> ParseResult<Temporal> {
    parse_temporal(TemporalKind::GMonthDay, s)
}

/// Parses a `gDay` value (`---DD[tz]`).
///
/// ## Errors
/// Returns an error if the literal is malformed or out of range.
pub fn parse_g_day(s: &str) -> ParseResult<Temporal> {
    parse_temporal(TemporalKind::GDay, s)
}

/// Parses a `gMonth` value (`--MM[tz]`).
///
/// ## Errors
/// Returns an error if the literal is malformed or out of range.
pub fn parse_g_month(s: &str) -> ParseResult<Temporal> {
    parse_temporal(TemporalKind::GMonth, s)
}

/// Parses any member of the date/time family.
///
/// ## Errors
/// Returns an error if the literal does not match the grammar of `kind` or
/// one of its fields is out of range.
pub fn parse_temporal(kind: TemporalKind, s: &str) -> ParseResult<Temporal> {
    let mut scanner = Scanner::new(s);
    let mut fields = Fields::date_time(REFERENCE_YEAR, REFERENCE_MONTH, REFERENCE_DAY, 0, 0, 0);
    let mut at = FieldOffsets::default();

    match kind {
        TemporalKind::DateTime => {
            parse_year_month_day(&mut scanner, &mut fields, &mut at)?;
            scanner.expect(b'T', "'T'")?;
            parse_time_of_day(&mut scanner, &mut fields, &mut at)?;
        }
        TemporalKind::Date => parse_year_month_day(&mut scanner, &mut fields, &mut at)?,
        TemporalKind::Time => parse_time_of_day(&mut scanner, &mut fields, &mut at)?,
        TemporalKind::GYearMonth => {
            fields.year = parse_year(&mut scanner)?;
            scanner.expect(b'-', "'-'")?;
            at.month = scanner.pos();
            fields.month = scanner.fixed_digits(2, "month")?;
        }
        TemporalKind::GYear => fields.year = parse_year(&mut scanner)?,
        TemporalKind::GMonthDay => {
            scanner.expect(b'-', "'--'")?;
            scanner.expect(b'-', "'--'")?;
            at.month = scanner.pos();
            fields.month = scanner.fixed_digits(2, "month")?;
            scanner.expect(b'-', "'-'")?;
            at.day = scanner.pos();
            fields.day = scanner.fixed_digits(2, "day")?;
        }
        TemporalKind::GDay => {
            for _ in 0..3 {
                scanner.expect(b'-', "'---'")?;
            }
            at.day = scanner.pos();
            fields.day = scanner.fixed_digits(2, "day")?;
        }
        TemporalKind::GMonth => {
            scanner.expect(b'-', "'--'")?;
            scanner.expect(b'-', "'--'")?;
            at.month = scanner.pos();
            fields.month = scanner.fixed_digits(2, "month")?;
        }
    }

    let timezone = parse_timezone(&mut scanner)?;
    scanner.finish()?;

    let end_of_day = validate_fields(&fields, &at)?;
    if end_of_day {
        fields = calendar::roll_end_of_day(&fields);
        if kind == TemporalKind::Time {
            fields = calendar::reset_date(fields);
        }
    }

    let mut temporal = Temporal::new(kind, fields, timezone);
    if kind.normalizes_timezone() {
        temporal = calendar::normalize_to_utc(&temporal);
    }
    // A carry out of the largest year has no lexical form that parses back.
    if temporal.year().abs() > i64::from(i32::MAX) {
        return Err(ParseError::overflow(at.year, "year is too large after normalization"));
    }
    Ok(temporal)
}

/// Where each field starts in the literal, for range errors.
#[derive(Debug, Default)]
struct FieldOffsets {
    year: usize,
    month: usize,
    day: usize,
    hour: usize,
    minute: usize,
    second: usize,
}

/// Parses `['-']CCYY`: four or more digits, leading zeros only when exactly four.
fn parse_year(scanner: &mut Scanner<'_>) -> ParseResult<i64> {
    let start = scanner.pos();
    let negative = scanner.eat(b'-');
    let digits_start = scanner.pos();
    let digits = scanner.digits();

    if digits.len() < 4 {
        return Err(ParseError::lexical(
            digits_start,
            "year must have at least 4 digits",
        ));
    }
    if digits.len() > 4 && digits.starts_with('0') {
        return Err(ParseError::lexical(
            digits_start,
            "leading zeros are only allowed in a 4-digit year",
        ));
    }

    let magnitude = parse_bounded(digits, digits_start, "year")?;
    if magnitude == 0 {
        return Err(ParseError::range(start, "year 0000 is not allowed"));
    }
    Ok(if negative { -magnitude } else { magnitude })
}

fn parse_year_month_day(
    scanner: &mut Scanner<'_>,
    fields: &mut Fields,
    at: &mut FieldOffsets,
) -> ParseResult<()> {
    at.year = scanner.pos();
    fields.year = parse_year(scanner)?;
    scanner.expect(b'-', "'-'")?;
    at.month = scanner.pos();
    fields.month = scanner.fixed_digits(2, "month")?;
    scanner.expect(b'-', "'-'")?;
    at.day = scanner.pos();
    fields.day = scanner.fixed_digits(2, "day")?;
    Ok(())
}

/// Parses `hh:mm:ss['.'s+]`.
fn parse_time_of_day(
    scanner: &mut Scanner<'_>,
    fields: &mut Fields,
    at: &mut FieldOffsets,
) -> ParseResult<()> {
    at.hour = scanner.pos();
    fields.hour = scanner.fixed_digits(2, "hour")?;
    scanner.expect(b':', "':'")?;
    at.minute = scanner.pos();
    fields.minute = scanner.fixed_digits(2, "minute")?;
    scanner.expect(b':', "':'")?;
    at.second = scanner.pos();
    fields.second = scanner.fixed_digits(2, "second")?;

    if scanner.eat(b'.') {
        let position = scanner.pos();
        let digits = scanner.digits();
        if digits.is_empty() {
            return Err(ParseError::lexical(
                position,
                "'.' must be followed by fractional digits",
            ));
        }
        fields.nanosecond = parse_fraction(digits, position)?;
    }
    Ok(())
}

/// Parses an optional `Z` or `(+|-)hh:mm` suffix.
fn parse_timezone(scanner: &mut Scanner<'_>) -> ParseResult<Timezone> {
    let start = scanner.pos();
    let sign = match scanner.peek() {
        None => return Ok(Timezone::Absent),
        Some(b'Z') => {
            scanner.eat(b'Z');
            return Ok(Timezone::Utc);
        }
        Some(b'+') => 1,
        Some(b'-') => -1,
        Some(_) => return Err(scanner.unexpected("timezone or end of input")),
    };
    scanner.eat(if sign > 0 { b'+' } else { b'-' });

    let hours = scanner.fixed_digits(2, "timezone hour")?;
    scanner.expect(b':', "':'")?;
    let minutes = scanner.fixed_digits(2, "timezone minute")?;

    if minutes > 59 {
        return Err(ParseError::range(start, "timezone minutes must be 00..59"));
    }
    let total = hours * 60 + minutes;
    if total > i64::from(MAX_TIMEZONE_MINUTES) {
        return Err(ParseError::range(
            start,
            "timezone offset must lie within -14:00..+14:00",
        ));
    }

    i16::try_from(sign * total)
        .map(Timezone::from_offset_minutes)
        .map_err(|_err| ParseError::range(start, "timezone offset out of range"))
}

/// Checks field ranges. Returns `true` for the `24:00:00` end-of-day form.
fn validate_fields(fields: &Fields, at: &FieldOffsets) -> ParseResult<bool> {
    if !(1..=12).contains(&fields.month) {
        return Err(ParseError::range(at.month, "month must be 01..12"));
    }
    let max_day = calendar::days_in_month(fields.year, fields.month);
    if !(1..=max_day).contains(&fields.day) {
        return Err(ParseError::range(
            at.day,
            format!("day must be 01..{max_day} for this month"),
        ));
    }

    let end_of_day = fields.hour == 24
        && fields.minute == 0
        && fields.second == 0
        && fields.nanosecond == 0;
    if fields.hour > 23 && !end_of_day {
        return Err(ParseError::range(
            at.hour,
            "hour must be 00..23, unless 24:00:00",
        ));
    }
    if fields.minute > 59 {
        return Err(ParseError::range(at.minute, "minute must be 00..59"));
    }
    if fields.second > 60 {
        return Err(ParseError::range(at.second, "second must be 00..60"));
    }
    Ok(end_of_day)
}
