//! Parser for `duration` (XML Schema Part 2 §3.2.6).

use super::scanner::{Scanner, parse_bounded, parse_fraction};
use crate::xsd::error::{ParseError, ParseResult};
use crate::xsd::temporal::core::{Duration, Fields};

/// Designators of the date part, in the order they must appear.
const DATE_DESIGNATORS: [u8; 3] = [b'Y', b'M', b'D'];
/// Designators of the time part, in the order they must appear.
const TIME_DESIGNATORS: [u8; 3] = [b'H', b'M', b'S'];

/// Parses a `duration` value.
///
/// Format: `['-']P[nY][nM][nD][T[nH][nM][n['.'n]S]]`
///
/// At least one component must be present, and a `T` must be followed by at
/// least one time component. A leading `-` negates every field.
///
/// ## Errors
/// Returns a lexical error for malformed input and an overflow error for
/// components wider than 32 bits or fractions finer than a nanosecond.
pub fn parse_duration(s: &str) -> ParseResult<Duration> {
    let mut scanner = Scanner::new(s);
    let mut fields = Fields::default();

    let negative = scanner.eat(b'-');
    scanner.expect(b'P', "'P'")?;

    let mut seen_date = false;
    let mut next_date = 0;
    while scanner.peek().is_some_and(|b| b != b'T') {
        let component = Component::scan(&mut scanner)?;
        let index = designator_index(&DATE_DESIGNATORS, &component, next_date)?;
        component.reject_fraction()?;
        match index {
            0 => fields.year = component.value,
            1 => fields.month = component.value,
            _ => fields.day = component.value,
        }
        next_date = index + 1;
        seen_date = true;
    }

    let mut seen_time = false;
    if scanner.eat(b'T') {
        let mut next_time = 0;
        while !scanner.is_done() {
            let component = Component::scan(&mut scanner)?;
            let index = designator_index(&TIME_DESIGNATORS, &component, next_time)?;
            match index {
                0 => fields.hour = component.value,
                1 => fields.minute = component.value,
                _ => {
                    fields.second = component.value;
                    fields.nanosecond = component.nanos;
                }
            }
            if index < 2 {
                component.reject_fraction()?;
            }
            next_time = index + 1;
            seen_time = true;
        }
        if !seen_time {
            return Err(ParseError::lexical(
                scanner.pos(),
                "'T' must be followed by at least one time component",
            ));
        }
    }

    scanner.finish()?;
    if !seen_date && !seen_time {
        return Err(ParseError::lexical(
            scanner.pos(),
            "duration must have at least one component",
        ));
    }

    Ok(Duration::new(if negative {
        fields.negated()
    } else {
        fields
    }))
}

/// One `n[.n]X` component.
struct Component {
    value: i64,
    nanos: i64,
    fractional: bool,
    designator: u8,
    /// Offset of the first digit.
    position: usize,
}

impl Component {
    fn scan(scanner: &mut Scanner<'_>) -> ParseResult<Self> {
        let position = scanner.pos();
        let digits = scanner.digits();
        if digits.is_empty() {
            return Err(scanner.unexpected("a number"));
        }
        let value = parse_bounded(digits, position, "duration component")?;

        let mut nanos = 0;
        let fractional = scanner.eat(b'.');
        if fractional {
            let fraction_pos = scanner.pos();
            let fraction = scanner.digits();
            if fraction.is_empty() {
                return Err(ParseError::lexical(
                    fraction_pos,
                    "'.' must be followed by fractional digits",
                ));
            }
            nanos = parse_fraction(fraction, fraction_pos)?;
        }

        let designator = scanner
            .peek()
            .ok_or_else(|| scanner.unexpected("a designator"))?;
        scanner.eat(designator);

        Ok(Self {
            value,
            nanos,
            fractional,
            designator,
            position,
        })
    }

    fn reject_fraction(&self) -> ParseResult<()> {
        if self.fractional {
            Err(ParseError::lexical(
                self.position,
                "only seconds may have a fractional part",
            ))
        } else {
            Ok(())
        }
    }
}

/// Finds the component's designator among `allowed`; it must not precede `next`.
fn designator_index(allowed: &[u8; 3], component: &Component, next: usize) -> ParseResult<usize> {
    allowed
        .iter()
        .position(|&d| d == component.designator)
        .filter(|&index| index >= next)
        .ok_or_else(|| {
            ParseError::lexical(
                component.position,
                format!(
                    "unexpected designator '{}'",
                    char::from(component.designator)
                ),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xsd::error::ParseErrorKind;

    #[test]
    fn parse_full_duration() {
        let dur = parse_duration("P1Y2M3DT10H30M12.3S").unwrap();
        assert_eq!(dur.years(), 1);
        assert_eq!(dur.months(), 2);
        assert_eq!(dur.days(), 3);
        assert_eq!(dur.hours(), 10);
        assert_eq!(dur.minutes(), 30);
        assert_eq!(dur.seconds(), 12);
        assert_eq!(dur.nanoseconds(), 300_000_000);
    }

    #[test]
    fn parse_negative_duration_negates_all_fields() {
        let dur = parse_duration("-P1DT2H").unwrap();
        assert!(dur.is_negative());
        assert_eq!(dur.days(), -1);
        assert_eq!(dur.hours(), -2);
        assert_eq!(dur.minutes(), 0);
    }

    #[test]
    fn parse_minutes_designator_by_position() {
        let dur = parse_duration("P1MT1M").unwrap();
        assert_eq!(dur.months(), 1);
        assert_eq!(dur.minutes(), 1);
    }

    #[test]
    fn parse_time_only_and_fractional_seconds() {
        let dur = parse_duration("PT0.5S").unwrap();
        assert_eq!(dur.seconds(), 0);
        assert_eq!(dur.nanoseconds(), 500_000_000);

        let dur = parse_duration("-PT1.25S").unwrap();
        assert_eq!(dur.seconds(), -1);
        assert_eq!(dur.nanoseconds(), -250_000_000);
    }

    #[test]
    fn parse_duration_lexical_errors() {
        for literal in [
            "",
            "P",
            "PT",
            "P1YT",
            "1Y",
            "P-1Y",
            "+P1Y",
            "P1D2M",
            "P1Y1Y",
            "PT1S2M",
            "P1.5Y",
            "PT1.5M",
            "PT1.S",
            "P1",
            "P1W",
            "PT1H ",
            "P1Y T1H",
            "P1H",
            "PT1D",
        ] {
            assert_eq!(
                parse_duration(literal).unwrap_err().kind,
                ParseErrorKind::Lexical,
                "{literal}"
            );
        }
    }

    #[test]
    fn parse_duration_overflow() {
        assert_eq!(
            parse_duration("P99999999999Y").unwrap_err().kind,
            ParseErrorKind::Overflow
        );
        assert!(parse_duration("P2147483647D").is_ok());
    }
}
