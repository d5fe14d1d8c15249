use super::Decimal;
use crate::xsd::error::{ParseError, ParseResult};

/// Parses a `decimal` literal: `[+|-]` digits with an optional `.` and fraction.
///
/// At least one digit must appear on either side of the point. A literal
/// written without a point keeps an integer canonical form.
///
/// ## Errors
/// Returns a lexical error if the literal is malformed.
pub fn parse_decimal(s: &str) -> ParseResult<Decimal> {
    parse(s, false)
}

/// Parses an `integer` literal: `[+|-]` digits.
///
/// ## Errors
/// Returns a lexical error if the literal is malformed or has a decimal point.
pub fn parse_integer(s: &str) -> ParseResult<Decimal> {
    parse(s, true)
}

#[tracing::instrument(level = "trace", skip(s), fields(len = s.len()))]
fn parse(s: &str, integer_only: bool) -> ParseResult<Decimal> {
    let bytes = s.as_bytes();
    let mut pos = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    let integer_start = pos;
    while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
        pos += 1;
    }
    let integer = &s[integer_start..pos];

    let mut fraction = "";
    let has_point = bytes.get(pos) == Some(&b'.');
    if has_point {
        if integer_only {
            return Err(ParseError::lexical(pos, "integer must not have a decimal point"));
        }
        pos += 1;
        let fraction_start = pos;
        while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
            pos += 1;
        }
        fraction = &s[fraction_start..pos];
    }

    if integer.is_empty() && fraction.is_empty() {
        return Err(ParseError::lexical(integer_start, "expected at least one digit"));
    }
    if pos < s.len() {
        let found = s[pos..].chars().next();
        return Err(ParseError::unexpected(pos, "digit or end of input", found));
    }

    Ok(Decimal::new(negative, integer, fraction, integer_only, !has_point))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xsd::error::ParseErrorKind;

    #[test]
    fn accepts_decimal_forms() {
        for literal in ["1", "-1", "+1", "1.", ".1", "-.1", "00012.3400", "0"] {
            assert!(parse_decimal(literal).is_ok(), "{literal}");
        }
    }

    #[test]
    fn rejects_malformed_decimals() {
        for literal in ["", "-", "+", ".", "-.", "1.2.3", "1e3", " 1", "1 ", "--1", "1,5", "١"] {
            let err = parse_decimal(literal).unwrap_err();
            assert_eq!(err.kind, ParseErrorKind::Lexical, "{literal}");
        }
    }

    #[test]
    fn integer_rejects_point() {
        let err = parse_integer("12.0").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::Lexical);
        assert_eq!(err.position, 2);
        assert!(parse_integer("-12").is_ok());
    }

    #[test]
    fn error_positions() {
        assert_eq!(parse_decimal("12x").unwrap_err().position, 2);
        assert_eq!(parse_decimal("-").unwrap_err().position, 1);
    }

    #[test]
    fn very_long_literals_do_not_overflow() {
        let literal = format!("{}.{}", "9".repeat(500), "1".repeat(500));
        let d = parse_decimal(&literal).unwrap();
        assert_eq!(d.integer_digits().len(), 500);
        assert_eq!(d.fraction_digits().len(), 500);
    }
}
