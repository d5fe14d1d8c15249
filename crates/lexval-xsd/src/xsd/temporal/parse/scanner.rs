//! Byte cursor over an ASCII lexical form.

use crate::xsd::error::{ParseError, ParseResult};

pub(crate) struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub(crate) const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    pub(crate) const fn pos(&self) -> usize {
        self.pos
    }

    pub(crate) const fn is_done(&self) -> bool {
        self.pos >= self.input.len()
    }

    pub(crate) fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    /// Character at the cursor, for error messages.
    fn current_char(&self) -> Option<char> {
        self.input.get(self.pos..).and_then(|rest| rest.chars().next())
    }

    /// Consumes `byte` if it is next.
    pub(crate) fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consumes `byte` or fails with a lexical error naming `what`.
    pub(crate) fn expect(&mut self, byte: u8, what: &str) -> ParseResult<()> {
        if self.eat(byte) {
            Ok(())
        } else {
            Err(self.unexpected(what))
        }
    }

    /// Consumes the longest run of ASCII digits, possibly empty.
    pub(crate) fn digits(&mut self) -> &'a str {
        let start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }
        &self.input[start..self.pos]
    }

    /// Consumes exactly `count` digits and returns their value.
    pub(crate) fn fixed_digits(&mut self, count: usize, what: &str) -> ParseResult<i64> {
        let start = self.pos;
        let mut value = 0_i64;
        for _ in 0..count {
            match self.peek() {
                Some(b) if b.is_ascii_digit() => {
                    value = value * 10 + i64::from(b - b'0');
                    self.pos += 1;
                }
                _ => {
                    return Err(ParseError::lexical(
                        start,
                        format!("{what} must have exactly {count} digits"),
                    ));
                }
            }
        }
        Ok(value)
    }

    /// Fails unless the whole input has been consumed.
    pub(crate) fn finish(&self) -> ParseResult<()> {
        if self.is_done() {
            Ok(())
        } else {
            Err(self.unexpected("end of input"))
        }
    }

    pub(crate) fn unexpected(&self, expected: &str) -> ParseError {
        ParseError::unexpected(self.pos, expected, self.current_char())
    }
}

/// Parses a bounded unsigned digit run; values beyond `i32::MAX` overflow.
pub(crate) fn parse_bounded(digits: &str, position: usize, what: &str) -> ParseResult<i64> {
    digits
        .parse::<i32>()
        .map(i64::from)
        .map_err(|_err| ParseError::overflow(position, format!("{what} is too large")))
}

/// Converts the digits after a decimal point to nanoseconds.
///
/// Trailing zeros are insignificant; more than nine significant digits
/// cannot be represented and overflow.
pub(crate) fn parse_fraction(digits: &str, position: usize) -> ParseResult<i64> {
    let significant = digits.trim_end_matches('0');
    if significant.len() > 9 {
        return Err(ParseError::overflow(
            position,
            "fractional seconds beyond nanosecond precision",
        ));
    }
    let value = significant
        .bytes()
        .chain(std::iter::repeat(b'0'))
        .take(9)
        .fold(0_i64, |acc, b| acc * 10 + i64::from(b - b'0'));
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xsd::error::ParseErrorKind;

    #[test]
    fn fixed_digits_requires_exact_count() {
        let mut scanner = Scanner::new("1a");
        let err = scanner.fixed_digits(2, "month").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::Lexical);
        assert_eq!(err.position, 0);
    }

    #[test]
    fn digits_stops_at_separator() {
        let mut scanner = Scanner::new("2003-06");
        assert_eq!(scanner.digits(), "2003");
        assert!(scanner.eat(b'-'));
        assert_eq!(scanner.fixed_digits(2, "month").unwrap(), 6);
        assert!(scanner.finish().is_ok());
    }

    #[test]
    fn finish_reports_trailing_input() {
        let mut scanner = Scanner::new("12x");
        scanner.digits();
        let err = scanner.finish().unwrap_err();
        assert_eq!(err.position, 2);
        assert_eq!(err.message, "expected end of input, found 'x'");
    }

    #[test]
    fn fraction_to_nanoseconds() {
        assert_eq!(parse_fraction("5", 0).unwrap(), 500_000_000);
        assert_eq!(parse_fraction("000000001", 0).unwrap(), 1);
        assert_eq!(parse_fraction("1230000000000", 0).unwrap(), 123_000_000);
        assert_eq!(
            parse_fraction("0000000001", 0).unwrap_err().kind,
            ParseErrorKind::Overflow
        );
    }

    #[test]
    fn bounded_component_overflow() {
        assert_eq!(parse_bounded("2147483647", 0, "years").unwrap(), 2_147_483_647);
        assert_eq!(
            parse_bounded("2147483648", 0, "years").unwrap_err().kind,
            ParseErrorKind::Overflow
        );
    }
}
