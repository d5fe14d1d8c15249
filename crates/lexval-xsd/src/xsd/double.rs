//! IEEE-754 `double` values (XML Schema Part 2 §3.2.5).

use std::fmt;
use std::hash::{Hash, Hasher};

use lexval_core::constants::{INF_TOKEN, NAN_TOKEN, NEG_INF_TOKEN};

use super::Order;
use super::cache::CanonicalCache;
use super::error::{ParseError, ParseResult};

/// A parsed `double`.
///
/// Negative zero is stored as positive zero and every NaN as the same quiet
/// NaN, so structural equality matches the value space.
#[derive(Debug, Clone)]
pub struct Double {
    value: f64,
    canonical: CanonicalCache,
}

impl Double {
    #[must_use]
    pub fn new(value: f64) -> Self {
        let value = if value.is_nan() {
            f64::NAN
        } else if value == 0.0 {
            0.0
        } else {
            value
        };
        Self {
            value,
            canonical: CanonicalCache::default(),
        }
    }

    /// Parses a `double` literal.
    ///
    /// Accepts `[+|-](digits[.digits] | .digits)([eE][+|-]digits)` and the
    /// tokens `INF`, `-INF` and `NaN`. Magnitudes beyond the finite range
    /// become infinities.
    ///
    /// ## Errors
    /// Returns a lexical error if the literal is malformed.
    pub fn parse(s: &str) -> ParseResult<Self> {
        match s {
            INF_TOKEN => return Ok(Self::new(f64::INFINITY)),
            NEG_INF_TOKEN => return Ok(Self::new(f64::NEG_INFINITY)),
            NAN_TOKEN => return Ok(Self::new(f64::NAN)),
            _ => {}
        }
        check_grammar(s)?;
        s.parse::<f64>()
            .map(Self::new)
            .map_err(|err| ParseError::lexical(0, err.to_string()))
    }

    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub const fn is_nan(&self) -> bool {
        self.value.is_nan()
    }

    /// Numeric order; any comparison involving NaN is indeterminate.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Order {
        Order::from(self.value.partial_cmp(&other.value))
    }

    /// Value equality, treating NaN as equal to itself.
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        (self.is_nan() && other.is_nan()) || self.compare(other) == Order::Equal
    }

    /// Returns the canonical lexical form, rendering it on first use.
    #[must_use]
    pub fn canonical(&self) -> &str {
        self.canonical.get_or_init(|| render(self.value))
    }
}

/// Validates the lexical grammar before handing the literal to `f64::from_str`,
/// which accepts forms (`inf`, `nan`, `infinity`) that are not allowed here.
fn check_grammar(s: &str) -> ParseResult<()> {
    let bytes = s.as_bytes();
    let mut pos = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }
    let mantissa_start = pos;
    let mut digits = 0;
    while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
        pos += 1;
        digits += 1;
    }
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
            pos += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return Err(ParseError::lexical(mantissa_start, "expected a number"));
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        pos += 1;
        if matches!(bytes.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        let exponent_start = pos;
        while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
            pos += 1;
        }
        if pos == exponent_start {
            return Err(ParseError::lexical(exponent_start, "exponent must have digits"));
        }
    }

    if pos < s.len() {
        return Err(ParseError::unexpected(
            pos,
            "digit, exponent or end of input",
            s[pos..].chars().next(),
        ));
    }
    Ok(())
}

/// Renders `d.dddE±n` with at least one fraction digit.
fn render(value: f64) -> String {
    if value.is_nan() {
        return NAN_TOKEN.to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { INF_TOKEN } else { NEG_INF_TOKEN }.to_string();
    }
    if value == 0.0 {
        return "0.0E0".to_string();
    }

    // `{:E}` yields the shortest round-tripping mantissa, e.g. `1.25E-3` or `1E2`.
    let formatted = format!("{value:E}");
    match formatted.split_once('E') {
        Some((mantissa, exponent)) if !mantissa.contains('.') => {
            format!("{mantissa}.0E{exponent}")
        }
        _ => formatted,
    }
}

impl PartialEq for Double {
    fn eq(&self, other: &Self) -> bool {
        self.value.to_bits() == other.value.to_bits()
    }
}

impl Eq for Double {}

impl Hash for Double {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.to_bits().hash(state);
    }
}

impl fmt::Display for Double {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical())
    }
}
