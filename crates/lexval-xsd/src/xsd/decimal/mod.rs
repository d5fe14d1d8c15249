//! Exact `decimal` and `integer` values (XML Schema Part 2 §3.2.3, §3.3.13).
//!
//! Values are kept as digit strings. Ordering and canonicalization only need
//! digit comparison, so no arbitrary-precision arithmetic is involved and no
//! literal is too long to represent.

mod parse;

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

pub use parse::{parse_decimal, parse_integer};

use super::Order;
use super::cache::CanonicalCache;

/// An exact decimal number.
///
/// `integer_digits` has no leading zeros and `fraction_digits` no trailing
/// zeros; zero has a sign of `0` and both strings empty.
#[derive(Debug, Clone)]
pub struct Decimal {
    sign: i8,
    integer_digits: String,
    fraction_digits: String,
    integer_subtype: bool,
    /// Written without a decimal point; the canonical form omits it too.
    integer_form: bool,
    canonical: CanonicalCache,
}

impl Decimal {
    pub(crate) fn new(
        negative: bool,
        integer_digits: &str,
        fraction_digits: &str,
        integer_subtype: bool,
        integer_form: bool,
    ) -> Self {
        let integer_digits = integer_digits.trim_start_matches('0');
        let fraction_digits = fraction_digits.trim_end_matches('0');
        let sign = if integer_digits.is_empty() && fraction_digits.is_empty() {
            0
        } else if negative {
            -1
        } else {
            1
        };
        Self {
            sign,
            integer_digits: integer_digits.to_string(),
            fraction_digits: fraction_digits.to_string(),
            integer_subtype,
            integer_form: integer_subtype || integer_form,
            canonical: CanonicalCache::default(),
        }
    }

    /// Returns `-1`, `0` or `1`.
    #[must_use]
    pub const fn signum(&self) -> i8 {
        self.sign
    }

    #[must_use]
    pub fn integer_digits(&self) -> &str {
        &self.integer_digits
    }

    #[must_use]
    pub fn fraction_digits(&self) -> &str {
        &self.fraction_digits
    }

    /// Returns whether the value was parsed as an `integer`.
    #[must_use]
    pub const fn is_integer_subtype(&self) -> bool {
        self.integer_subtype
    }

    /// Compares by numeric value.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Order {
        Order::from(self.cmp_value(other))
    }

    fn cmp_value(&self, other: &Self) -> Ordering {
        match self.sign.cmp(&other.sign) {
            Ordering::Equal => {}
            unequal => return unequal,
        }
        let magnitude = self
            .integer_digits
            .len()
            .cmp(&other.integer_digits.len())
            .then_with(|| self.integer_digits.cmp(&other.integer_digits))
            // Trailing zeros are stripped, so plain string order pads with zeros.
            .then_with(|| self.fraction_digits.cmp(&other.fraction_digits));
        if self.sign < 0 {
            magnitude.reverse()
        } else {
            magnitude
        }
    }

    /// Returns the canonical lexical form, rendering it on first use.
    #[must_use]
    pub fn canonical(&self) -> &str {
        self.canonical.get_or_init(|| self.render())
    }

    fn render(&self) -> String {
        if self.sign == 0 {
            return if self.integer_form { "0" } else { "0.0" }.to_string();
        }
        let mut out = String::with_capacity(self.integer_digits.len() + self.fraction_digits.len() + 3);
        if self.sign < 0 {
            out.push('-');
        }
        if self.integer_digits.is_empty() {
            out.push('0');
        } else {
            out.push_str(&self.integer_digits);
        }
        if !self.integer_form {
            out.push('.');
            if self.fraction_digits.is_empty() {
                out.push('0');
            } else {
                out.push_str(&self.fraction_digits);
            }
        }
        out
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.sign == other.sign
            && self.integer_digits == other.integer_digits
            && self.fraction_digits == other.fraction_digits
    }
}

impl Eq for Decimal {}

impl Hash for Decimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sign.hash(state);
        self.integer_digits.hash(state);
        self.fraction_digits.hash(state);
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical())
    }
}
