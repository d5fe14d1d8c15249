//! Parse, compare and canonicalize values of any supported kind.

use std::fmt;

use super::decimal::{parse_decimal, parse_integer};
use super::error::ParseResult;
use super::temporal::compare::{compare_durations, compare_temporals};
use super::temporal::parse::{parse_duration, parse_temporal};
use super::{AtomicKind, Decimal, Double, Duration, List, Order, Temporal, TypeKind};
use crate::error::{DatatypeError, DatatypeResult};

/// A parsed, immutable value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    Temporal(Temporal),
    Duration(Duration),
    Decimal(Decimal),
    Double(Double),
    List(List),
}

impl Value {
    /// Returns the datatype the value was parsed as.
    #[must_use]
    pub fn kind(&self) -> TypeKind {
        match self {
            Self::Temporal(temporal) => TypeKind::Atomic(temporal.kind().into()),
            Self::Duration(_) => TypeKind::Atomic(AtomicKind::Duration),
            Self::Decimal(decimal) if decimal.is_integer_subtype() => {
                TypeKind::Atomic(AtomicKind::Integer)
            }
            Self::Decimal(_) => TypeKind::Atomic(AtomicKind::Decimal),
            Self::Double(_) => TypeKind::Atomic(AtomicKind::Double),
            Self::List(list) => TypeKind::List(list.item_kind()),
        }
    }

    /// Returns the canonical lexical form.
    #[must_use]
    pub fn canonical(&self) -> &str {
        match self {
            Self::Temporal(temporal) => temporal.canonical(),
            Self::Duration(duration) => duration.canonical(),
            Self::Decimal(decimal) => decimal.canonical(),
            Self::Double(double) => double.canonical(),
            Self::List(list) => list.canonical(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical())
    }
}

/// Parses `lexical` as a value of `kind`.
///
/// ## Errors
/// Returns [`DatatypeError::ParseError`] if the literal (or any list item)
/// is malformed or out of range.
pub fn parse(kind: TypeKind, lexical: &str) -> DatatypeResult<Value> {
    let value = match kind {
        TypeKind::Atomic(atomic) => parse_atomic(atomic, lexical)?,
        TypeKind::List(item_kind) => Value::List(List::parse(lexical, item_kind, |token| {
            parse_atomic(item_kind, token)
        })?),
    };
    Ok(value)
}

/// Parses `lexical` as a single atomic value.
///
/// ## Errors
/// Returns the lexical, range or overflow error raised by the kind's parser.
pub fn parse_atomic(kind: AtomicKind, lexical: &str) -> ParseResult<Value> {
    if let Some(temporal_kind) = kind.temporal_kind() {
        return parse_temporal(temporal_kind, lexical).map(Value::Temporal);
    }
    match kind {
        AtomicKind::Duration => parse_duration(lexical).map(Value::Duration),
        AtomicKind::Integer => parse_integer(lexical).map(Value::Decimal),
        AtomicKind::Double => Double::parse(lexical).map(Value::Double),
        // Temporal kinds were dispatched above.
        _ => parse_decimal(lexical).map(Value::Decimal),
    }
}

/// Compares two values of compatible kinds.
///
/// `strict` only affects durations. Lists have no order: they are `Equal`
/// when pairwise equal and `Indeterminate` otherwise.
///
/// ## Errors
/// Returns [`DatatypeError::IncompatibleKinds`] when the values belong to
/// different datatypes. `decimal` and `integer` are compatible.
pub fn compare(a: &Value, b: &Value, strict: bool) -> DatatypeResult<Order> {
    let order = match (a, b) {
        (Value::Temporal(x), Value::Temporal(y)) if x.kind() == y.kind() => {
            compare_temporals(x, y)
        }
        (Value::Duration(x), Value::Duration(y)) => compare_durations(x, y, strict),
        (Value::Decimal(x), Value::Decimal(y)) => x.compare(y),
        (Value::Double(x), Value::Double(y)) => x.compare(y),
        (Value::List(x), Value::List(y)) if compatible(x.item_kind(), y.item_kind()) => {
            if x.equals(y) {
                Order::Equal
            } else {
                Order::Indeterminate
            }
        }
        _ => {
            return Err(DatatypeError::IncompatibleKinds {
                left: a.kind(),
                right: b.kind(),
            });
        }
    };
    Ok(order)
}

/// Returns the canonical lexical form of `value`.
#[must_use]
pub fn canonicalize(value: &Value) -> String {
    value.canonical().to_string()
}

/// Value equality.
///
/// Lists compare structurally and `NaN` equals itself; otherwise two values
/// are equal when [`compare`] says so. Values of incompatible kinds are
/// never equal.
#[must_use]
pub fn equals(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::List(x), Value::List(y)) => {
            compatible(x.item_kind(), y.item_kind()) && x.equals(y)
        }
        (Value::Double(x), Value::Double(y)) => x.equals(y),
        _ => matches!(compare(a, b, true), Ok(Order::Equal)),
    }
}

fn compatible(a: AtomicKind, b: AtomicKind) -> bool {
    a == b
        || matches!(
            (a, b),
            (AtomicKind::Decimal | AtomicKind::Integer, AtomicKind::Decimal | AtomicKind::Integer)
        )
}
