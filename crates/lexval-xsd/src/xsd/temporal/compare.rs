//! Partial-order comparison for temporal values and durations.
//!
//! Date/time values with and without a timezone are only comparable when the
//! local value, read at every offset between `-14:00` and `+14:00`, falls on
//! the same side of the other value. Durations are compared by adding them to
//! a fixed set of anchor instants that cover every month-length combination.

use lexval_core::constants::MAX_TIMEZONE_MINUTES;

use super::calendar::{add_duration, apply_offset, normalize_to_utc};
use super::core::{Duration, Fields, Temporal};
use crate::xsd::Order;

/// Instants a duration is added to before comparing.
const ANCHORS: [Fields; 4] = [
    Fields::date_time(1696, 9, 1, 0, 0, 0),
    Fields::date_time(1697, 2, 1, 0, 0, 0),
    Fields::date_time(1903, 3, 1, 0, 0, 0),
    Fields::date_time(1903, 7, 1, 0, 0, 0),
];

/// Compares two values of the same temporal kind.
///
/// Offsets are folded into UTC first. When exactly one side has no timezone,
/// the result is determinate only if it holds at every admissible offset.
#[must_use]
pub fn compare_temporals(a: &Temporal, b: &Temporal) -> Order {
    let a = normalize_to_utc(a);
    let b = normalize_to_utc(b);

    match (a.timezone().is_absent(), b.timezone().is_absent()) {
        (false, true) => bracket(a.fields(), b.fields()),
        (true, false) => bracket(b.fields(), a.fields()).reverse(),
        _ => Order::from(a.fields().cmp(b.fields())),
    }
}

/// Orders a UTC value against a local value of unknown offset.
fn bracket(utc: &Fields, local: &Fields) -> Order {
    let max = i64::from(MAX_TIMEZONE_MINUTES);
    // Read at +14:00 the local value is as early as it can be.
    let earliest = apply_offset(local, max);
    let latest = apply_offset(local, -max);

    if utc < &earliest {
        Order::Less
    } else if utc > &latest {
        Order::Greater
    } else {
        Order::Indeterminate
    }
}

/// Compares two durations.
///
/// Identical field tuples are `Equal`. Otherwise each duration is added to
/// every anchor; when the per-anchor results disagree the outcome is
/// `Indeterminate`, except that without `strict` a disagreement between
/// `Equal` and one direction resolves to that direction.
#[must_use]
pub fn compare_durations(a: &Duration, b: &Duration, strict: bool) -> Order {
    if a.fields() == b.fields() {
        return Order::Equal;
    }

    let mut result: Option<Order> = None;
    for anchor in &ANCHORS {
        let left = add_duration(anchor, a.fields());
        let right = add_duration(anchor, b.fields());
        let order = Order::from(left.cmp(&right));

        let combined = result.map_or(order, |previous| combine(previous, order, strict));
        if combined == Order::Indeterminate {
            tracing::trace!(anchor = ?anchor, "Duration order differs between anchors");
            return Order::Indeterminate;
        }
        result = Some(combined);
    }
    result.unwrap_or(Order::Indeterminate)
}

const fn combine(previous: Order, next: Order, strict: bool) -> Order {
    match (previous, next) {
        (Order::Less, Order::Less) => Order::Less,
        (Order::Equal, Order::Equal) => Order::Equal,
        (Order::Greater, Order::Greater) => Order::Greater,
        (Order::Equal, other) | (other, Order::Equal) if !strict => other,
        _ => Order::Indeterminate,
    }
}
