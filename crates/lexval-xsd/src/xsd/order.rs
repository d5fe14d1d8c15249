//! Four-way order relation.

use std::cmp::Ordering;
use std::fmt;

/// Result of comparing two values under a partial order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    Less,
    Equal,
    Greater,
    /// The values are not comparable (e.g. `P1M` against `P30D`).
    Indeterminate,
}

impl Order {
    /// Swaps `Less` and `Greater`; `Equal` and `Indeterminate` are fixed points.
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Less => Self::Greater,
            Self::Greater => Self::Less,
            Self::Equal => Self::Equal,
            Self::Indeterminate => Self::Indeterminate,
        }
    }

    /// Returns whether the relation is one of less, equal or greater.
    #[must_use]
    pub const fn is_determinate(self) -> bool {
        !matches!(self, Self::Indeterminate)
    }

    /// Converts to a total ordering when determinate.
    #[must_use]
    pub const fn to_ordering(self) -> Option<Ordering> {
        match self {
            Self::Less => Some(Ordering::Less),
            Self::Equal => Some(Ordering::Equal),
            Self::Greater => Some(Ordering::Greater),
            Self::Indeterminate => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Less => "less",
            Self::Equal => "equal",
            Self::Greater => "greater",
            Self::Indeterminate => "indeterminate",
        }
    }
}

impl From<Ordering> for Order {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Self::Less,
            Ordering::Equal => Self::Equal,
            Ordering::Greater => Self::Greater,
        }
    }
}

impl From<Option<Ordering>> for Order {
    fn from(ordering: Option<Ordering>) -> Self {
        ordering.map_or(Self::Indeterminate, Self::from)
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_mirrors_determinate_results() {
        assert_eq!(Order::Less.reverse(), Order::Greater);
        assert_eq!(Order::Greater.reverse(), Order::Less);
        assert_eq!(Order::Equal.reverse(), Order::Equal);
        assert_eq!(Order::Indeterminate.reverse(), Order::Indeterminate);
    }

    #[test]
    fn from_partial_ordering() {
        assert_eq!(Order::from(1.0_f64.partial_cmp(&2.0)), Order::Less);
        assert_eq!(Order::from(f64::NAN.partial_cmp(&2.0)), Order::Indeterminate);
    }

    #[test]
    fn to_ordering_round_trip() {
        assert_eq!(Order::Equal.to_ordering(), Some(Ordering::Equal));
        assert_eq!(Order::Indeterminate.to_ordering(), None);
    }
}
