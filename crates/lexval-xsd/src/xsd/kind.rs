//! Datatype identifiers.

use std::fmt;
use std::str::FromStr;

use super::temporal::TemporalKind;
use crate::error::DatatypeError;

/// A built-in atomic datatype supported by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AtomicKind {
    DateTime,
    Date,
    Time,
    GYearMonth,
    GYear,
    GMonthDay,
    GDay,
    GMonth,
    Duration,
    Decimal,
    Integer,
    Double,
}

impl AtomicKind {
    /// All supported atomic kinds.
    pub const ALL: [Self; 12] = [
        Self::DateTime,
        Self::Date,
        Self::Time,
        Self::GYearMonth,
        Self::GYear,
        Self::GMonthDay,
        Self::GDay,
        Self::GMonth,
        Self::Duration,
        Self::Decimal,
        Self::Integer,
        Self::Double,
    ];

    /// Returns the XML Schema local name of the datatype.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DateTime => "dateTime",
            Self::Date => "date",
            Self::Time => "time",
            Self::GYearMonth => "gYearMonth",
            Self::GYear => "gYear",
            Self::GMonthDay => "gMonthDay",
            Self::GDay => "gDay",
            Self::GMonth => "gMonth",
            Self::Duration => "duration",
            Self::Decimal => "decimal",
            Self::Integer => "integer",
            Self::Double => "double",
        }
    }

    /// Returns the temporal kind for date/time datatypes.
    #[must_use]
    pub const fn temporal_kind(self) -> Option<TemporalKind> {
        match self {
            Self::DateTime => Some(TemporalKind::DateTime),
            Self::Date => Some(TemporalKind::Date),
            Self::Time => Some(TemporalKind::Time),
            Self::GYearMonth => Some(TemporalKind::GYearMonth),
            Self::GYear => Some(TemporalKind::GYear),
            Self::GMonthDay => Some(TemporalKind::GMonthDay),
            Self::GDay => Some(TemporalKind::GDay),
            Self::GMonth => Some(TemporalKind::GMonth),
            Self::Duration | Self::Decimal | Self::Integer | Self::Double => None,
        }
    }
}

impl From<TemporalKind> for AtomicKind {
    fn from(kind: TemporalKind) -> Self {
        match kind {
            TemporalKind::DateTime => Self::DateTime,
            TemporalKind::Date => Self::Date,
            TemporalKind::Time => Self::Time,
            TemporalKind::GYearMonth => Self::GYearMonth,
            TemporalKind::GYear => Self::GYear,
            TemporalKind::GMonthDay => Self::GMonthDay,
            TemporalKind::GDay => Self::GDay,
            TemporalKind::GMonth => Self::GMonth,
        }
    }
}

impl fmt::Display for AtomicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AtomicKind {
    type Err = DatatypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| DatatypeError::UnknownKind(s.to_string()))
    }
}

/// The datatype a literal is parsed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Atomic(AtomicKind),
    /// Whitespace-separated list whose items are of the given kind.
    List(AtomicKind),
}

impl TypeKind {
    /// Returns the atomic kind of the value or of the list items.
    #[must_use]
    pub const fn item_kind(self) -> AtomicKind {
        match self {
            Self::Atomic(kind) | Self::List(kind) => kind,
        }
    }

    #[must_use]
    pub const fn is_list(self) -> bool {
        matches!(self, Self::List(_))
    }
}

impl From<AtomicKind> for TypeKind {
    fn from(kind: AtomicKind) -> Self {
        Self::Atomic(kind)
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Atomic(kind) => write!(f, "{kind}"),
            Self::List(kind) => write!(f, "list({kind})"),
        }
    }
}

impl FromStr for TypeKind {
    type Err = DatatypeError;

    /// Parses `decimal` style names and `list(decimal)` list forms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(inner) = s.strip_prefix("list(").and_then(|r| r.strip_suffix(')')) {
            return inner
                .parse::<AtomicKind>()
                .map(Self::List)
                .map_err(|_err| DatatypeError::UnknownKind(s.to_string()));
        }
        s.parse().map(Self::Atomic)
    }
}
