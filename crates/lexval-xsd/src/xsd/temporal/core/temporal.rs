use std::fmt;

use super::{Fields, Timezone};
use crate::xsd::cache::CanonicalCache;
use crate::xsd::temporal::build;

/// Which member of the date/time family a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemporalKind {
    /// `CCYY-MM-DDThh:mm:ss[.s+][tz]`
    DateTime,
    /// `CCYY-MM-DD[tz]`
    Date,
    /// `hh:mm:ss[.s+][tz]`
    Time,
    /// `CCYY-MM[tz]`
    GYearMonth,
    /// `CCYY[tz]`
    GYear,
    /// `--MM-DD[tz]`
    GMonthDay,
    /// `---DD[tz]`
    GDay,
    /// `--MM[tz]`
    GMonth,
}

impl TemporalKind {
    /// Returns whether the lexical form carries a time of day.
    #[must_use]
    pub const fn has_time(self) -> bool {
        matches!(self, Self::DateTime | Self::Time)
    }

    /// Returns whether an explicit timezone is folded into UTC at parse time.
    ///
    /// `dateTime` and `time` denote instants (or recurring instants), so their
    /// canonical form is in UTC. The remaining kinds keep the offset as written.
    #[must_use]
    pub const fn normalizes_timezone(self) -> bool {
        self.has_time()
    }
}

/// A parsed member of the date/time family.
///
/// Fields that the kind does not carry hold the reference values
/// 2000-01-15T00:00:00.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Temporal {
    kind: TemporalKind,
    fields: Fields,
    timezone: Timezone,
    canonical: CanonicalCache,
}

impl Temporal {
    pub(crate) fn new(kind: TemporalKind, fields: Fields, timezone: Timezone) -> Self {
        Self {
            kind,
            fields,
            timezone,
            canonical: CanonicalCache::default(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> TemporalKind {
        self.kind
    }

    #[must_use]
    pub const fn fields(&self) -> &Fields {
        &self.fields
    }

    #[must_use]
    pub const fn timezone(&self) -> Timezone {
        self.timezone
    }

    #[must_use]
    pub const fn year(&self) -> i64 {
        self.fields.year
    }

    #[must_use]
    pub const fn month(&self) -> i64 {
        self.fields.month
    }

    #[must_use]
    pub const fn day(&self) -> i64 {
        self.fields.day
    }

    #[must_use]
    pub const fn hour(&self) -> i64 {
        self.fields.hour
    }

    #[must_use]
    pub const fn minute(&self) -> i64 {
        self.fields.minute
    }

    #[must_use]
    pub const fn second(&self) -> i64 {
        self.fields.second
    }

    #[must_use]
    pub const fn nanosecond(&self) -> i64 {
        self.fields.nanosecond
    }

    /// Returns the canonical lexical form, rendering it on first use.
    #[must_use]
    pub fn canonical(&self) -> &str {
        self.canonical.get_or_init(|| build::format_temporal(self))
    }
}

impl fmt::Display for Temporal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical())
    }
}
