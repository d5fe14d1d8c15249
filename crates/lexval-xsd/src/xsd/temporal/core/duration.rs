use std::fmt;

use super::Fields;
use crate::xsd::cache::CanonicalCache;
use crate::xsd::temporal::build;

/// A parsed `duration`.
///
/// Every field carries the duration's sign. Months and days are independent
/// deltas, so `P1M` and `P30D` are different values that do not compare.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Duration {
    fields: Fields,
    canonical: CanonicalCache,
}

impl Duration {
    pub(crate) fn new(fields: Fields) -> Self {
        Self {
            fields,
            canonical: CanonicalCache::default(),
        }
    }

    #[must_use]
    pub const fn fields(&self) -> &Fields {
        &self.fields
    }

    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.fields.is_negative()
    }

    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.fields.is_zero()
    }

    #[must_use]
    pub const fn years(&self) -> i64 {
        self.fields.year
    }

    #[must_use]
    pub const fn months(&self) -> i64 {
        self.fields.month
    }

    #[must_use]
    pub const fn days(&self) -> i64 {
        self.fields.day
    }

    #[must_use]
    pub const fn hours(&self) -> i64 {
        self.fields.hour
    }

    #[must_use]
    pub const fn minutes(&self) -> i64 {
        self.fields.minute
    }

    #[must_use]
    pub const fn seconds(&self) -> i64 {
        self.fields.second
    }

    #[must_use]
    pub const fn nanoseconds(&self) -> i64 {
        self.fields.nanosecond
    }

    /// Returns the canonical lexical form, rendering it on first use.
    #[must_use]
    pub fn canonical(&self) -> &str {
        self.canonical.get_or_init(|| build::format_duration(self))
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical())
    }
}
