//! Calendar field record shared by date/time values and durations.

/// Signed calendar fields.
///
/// Field order is significant: the derived `Ord` compares lexicographically
/// from `year` down to `nanosecond`, which is exactly the order relation on
/// two instants expressed in the same timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Fields {
    pub year: i64,
    pub month: i64,
    pub day: i64,
    pub hour: i64,
    pub minute: i64,
    pub second: i64,
    /// Fractional second in nanoseconds.
    pub nanosecond: i64,
}

impl Fields {
    /// Builds a whole-second instant.
    #[must_use]
    pub const fn date_time(
        year: i64,
        month: i64,
        day: i64,
        hour: i64,
        minute: i64,
        second: i64,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            nanosecond: 0,
        }
    }

    /// Returns whether every field is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.year == 0
            && self.month == 0
            && self.day == 0
            && self.hour == 0
            && self.minute == 0
            && self.second == 0
            && self.nanosecond == 0
    }

    /// Returns whether any field is negative.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.year < 0
            || self.month < 0
            || self.day < 0
            || self.hour < 0
            || self.minute < 0
            || self.second < 0
            || self.nanosecond < 0
    }

    /// Negates every field.
    #[must_use]
    pub const fn negated(&self) -> Self {
        Self {
            year: -self.year,
            month: -self.month,
            day: -self.day,
            hour: -self.hour,
            minute: -self.minute,
            second: -self.second,
            nanosecond: -self.nanosecond,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_lexicographic_from_year() {
        let earlier = Fields::date_time(1999, 12, 31, 23, 59, 59);
        let later = Fields::date_time(2000, 1, 1, 0, 0, 0);
        assert!(earlier < later);

        let mut fractional = earlier;
        fractional.nanosecond = 1;
        assert!(earlier < fractional);
    }

    #[test]
    fn negation_and_sign() {
        let fields = Fields::date_time(1, 2, 0, 0, 0, 3);
        assert!(!fields.is_negative());
        assert!(fields.negated().is_negative());
        assert!(Fields::default().is_zero());
    }
}
