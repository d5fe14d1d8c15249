use std::fmt;

/// Timezone component of a date/time value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Timezone {
    /// No timezone was written.
    #[default]
    Absent,
    /// `Z`, or a `+00:00`/`-00:00` offset.
    Utc,
    /// Non-zero offset from UTC in minutes, within `-840..=840`.
    Offset(i16),
}

impl Timezone {
    /// Creates a timezone from an offset in minutes, folding zero into `Utc`.
    #[must_use]
    pub const fn from_offset_minutes(minutes: i16) -> Self {
        if minutes == 0 {
            Self::Utc
        } else {
            Self::Offset(minutes)
        }
    }

    /// Returns the offset in minutes, or `None` when absent.
    #[must_use]
    pub const fn offset_minutes(self) -> Option<i16> {
        match self {
            Self::Absent => None,
            Self::Utc => Some(0),
            Self::Offset(minutes) => Some(minutes),
        }
    }

    #[must_use]
    pub const fn is_absent(self) -> bool {
        matches!(self, Self::Absent)
    }
}

/// Formats the lexical suffix: empty, `Z`, or `±hh:mm`.
impl fmt::Display for Timezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Absent => Ok(()),
            Self::Utc => f.write_str("Z"),
            Self::Offset(minutes) => {
                let sign = if minutes < 0 { '-' } else { '+' };
                let magnitude = minutes.unsigned_abs();
                write!(f, "{sign}{:02}:{:02}", magnitude / 60, magnitude % 60)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_offset_is_utc() {
        assert_eq!(Timezone::from_offset_minutes(0), Timezone::Utc);
        assert_eq!(Timezone::from_offset_minutes(-300), Timezone::Offset(-300));
    }

    #[test]
    fn display_suffix() {
        assert_eq!(Timezone::Absent.to_string(), "");
        assert_eq!(Timezone::Utc.to_string(), "Z");
        assert_eq!(Timezone::Offset(330).to_string(), "+05:30");
        assert_eq!(Timezone::Offset(-840).to_string(), "-14:00");
    }

    #[test]
    fn offset_minutes() {
        assert_eq!(Timezone::Absent.offset_minutes(), None);
        assert_eq!(Timezone::Utc.offset_minutes(), Some(0));
        assert_eq!(Timezone::Offset(60).offset_minutes(), Some(60));
    }
}
