//! Lexical tokens and calendar constants shared across crates.

/// Lexical token for positive infinity.
pub const INF_TOKEN: &str = "INF";
/// Lexical token for negative infinity.
pub const NEG_INF_TOKEN: &str = const_str::concat!("-", INF_TOKEN);
/// Lexical token for not-a-number.
pub const NAN_TOKEN: &str = "NaN";

/// Largest timezone offset magnitude, in minutes (14:00).
pub const MAX_TIMEZONE_MINUTES: i16 = 14 * 60;

/// Reference year used for fields a partial date/time kind does not carry.
pub const REFERENCE_YEAR: i64 = 2000;
/// Reference month used for fields a partial date/time kind does not carry.
pub const REFERENCE_MONTH: i64 = 1;
/// Reference day used for fields a partial date/time kind does not carry.
pub const REFERENCE_DAY: i64 = 15;

/// Prefix for environment variables read by [`crate::config::Settings::load`].
pub const ENV_PREFIX: &str = "LEXVAL";
/// Optional settings file read by [`crate::config::Settings::load`].
pub const CONFIG_FILE: &str = "lexval.toml";
