//! Lexical grammars for the date/time family and `duration`.
//!
//! Parsers are strict: digit counts and separators are fixed, there is no
//! whitespace trimming, and trailing input is rejected. Field values are
//! range-checked after the grammar matches, so `2003-13-01` is a range error
//! while `2003-1-01` is a lexical one.

mod datetime;
mod duration;
mod scanner;

pub use datetime::{
    parse_date, parse_date_time, parse_g_day, parse_g_month, parse_g_month_day, parse_g_year,
    parse_g_year_month, parse_temporal, parse_time,
};
pub use duration::parse_duration;
