//! XML Schema Part 2 datatypes.
//!
//! ## Submodules
//!
//! - [`temporal`] - `dateTime`, `date`, `time`, the partial Gregorian kinds and `duration`
//! - [`decimal`] - exact `decimal` and `integer` values
//! - [`double`] - IEEE-754 `double` values
//! - [`list`] - whitespace-separated lists of atomic values
//! - [`value`] - parse/compare/canonicalize over any supported kind

mod cache;
pub mod decimal;
pub mod double;
mod error;
mod kind;
pub mod list;
mod order;
pub mod temporal;
pub mod value;

#[cfg(test)]
mod tests;

pub use decimal::Decimal;
pub use double::Double;
pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use kind::{AtomicKind, TypeKind};
pub use list::List;
pub use order::Order;
pub use temporal::{Duration, Fields, Temporal, TemporalKind, Timezone};
pub use value::Value;
