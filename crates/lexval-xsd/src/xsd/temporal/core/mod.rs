//! Temporal value types.
//!
//! Values are immutable once parsed. Calendar fields live in a named
//! [`Fields`] record and timezones in the tagged [`Timezone`] enum.

mod duration;
mod fields;
mod temporal;
mod timezone;

pub use duration::Duration;
pub use fields::Fields;
pub use temporal::{Temporal, TemporalKind};
pub use timezone::Timezone;
