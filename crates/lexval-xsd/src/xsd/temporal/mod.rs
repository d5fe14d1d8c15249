//! The date/time family and `duration` (XML Schema Part 2 §3.2.6–3.2.14).
//!
//! ## Submodules
//!
//! - [`core`] - value types (`Temporal`, `Duration`, `Timezone`, `Fields`)
//! - [`calendar`] - leap years, month lengths and carry propagation
//! - [`parse`] - lexical grammars
//! - [`build`] - canonical lexical forms
//! - [`compare`] - partial-order comparison, including duration anchors

pub mod build;
pub mod calendar;
mod chrono_interop;
pub mod compare;
pub mod core;
pub mod parse;

pub use self::core::{Duration, Fields, Temporal, TemporalKind, Timezone};
