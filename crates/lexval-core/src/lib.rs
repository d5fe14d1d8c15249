//! Shared building blocks for the `lexval` workspace: settings, the core
//! error type, logging setup and lexical constants used by the datatype engine.

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
