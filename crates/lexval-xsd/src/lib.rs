//! Validation, ordering and canonicalization of XML Schema scalar literals.
//!
//! The engine parses the lexical forms of the date/time family, `duration`,
//! `decimal`, `integer`, `double` and whitespace-separated lists of those into
//! immutable values. Values can then be compared under the schema's partial
//! order (which may be indeterminate) or rendered back to their canonical
//! lexical form.
//!
//! ## Usage
//!
//! ```rust
//! use lexval_xsd::xsd::{AtomicKind, Order, TypeKind, value};
//!
//! let a = value::parse(TypeKind::Atomic(AtomicKind::Duration), "P1Y").unwrap();
//! let b = value::parse(TypeKind::Atomic(AtomicKind::Duration), "P365D").unwrap();
//! assert_eq!(value::compare(&a, &b, true).unwrap(), Order::Indeterminate);
//!
//! let dt = value::parse(TypeKind::Atomic(AtomicKind::DateTime), "2003-06-16T00:00:00Z").unwrap();
//! assert_eq!(value::canonicalize(&dt), "2003-06-16T00:00:00.0Z");
//! ```

pub mod engine;
pub mod error;
pub mod xsd;

pub use engine::DatatypeEngine;
pub use error::{DatatypeError, DatatypeResult};
