use thiserror::Error;

use crate::xsd::{ParseError, TypeKind};

/// Datatype engine errors
#[derive(Error, Debug)]
pub enum DatatypeError {
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),

    #[error("Cannot compare a {left} value with a {right} value")]
    IncompatibleKinds { left: TypeKind, right: TypeKind },

    #[error("List has {count} items, the configured limit is {limit}")]
    ListTooLong { count: usize, limit: usize },

    #[error("Unknown datatype: {0}")]
    UnknownKind(String),

    #[error(transparent)]
    CoreError(#[from] lexval_core::error::CoreError),
}

pub type DatatypeResult<T> = std::result::Result<T, DatatypeError>;
