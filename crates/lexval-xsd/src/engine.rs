//! Settings-aware entry point over [`crate::xsd::value`].

use lexval_core::config::{DatatypeConfig, Settings};

use crate::error::{DatatypeError, DatatypeResult};
use crate::xsd::list::split_items;
use crate::xsd::{Order, TypeKind, Value, value};

/// Parses, compares and canonicalizes values under a [`DatatypeConfig`].
#[derive(Debug, Clone, Default)]
pub struct DatatypeEngine {
    config: DatatypeConfig,
}

impl DatatypeEngine {
    /// ## Errors
    /// Returns an error if the configuration is invalid.
    pub fn new(config: DatatypeConfig) -> DatatypeResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// ## Errors
    /// Returns an error if the datatype section of `settings` is invalid.
    pub fn from_settings(settings: &Settings) -> DatatypeResult<Self> {
        Self::new(settings.datatypes.clone())
    }

    #[must_use]
    pub const fn config(&self) -> &DatatypeConfig {
        &self.config
    }

    /// ## Summary
    /// Parses `lexical` as a value of `kind`.
    ///
    /// ## Errors
    /// Returns a parse error for malformed or out-of-range literals, and
    /// [`DatatypeError::ListTooLong`] when a list exceeds the configured limit.
    #[tracing::instrument(skip(self, lexical), fields(kind = %kind, len = lexical.len()))]
    pub fn parse(&self, kind: TypeKind, lexical: &str) -> DatatypeResult<Value> {
        if let (TypeKind::List(_), Some(limit)) = (kind, self.config.max_list_items) {
            let count = split_items(lexical).len();
            if count > limit {
                tracing::debug!(count, limit, "List literal rejected");
                return Err(DatatypeError::ListTooLong { count, limit });
            }
        }

        value::parse(kind, lexical).inspect_err(|err| {
            tracing::debug!(error = %err, "Literal rejected");
        })
    }

    /// ## Summary
    /// Compares two values using the configured duration strictness.
    ///
    /// ## Errors
    /// Returns [`DatatypeError::IncompatibleKinds`] for values of different
    /// datatypes.
    pub fn compare(&self, a: &Value, b: &Value) -> DatatypeResult<Order> {
        self.compare_with(a, b, self.config.strict_order)
    }

    /// ## Errors
    /// Returns [`DatatypeError::IncompatibleKinds`] for values of different
    /// datatypes.
    #[tracing::instrument(level = "trace", skip(self, a, b), fields(left = %a.kind(), right = %b.kind()))]
    pub fn compare_with(&self, a: &Value, b: &Value, strict: bool) -> DatatypeResult<Order> {
        let order = value::compare(a, b, strict)?;
        tracing::trace!(%order, "Compared values");
        Ok(order)
    }

    #[must_use]
    #[expect(
        clippy::unused_self,
        reason = "Engine methods share one receiver so callers can swap engines"
    )]
    pub fn canonicalize(&self, value: &Value) -> String {
        value::canonicalize(value)
    }

    #[must_use]
    #[expect(
        clippy::unused_self,
        reason = "Engine methods share one receiver so callers can swap engines"
    )]
    pub fn equals(&self, a: &Value, b: &Value) -> bool {
        value::equals(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xsd::AtomicKind;

    fn engine(strict_order: bool, max_list_items: Option<usize>) -> DatatypeEngine {
        DatatypeEngine::new(DatatypeConfig {
            strict_order,
            max_list_items,
        })
        .unwrap()
    }

    #[test]
    fn rejects_invalid_config() {
        let err = DatatypeEngine::new(DatatypeConfig {
            strict_order: true,
            max_list_items: Some(0),
        })
        .unwrap_err();
        assert!(matches!(err, DatatypeError::CoreError(_)));
    }

    #[test]
    fn from_default_settings() {
        let engine = DatatypeEngine::from_settings(&Settings::default()).unwrap();
        assert!(engine.config().strict_order);
        assert_eq!(engine.config().max_list_items, None);
    }

    #[test_log::test]
    fn strictness_follows_config() {
        let kind: TypeKind = "duration".parse().unwrap();
        let strict = engine(true, None);
        let lenient = engine(false, None);

        let a = strict.parse(kind, "P1Y").unwrap();
        let b = strict.parse(kind, "P365D").unwrap();
        assert_eq!(strict.compare(&a, &b).unwrap(), Order::Indeterminate);
        assert_eq!(lenient.compare(&a, &b).unwrap(), Order::Greater);
        assert_eq!(lenient.compare_with(&a, &b, true).unwrap(), Order::Indeterminate);
    }

    #[test_log::test]
    fn list_limit() {
        let engine = engine(true, Some(2));
        let kind = TypeKind::List(AtomicKind::Decimal);
        assert!(engine.parse(kind, " 1  2 ").is_ok());
        assert!(matches!(
            engine.parse(kind, "1 2 3").unwrap_err(),
            DatatypeError::ListTooLong { count: 3, limit: 2 }
        ));
        // Atomic literals are not affected by the limit.
        assert!(engine.parse(TypeKind::Atomic(AtomicKind::Decimal), "1").is_ok());
    }

    #[test_log::test]
    fn parse_errors_pass_through() {
        let engine = DatatypeEngine::default();
        let err = engine
            .parse(TypeKind::Atomic(AtomicKind::Time), "25:00:00")
            .unwrap_err();
        assert!(matches!(err, DatatypeError::ParseError(_)));
    }

    #[test]
    fn canonicalize_and_equals() {
        let engine = DatatypeEngine::default();
        let a = engine
            .parse(TypeKind::Atomic(AtomicKind::Time), "13:20:00-05:00")
            .unwrap();
        let b = engine
            .parse(TypeKind::Atomic(AtomicKind::Time), "18:20:00Z")
            .unwrap();
        assert_eq!(engine.canonicalize(&a), "18:20:00.0Z");
        assert!(engine.equals(&a, &b));
    }
}
