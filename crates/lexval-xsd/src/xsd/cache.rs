//! Compute-once storage for canonical lexical forms.

use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

/// Lazily populated canonical string.
///
/// The cache never takes part in equality or hashing: two values are the same
/// whether or not either has been rendered yet.
#[derive(Debug, Clone, Default)]
pub(crate) struct CanonicalCache(OnceLock<String>);

impl CanonicalCache {
    pub(crate) fn get_or_init(&self, render: impl FnOnce() -> String) -> &str {
        self.0.get_or_init(render)
    }
}

impl PartialEq for CanonicalCache {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for CanonicalCache {}

impl Hash for CanonicalCache {
    fn hash<H: Hasher>(&self, _state: &mut H) {}
}
