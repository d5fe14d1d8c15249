//! Cross-module scenarios over the value layer.
