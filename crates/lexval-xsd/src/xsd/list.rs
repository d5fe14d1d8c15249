//! Whitespace-separated lists of atomic values (XML Schema Part 2 §2.5.1.2).

use std::fmt;

use super::cache::CanonicalCache;
use super::error::ParseResult;
use super::value::{self, Value};
use super::AtomicKind;

/// A parsed list. Items all share `item_kind`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct List {
    item_kind: AtomicKind,
    items: Vec<Value>,
    canonical: CanonicalCache,
}

/// XML whitespace: space, tab, carriage return and line feed.
const fn is_xml_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Splits `text` on runs of XML whitespace, returning each token with its
/// byte offset. Leading and trailing whitespace yields no empty tokens.
#[must_use]
pub fn split_items(text: &str) -> Vec<(usize, &str)> {
    let mut items = Vec::new();
    let mut start = None;

    for (index, c) in text.char_indices() {
        match (is_xml_whitespace(c), start) {
            (true, Some(begin)) => {
                items.push((begin, &text[begin..index]));
                start = None;
            }
            (false, None) => start = Some(index),
            _ => {}
        }
    }
    if let Some(begin) = start {
        items.push((begin, &text[begin..]));
    }
    items
}

impl List {
    /// Parses every token of `text` with `parse_item`.
    ///
    /// The first failing item aborts the parse; its error position is
    /// reported relative to the whole list literal.
    ///
    /// ## Errors
    /// Returns the first item-level parse error.
    pub fn parse<F>(text: &str, item_kind: AtomicKind, parse_item: F) -> ParseResult<Self>
    where
        F: Fn(&str) -> ParseResult<Value>,
    {
        let items = split_items(text)
            .into_iter()
            .map(|(offset, token)| parse_item(token).map_err(|err| err.offset_by(offset)))
            .collect::<ParseResult<Vec<_>>>()?;
        Ok(Self::from_items(item_kind, items))
    }

    pub(crate) fn from_items(item_kind: AtomicKind, items: Vec<Value>) -> Self {
        Self {
            item_kind,
            items,
            canonical: CanonicalCache::default(),
        }
    }

    #[must_use]
    pub const fn item_kind(&self) -> AtomicKind {
        self.item_kind
    }

    #[must_use]
    pub fn items(&self) -> &[Value] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Same length and pairwise equal items.
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        self.items.len() == other.items.len()
            && self
                .items
                .iter()
                .zip(&other.items)
                .all(|(a, b)| value::equals(a, b))
    }

    /// Item canonical forms joined with a single space.
    #[must_use]
    pub fn canonical(&self) -> &str {
        self.canonical.get_or_init(|| {
            self.items
                .iter()
                .map(Value::canonical)
                .collect::<Vec<_>>()
                .join(" ")
        })
    }
}

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xsd::error::ParseErrorKind;
    use crate::xsd::value::parse_atomic;

    fn decimals(text: &str) -> ParseResult<List> {
        List::parse(text, AtomicKind::Decimal, |token| {
            parse_atomic(AtomicKind::Decimal, token)
        })
    }

    #[test]
    fn split_on_whitespace_runs() {
        assert_eq!(
            split_items("  1\t2.0\r\n 3 "),
            vec![(2, "1"), (4, "2.0"), (10, "3")]
        );
        assert!(split_items("").is_empty());
        assert!(split_items(" \n\t").is_empty());
    }

    #[test]
    fn no_break_space_is_not_a_separator() {
        assert_eq!(split_items("1\u{a0}2"), vec![(0, "1\u{a0}2")]);
    }

    #[test]
    fn parse_and_canonicalize() {
        let list = decimals("1 2.0 3").unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list.canonical(), "1 2.0 3");

        let list = decimals("\n 01.50   -0 ").unwrap();
        assert_eq!(list.canonical(), "1.5 0");
    }

    #[test]
    fn empty_list() {
        let list = decimals("   ").unwrap();
        assert!(list.is_empty());
        assert_eq!(list.canonical(), "");
    }

    #[test]
    fn first_error_is_reported_with_list_offset() {
        let err = decimals("1 2 x3 y").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::Lexical);
        assert_eq!(err.position, 4);
    }

    #[test]
    fn pairwise_equality() {
        let a = decimals("1 2.0 3").unwrap();
        let b = decimals("1.0 2 3.000").unwrap();
        let c = decimals("1 2").unwrap();
        assert!(a.equals(&b));
        assert!(!a.equals(&c));
        assert!(!c.equals(&a));
    }
}
