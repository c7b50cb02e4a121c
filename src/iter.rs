// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Iterators over successive keys.

use std::iter::FusedIterator;

use crate::generator::Generator;

/// Keys after a starting key, in ascending order. Never ends.
pub struct Ascending<'a> {
    generator: &'a Generator,
    current: String,
}

impl<'a> Ascending<'a> {
    pub(crate) fn new(generator: &'a Generator, from: &str) -> Ascending<'a> {
        return Ascending {
            generator,
            current: from.to_string(),
        };
    }
}

impl Iterator for Ascending<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.current = self.generator.next(&self.current);
        return Some(self.current.clone());
    }
}

impl FusedIterator for Ascending<'_> {}

/// Keys before a starting key, in descending order.
///
/// Ends at the first key `prev` cannot go below, or at once if the starting
/// key has a foreign symbol.
pub struct Descending<'a> {
    generator: &'a Generator,
    current: Option<String>,
}

impl<'a> Descending<'a> {
    pub(crate) fn new(generator: &'a Generator, from: &str) -> Descending<'a> {
        return Descending {
            generator,
            current: Some(from.to_string()),
        };
    }
}

impl Iterator for Descending<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let current = self.current.take()?;
        let prev = self.generator.prev(&current).ok()?;
        self.current = Some(prev.clone());
        return Some(prev);
    }
}

impl FusedIterator for Descending<'_> {}
