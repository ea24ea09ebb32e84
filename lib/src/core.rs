//! First-occurrence records and the index that assigns them.
//!
//! The [`OccurrenceIndex`] is an arena: a lookup from lemma to slot plus the
//! insertion-ordered records themselves. A slot is never reassigned, so the
//! order of `records` is the order of first appearance.

extern crate hashbrown;

use std::fmt::{Display, Formatter};

use hashbrown::HashMap;
use serde::Serialize;

use crate::util::Counter;

/// Location of one token occurrence. Ordered by page, then line, then word.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Position {
    page: usize,
    line: usize,
    #[serde(rename = "position")]
    word: usize,
}

impl Position {
    /// All components are 1-based.
    #[inline]
    pub fn new(page: usize, line: usize, word: usize) -> Self {
        debug_assert!(page >= 1 && line >= 1 && word >= 1);
        Self { page, line, word }
    }

    #[inline]
    pub fn page(&self) -> usize {
        self.page
    }

    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Index of the word within its line.
    #[inline]
    pub fn word(&self) -> usize {
        self.word
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "page {}, line {}, position {}",
            self.page, self.line, self.word
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FirstOccurrence {
    lemma: String,
    position: Position,
    sequence: usize,
}

impl FirstOccurrence {
    #[inline]
    pub fn new<S: Into<String>>(lemma: S, position: Position, sequence: usize) -> Self {
        Self {
            lemma: lemma.into(),
            position,
            sequence,
        }
    }

    #[inline]
    pub fn lemma(&self) -> &str {
        &self.lemma
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// 0-based rank of first appearance.
    #[inline]
    pub fn sequence(&self) -> usize {
        self.sequence
    }
}

#[derive(Debug, Default)]
pub struct OccurrenceIndex {
    lookup: HashMap<String, usize>,
    records: Vec<FirstOccurrence>,
    sequence: Counter<usize>,
}

impl OccurrenceIndex {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `lemma` at `position` unless it was seen before.
    ///
    /// Returns the new record, or `None` for a repeated lemma, in which case
    /// the index is left untouched.
    pub fn insert(&mut self, lemma: &str, position: Position) -> Option<&FirstOccurrence> {
        if self.lookup.contains_key(lemma) {
            return None;
        }

        let sequence = self.sequence.next();
        self.lookup.insert(lemma.to_string(), sequence);
        self.records
            .push(FirstOccurrence::new(lemma, position, sequence));

        self.records.last()
    }

    #[inline]
    pub fn get(&self, lemma: &str) -> Option<&FirstOccurrence> {
        self.lookup
            .get(lemma)
            .and_then(|&slot| self.records.get(slot))
    }

    #[inline]
    pub fn contains(&self, lemma: &str) -> bool {
        self.lookup.contains_key(lemma)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in order of first appearance.
    #[inline]
    pub fn records(&self) -> &[FirstOccurrence] {
        &self.records
    }

    #[inline]
    pub fn into_records(self) -> Vec<FirstOccurrence> {
        self.records
    }
}
