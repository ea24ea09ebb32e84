use std::fmt::Debug;

use tracing::{debug, info};

use crate::{
    core::{FirstOccurrence, OccurrenceIndex, Position},
    document::{Page, PageSource},
    normalizer::{LemmaNormalizer, Lemmatize},
    observer::Observer,
    tokenizer::TextTokenizer,
    util::Counter,
};

/// Tracks the first occurrence of every lemma in a document.
///
/// Pages must be fed in document order. Stopping between two calls to
/// [`FirstOccurrenceTracker::feed_page`] leaves a consistent result for the
/// pages seen so far.
pub struct FirstOccurrenceTracker<'t, L: Lemmatize, T: TextTokenizer> {
    tokenizer: &'t T,
    normalizer: &'t mut LemmaNormalizer<L>,
    observer: &'t mut dyn Observer,
    index: OccurrenceIndex,
    pages: Counter<usize>,
    tokens: Counter<usize>,
    skipped: Vec<usize>,
}

impl<'t, L: Lemmatize, T: TextTokenizer> FirstOccurrenceTracker<'t, L, T> {
    pub fn new(
        tokenizer: &'t T,
        normalizer: &'t mut LemmaNormalizer<L>,
        observer: &'t mut dyn Observer,
    ) -> Self {
        Self {
            tokenizer,
            normalizer,
            observer,
            index: OccurrenceIndex::new(),
            pages: Counter::default(),
            tokens: Counter::default(),
            skipped: Vec::new(),
        }
    }

    /// Feeds the next page. `None` or blank text skips the page.
    pub fn feed_page(&mut self, text: Option<&str>) {
        self.pages.increment();
        let number = *self.pages;

        let text = match text {
            Some(text) if !text.trim().is_empty() => text,
            _ => {
                info!(page = number, "no text content, skipping");
                self.skipped.push(number);
                self.observer.on_empty_page(number);
                return;
            }
        };

        let page = Page::new(number, text);
        let tokenizer = self.tokenizer;

        debug!(page = number, lines = page.lines().count(), "processing page");

        for (line, content) in page.lines() {
            for (token, word) in tokenizer.tokenize(content).zip(1..) {
                self.tokens.increment();

                let position = Position::new(number, line, word);
                let lemma = self.normalizer.normalize(&token);

                if let Some(record) = self.index.insert(lemma, position) {
                    debug!(lemma = record.lemma(), %position, "new lemma");
                    self.observer.on_new_lemma(record);
                }
            }
        }
    }

    /// Feeds every page of `source` and finishes.
    pub fn track(mut self, source: &dyn PageSource) -> Occurrences {
        source.pages().for_each(|page| self.feed_page(page));
        self.finish()
    }

    pub fn finish(self) -> Occurrences {
        let occurrences = Occurrences {
            index: self.index,
            pages: *self.pages,
            tokens: *self.tokens,
            skipped: self.skipped,
        };

        info!(
            pages = occurrences.pages,
            tokens = occurrences.tokens,
            lemmas = occurrences.len(),
            "document processed"
        );

        occurrences
    }
}

impl<L: Lemmatize, T: TextTokenizer + Debug> Debug for FirstOccurrenceTracker<'_, L, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FirstOccurrenceTracker")
            .field("tokenizer", &self.tokenizer)
            .field("index", &self.index)
            .field("pages", &self.pages)
            .field("skipped", &self.skipped)
            .finish()
    }
}

/// The tracked lemmas of one run, in order of first appearance.
#[derive(Debug)]
pub struct Occurrences {
    index: OccurrenceIndex,
    pages: usize,
    tokens: usize,
    skipped: Vec<usize>,
}

impl Occurrences {
    #[inline]
    pub fn records(&self) -> &[FirstOccurrence] {
        self.index.records()
    }

    #[inline]
    pub fn get(&self, lemma: &str) -> Option<&FirstOccurrence> {
        self.index.get(lemma)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Number of pages fed, including skipped ones.
    #[inline]
    pub fn pages(&self) -> usize {
        self.pages
    }

    /// Number of tokens seen, repeats included.
    #[inline]
    pub fn tokens(&self) -> usize {
        self.tokens
    }

    /// Pages that had no extractable text.
    #[inline]
    pub fn skipped_pages(&self) -> &[usize] {
        &self.skipped
    }
}

impl IntoIterator for Occurrences {
    type Item = FirstOccurrence;
    type IntoIter = std::vec::IntoIter<FirstOccurrence>;

    fn into_iter(self) -> Self::IntoIter {
        self.index.into_records().into_iter()
    }
}
