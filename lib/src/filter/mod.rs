//! Set difference against a reference vocabulary.

use hashbrown::HashSet;
use serde::Deserialize;
use tracing::debug;

use crate::{
    core::FirstOccurrence,
    error::{Error, VocabularyError},
};

/// Name of the field holding the vocabulary words.
pub const WORDS_FIELD: &str = "words";

/// Known lemmas, lowercased once at load time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Vocabulary(HashSet<String>);

#[derive(Deserialize)]
struct Source {
    words: Option<Vec<String>>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON object with a `words` array of strings.
    ///
    /// A missing `words` field is an error: an empty vocabulary would report
    /// every lemma as novel. An explicit empty array is accepted.
    pub fn from_json(text: &str) -> Result<Self, Error> {
        let source = serde_json::from_str::<Source>(text)
            .map_err(|error| VocabularyError::Malformed(error.to_string()))?;

        let words = source
            .words
            .ok_or(VocabularyError::MissingField(WORDS_FIELD))?;

        let vocabulary = words.into_iter().collect::<Self>();
        debug!(words = vocabulary.len(), "vocabulary loaded");

        Ok(vocabulary)
    }

    #[inline]
    pub fn contains(&self, lemma: &str) -> bool {
        self.0.contains(lemma)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|word| word.as_ref().to_lowercase())
                .collect(),
        )
    }
}

/// Keeps the records whose lemma is not in the vocabulary, in order.
#[derive(Clone, Copy, Debug)]
pub struct NoveltyFilter<'v> {
    vocabulary: &'v Vocabulary,
}

impl<'v> NoveltyFilter<'v> {
    pub fn new(vocabulary: &'v Vocabulary) -> Self {
        Self { vocabulary }
    }

    #[inline]
    pub fn is_novel(&self, lemma: &str) -> bool {
        !self.vocabulary.contains(lemma)
    }

    pub fn filter<I>(&self, records: I) -> Vec<FirstOccurrence>
    where
        I: IntoIterator<Item = FirstOccurrence>,
    {
        records
            .into_iter()
            .filter(|record| self.is_novel(record.lemma()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        core::{FirstOccurrence, Position},
        error::{Error, VocabularyError},
        filter::{NoveltyFilter, Vocabulary},
    };

    fn records() -> Vec<FirstOccurrence> {
        vec![
            FirstOccurrence::new("run", Position::new(1, 1, 1), 0),
            FirstOccurrence::new("runner", Position::new(1, 1, 2), 1),
            FirstOccurrence::new("track", Position::new(1, 2, 1), 2),
            FirstOccurrence::new("baton", Position::new(2, 1, 4), 3),
        ]
    }

    #[test]
    fn test_filter_running_example() {
        let vocabulary = ["run"].into_iter().collect::<Vocabulary>();
        let filter = NoveltyFilter::new(&vocabulary);

        let novel = filter.filter(records().into_iter().take(2));

        assert_eq!(
            novel,
            vec![FirstOccurrence::new("runner", Position::new(1, 1, 2), 1)]
        );
    }

    #[test]
    fn test_filter_preserves_order() {
        let vocabulary = ["Runner", "TRACK"].into_iter().collect::<Vocabulary>();
        let novel = NoveltyFilter::new(&vocabulary).filter(records());

        let lemmas = novel.iter().map(FirstOccurrence::lemma).collect::<Vec<_>>();
        assert_eq!(lemmas, vec!["run", "baton"]);
    }

    #[test]
    fn test_filter_idempotent() {
        let vocabulary = ["track"].into_iter().collect::<Vocabulary>();
        let filter = NoveltyFilter::new(&vocabulary);

        let once = filter.filter(records());
        let twice = filter.filter(once.clone());

        assert_eq!(once, twice);
        assert!(twice.iter().all(|record| !vocabulary.contains(record.lemma())));
    }

    #[test]
    fn test_filter_empty_vocabulary_keeps_everything() {
        let vocabulary = Vocabulary::new();
        assert_eq!(NoveltyFilter::new(&vocabulary).filter(records()), records());
    }

    #[test]
    fn test_vocabulary_from_json() {
        let vocabulary =
            Vocabulary::from_json(r#"{"words": ["Apple", "banana", "APPLE"], "extra": 1}"#)
                .unwrap();

        assert_eq!(vocabulary.len(), 2);
        assert!(vocabulary.contains("apple"));
        assert!(vocabulary.contains("banana"));
        assert!(!vocabulary.contains("Apple"));
    }

    #[test]
    fn test_vocabulary_empty_words_is_accepted() {
        let vocabulary = Vocabulary::from_json(r#"{"words": []}"#).unwrap();
        assert!(vocabulary.is_empty());
    }

    #[test]
    fn test_vocabulary_missing_field() {
        assert_eq!(
            Vocabulary::from_json(r#"{"word": ["apple"]}"#),
            Err(Error::Vocabulary(VocabularyError::MissingField("words")))
        );
    }

    #[test]
    fn test_vocabulary_malformed() {
        for text in [r#"{"words": "apple"}"#, r#"{"words": [1, 2]}"#, "[]", "not json"] {
            assert!(matches!(
                Vocabulary::from_json(text),
                Err(Error::Vocabulary(VocabularyError::Malformed(_)))
            ));
        }
    }
}
