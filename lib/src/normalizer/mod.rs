pub mod lemmatize;

pub use lemmatize::{Lemmatize, Lemmatizer, Pos};

use hashbrown::HashMap;

/// Applies the verb-then-noun policy: the verb reading wins unless it leaves
/// the token unchanged, in which case the noun reading is used.
pub fn lemma_of<L: Lemmatize + ?Sized>(lemmatizer: &L, token: &str) -> String {
    let lemma = lemmatizer.lemmatize(token, Pos::Verb);

    if lemma == token {
        lemmatizer.lemmatize(token, Pos::Noun)
    } else {
        lemma
    }
}

/// Converts tokens to lemmas, memoizing per distinct token.
#[derive(Clone, Debug)]
pub struct LemmaNormalizer<L: Lemmatize> {
    lemmatizer: L,
    cache: HashMap<String, String>,
}

impl<L: Lemmatize> LemmaNormalizer<L> {
    pub fn new(lemmatizer: L) -> Self {
        Self {
            lemmatizer,
            cache: HashMap::new(),
        }
    }

    pub fn normalize(&mut self, token: &str) -> &str {
        let lemmatizer = &self.lemmatizer;

        self.cache
            .entry_ref(token)
            .or_insert_with(|| lemma_of(lemmatizer, token))
            .as_str()
    }

    #[inline]
    pub fn lemmatizer(&self) -> &L {
        &self.lemmatizer
    }

    /// Number of distinct tokens normalized so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use crate::normalizer::{lemma_of, LemmaNormalizer, Lemmatize, Pos};

    fn running(token: &str, pos: Pos) -> String {
        match (token, pos) {
            ("running", Pos::Verb) => "run".into(),
            ("runners", Pos::Noun) => "runner".into(),
            ("meeting", Pos::Verb) => "meet".into(),
            ("meeting", Pos::Noun) => "meeting".into(),
            _ => token.into(),
        }
    }

    #[test]
    fn test_normalizer_verb_first() {
        assert_eq!(lemma_of(&running, "running"), "run");
        assert_eq!(lemma_of(&running, "meeting"), "meet");
    }

    #[test]
    fn test_normalizer_noun_fallback() {
        assert_eq!(lemma_of(&running, "runners"), "runner");
        assert_eq!(lemma_of(&running, "run"), "run");
    }

    #[test]
    fn test_normalizer_noun_pass_only_when_unchanged() {
        let calls = Cell::new(0);
        let lemmatizer = |token: &str, pos: Pos| {
            calls.set(calls.get() + 1);
            match pos {
                Pos::Verb => format!("{token}-v"),
                Pos::Noun => format!("{token}-n"),
            }
        };

        assert_eq!(lemma_of(&lemmatizer, "go"), "go-v");
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_normalizer_memoizes() {
        let calls = Cell::new(0);
        let lemmatizer = |token: &str, pos: Pos| {
            calls.set(calls.get() + 1);
            running(token, pos)
        };

        let mut normalizer = LemmaNormalizer::new(lemmatizer);

        assert_eq!(normalizer.normalize("runners"), "runner");
        assert_eq!(normalizer.normalize("runners"), "runner");
        assert_eq!(normalizer.normalize("running"), "run");

        // Two passes for "runners", one for "running".
        assert_eq!(calls.get(), 3);
        assert_eq!(normalizer.len(), 2);
    }

    #[test]
    fn test_normalizer_memoized_matches_direct() {
        let mut normalizer = LemmaNormalizer::new(running);

        for token in ["running", "runners", "run", "meeting", "running"] {
            let direct = lemma_of(normalizer.lemmatizer(), token);
            assert_eq!(normalizer.normalize(token), direct);
        }
    }

    #[test]
    fn test_normalizer_lemmatizer_trait_object() {
        let lemmatizer: &dyn Lemmatize = &running;
        assert_eq!(lemma_of(lemmatizer, "runners"), "runner");
    }
}
