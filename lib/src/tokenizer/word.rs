use std::sync::OnceLock;

use regex::{Matches, Regex};

use crate::tokenizer::{TextTokenizer, Token};

/// Tokens shorter than this, after stripping apostrophes, are dropped.
pub const MIN_TOKEN_LEN: usize = 2;

fn pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\b[a-zA-Z']+\b").expect("word pattern is valid"))
}

/// Splits text into runs of ASCII letters and apostrophes on word boundaries.
///
/// A run touching another word character (a digit, an underscore or a
/// non-ASCII letter) is not a word, so `abc123` and `café` produce nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct Word;

impl Word {
    pub fn new() -> Self {
        Self
    }
}

impl TextTokenizer for Word {
    type Iter<'a> = Words<'a>;

    fn tokenize<'a>(&'a self, text: &'a str) -> Self::Iter<'a> {
        Words {
            matches: pattern().find_iter(text),
        }
    }
}

#[derive(Debug)]
pub struct Words<'a> {
    matches: Matches<'static, 'a>,
}

impl Iterator for Words<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.matches
            .by_ref()
            .find_map(|candidate| clean(candidate.as_str()))
    }
}

fn clean(word: &str) -> Option<Token> {
    let stripped = word.trim_matches('\'');

    if stripped.len() < MIN_TOKEN_LEN {
        return None;
    }

    Some(Token::from(stripped.to_ascii_lowercase()))
}
