mod word;

pub use word::{Word, Words};

pub use crate::token::{Token, Tokens};

pub trait TextTokenizer {
    type Iter<'a>: Iterator<Item = Token>
    where
        Self: 'a;

    /// Lazily tokenize one line of text in reading order.
    fn tokenize<'a>(&'a self, text: &'a str) -> Self::Iter<'a>;
}
