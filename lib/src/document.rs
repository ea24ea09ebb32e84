/// Page separator emitted by text extractors such as `pdftotext`.
pub const FORM_FEED: char = '\x0c';

/// Supplies the raw text of a document, one entry per page in order.
///
/// `None` marks a page without extractable text.
pub trait PageSource {
    fn pages(&self) -> Box<dyn Iterator<Item = Option<&str>> + '_>;
}

/// The text of one page and its 1-based number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Page<'a> {
    number: usize,
    text: &'a str,
}

impl<'a> Page<'a> {
    #[inline]
    pub fn new(number: usize, text: &'a str) -> Self {
        Self { number, text }
    }

    #[inline]
    pub fn number(&self) -> usize {
        self.number
    }

    /// Trimmed non-blank lines, numbered from 1. Blank lines are not counted.
    pub fn lines(&self) -> impl Iterator<Item = (usize, &'a str)> {
        self.text
            .split('\n')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .zip(1..)
            .map(|(line, number)| (number, line))
    }
}

/// A document held in memory.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document(Vec<Option<String>>);

impl Document {
    #[inline]
    pub fn new(pages: Vec<Option<String>>) -> Self {
        Self(pages)
    }

    /// Splits extracted text into pages on form feeds.
    ///
    /// A single trailing form feed closes the last page rather than opening
    /// an empty one.
    pub fn from_form_feeds(text: &str) -> Self {
        let body = text.trim_end_matches(|ch: char| ch == '\r' || ch == '\n');
        let body = body.strip_suffix(FORM_FEED).unwrap_or(body);

        body.split(FORM_FEED).collect()
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

impl<S: Into<String>> FromIterator<S> for Document {
    /// Empty strings become pages without text.
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(Into::into)
                .map(|text: String| (!text.is_empty()).then_some(text))
                .collect(),
        )
    }
}

impl PageSource for Document {
    fn pages(&self) -> Box<dyn Iterator<Item = Option<&str>> + '_> {
        Box::new(self.0.iter().map(Option::as_deref))
    }
}
