//! Rendering of novel lemmas into the output record.

use std::{fmt::Display, str::FromStr};

use serde::Serialize;

use crate::core::{FirstOccurrence, Position};

/// Which fields of a record end up in the output.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub enum Format {
    /// The lemma alone.
    #[default]
    Plain,

    /// `"<lemma>  # page <P>, line <L>, position <W>"`.
    Annotated,

    /// `{"lemma", "page", "line", "position"}` objects.
    Structured,
}

impl Format {
    pub const ALL: [Format; 3] = [Format::Plain, Format::Annotated, Format::Structured];

    pub fn name(self) -> &'static str {
        match self {
            Format::Plain => "plain",
            Format::Annotated => "annotated",
            Format::Structured => "structured",
        }
    }

    /// Whether the output carries positions.
    #[inline]
    pub fn has_positions(self) -> bool {
        !matches!(self, Format::Plain)
    }
}

impl Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown format `{s}`"))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Located {
    lemma: String,
    #[serde(flatten)]
    position: Position,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Entry {
    Lemma(String),
    Located(Located),
}

/// The output record: `{"new_words": [...]}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    new_words: Vec<Entry>,
}

impl Report {
    pub fn new(format: Format, records: &[FirstOccurrence]) -> Self {
        Self {
            new_words: records.iter().map(|record| entry(format, record)).collect(),
        }
    }

    #[inline]
    pub fn entries(&self) -> &[Entry] {
        &self.new_words
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.new_words.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.new_words.is_empty()
    }
}

fn entry(format: Format, record: &FirstOccurrence) -> Entry {
    match format {
        Format::Plain => Entry::Lemma(record.lemma().to_string()),
        Format::Annotated => Entry::Lemma(annotate(record)),
        Format::Structured => Entry::Located(Located {
            lemma: record.lemma().to_string(),
            position: record.position(),
        }),
    }
}

pub fn annotate(record: &FirstOccurrence) -> String {
    format!("{}  # {}", record.lemma(), record.position())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{
        core::{FirstOccurrence, Position},
        report::{annotate, Format, Report},
    };

    fn records() -> Vec<FirstOccurrence> {
        vec![
            FirstOccurrence::new("runner", Position::new(1, 1, 2), 1),
            FirstOccurrence::new("baton", Position::new(12, 3, 7), 5),
        ]
    }

    #[test]
    fn test_report_plain() {
        let report = Report::new(Format::Plain, &records());

        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            json!({ "new_words": ["runner", "baton"] })
        );
    }

    #[test]
    fn test_report_annotated() {
        let report = Report::new(Format::Annotated, &records());

        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            json!({
                "new_words": [
                    "runner  # page 1, line 1, position 2",
                    "baton  # page 12, line 3, position 7",
                ]
            })
        );
    }

    #[test]
    fn test_report_structured() {
        let report = Report::new(Format::Structured, &records()[..1]);

        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            json!({
                "new_words": [
                    { "lemma": "runner", "page": 1, "line": 1, "position": 2 }
                ]
            })
        );
    }

    #[test]
    fn test_report_empty() {
        let report = Report::new(Format::Annotated, &[]);

        assert!(report.is_empty());
        assert_eq!(serde_json::to_string(&report).unwrap(), r#"{"new_words":[]}"#);
    }

    #[test]
    fn test_annotate_keeps_lemma_verbatim() {
        let record = FirstOccurrence::new("don't", Position::new(2, 4, 1), 0);
        assert_eq!(annotate(&record), "don't  # page 2, line 4, position 1");
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("plain".parse::<Format>(), Ok(Format::Plain));
        assert_eq!("Annotated".parse::<Format>(), Ok(Format::Annotated));
        assert_eq!("structured".parse::<Format>(), Ok(Format::Structured));
        assert!("yaml".parse::<Format>().is_err());
        assert!(!Format::Plain.has_positions());
    }
}
