use std::path::{Path, PathBuf};

use lexa::report::Format;
use lexa_repo::{config::Config, source::DocumentKind, write::Output};

pub(crate) const SAMPLE: &str = "tests/data/sample.txt";
pub(crate) const VOCABULARY: &str = "tests/data/words_only.json";
pub(crate) const MALFORMED: &str = "tests/data/malformed.json";
pub(crate) const WORDNET: &str = "tests/data/wordnet";

/// Lemmas of the sample document in order of first appearance.
pub(crate) fn sample_lemmas() -> Vec<&'static str> {
    vec![
        "run", "runner", "the", "dog", "home", "cat", "and", "be", "take", "box",
    ]
}

pub(crate) fn config(output: &Path, format: Format) -> Config {
    Config {
        document: PathBuf::from(SAMPLE),
        kind: DocumentKind::Text,
        vocabulary: PathBuf::from(VOCABULARY),
        wordnet: PathBuf::from(WORDNET),
        format,
        output: Output::File(output.to_path_buf()),
        progress: false,
    }
}
