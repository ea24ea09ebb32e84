use std::path::PathBuf;

use lexa::report::Format;

use crate::{
    cli::Extract,
    error::ConfigError,
    source::DocumentKind,
    write::Output,
};

pub const PLAIN_OUTPUT: &str = "new_lemmas_ordered.json";
pub const POSITIONS_OUTPUT: &str = "new_words_with_positions.json";

/// Validated settings for one extraction run.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub document: PathBuf,
    pub kind: DocumentKind,
    pub vocabulary: PathBuf,
    pub wordnet: PathBuf,
    pub format: Format,
    pub output: Output,
    pub progress: bool,
}

impl TryFrom<Extract> for Config {
    type Error = ConfigError;

    fn try_from(args: Extract) -> Result<Self, Self::Error> {
        let document = non_empty("document", args.document)?;
        let vocabulary = non_empty("vocabulary", args.vocabulary)?;
        let wordnet = non_empty("wordnet", args.wordnet)?;

        let format = args.format.parse::<Format>().map_err(ConfigError::Format)?;

        let output = match args.output {
            Some(path) => Output::parse(non_empty("output", path)?),
            None => Output::File(PathBuf::from(default_output(format))),
        };

        Ok(Self {
            kind: DocumentKind::detect(&document),
            document,
            vocabulary,
            wordnet,
            format,
            output,
            progress: args.progress,
        })
    }
}

pub fn default_output(format: Format) -> &'static str {
    if format.has_positions() {
        POSITIONS_OUTPUT
    } else {
        PLAIN_OUTPUT
    }
}

fn non_empty(name: &'static str, path: PathBuf) -> Result<PathBuf, ConfigError> {
    if path.as_os_str().is_empty() {
        return Err(ConfigError::EmptyPath(name));
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use lexa::report::Format;

    use crate::{
        cli::Extract,
        config::{Config, PLAIN_OUTPUT, POSITIONS_OUTPUT},
        error::ConfigError,
        source::DocumentKind,
        write::Output,
    };

    fn args() -> Extract {
        Extract {
            document: "book.pdf".into(),
            vocabulary: "words_only.json".into(),
            wordnet: "dict".into(),
            format: "plain".into(),
            output: None,
            progress: false,
        }
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::try_from(args()).unwrap();

        assert_eq!(config.kind, DocumentKind::Pdf);
        assert_eq!(config.format, Format::Plain);
        assert_eq!(config.output, Output::File(PathBuf::from(PLAIN_OUTPUT)));
    }

    #[test]
    fn test_config_output_follows_format() {
        let config = Config::try_from(Extract {
            format: "annotated".into(),
            ..args()
        })
        .unwrap();

        assert_eq!(config.output, Output::File(PathBuf::from(POSITIONS_OUTPUT)));
    }

    #[test]
    fn test_config_stdout() {
        let config = Config::try_from(Extract {
            output: Some("-".into()),
            document: "notes.txt".into(),
            ..args()
        })
        .unwrap();

        assert_eq!(config.output, Output::Stdout);
        assert_eq!(config.kind, DocumentKind::Text);
    }

    #[test]
    fn test_config_rejects_empty_path() {
        assert_eq!(
            Config::try_from(Extract {
                vocabulary: "".into(),
                ..args()
            }),
            Err(ConfigError::EmptyPath("vocabulary"))
        );
    }

    #[test]
    fn test_config_rejects_unknown_format() {
        assert!(matches!(
            Config::try_from(Extract {
                format: "xml".into(),
                ..args()
            }),
            Err(ConfigError::Format(_))
        ));
    }
}
