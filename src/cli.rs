extern crate clap;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(version, about = "Lists the lemmas of a document missing from a vocabulary")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract novel lemmas in order of first appearance.
    Extract(Extract),
}

#[derive(Debug, Parser)]
pub struct Extract {
    /// Document to read: `.pdf`, or text with form-feed page breaks.
    #[arg(long, short = 'd')]
    pub document: PathBuf,

    /// JSON object with a `words` array of known lemmas.
    #[arg(long, short = 'v', default_value = "words_only.json")]
    pub vocabulary: PathBuf,

    /// WordNet `dict` directory.
    #[arg(long, short = 'w', env = "LEXA_WORDNET")]
    pub wordnet: PathBuf,

    /// plain, annotated or structured.
    #[arg(long, short = 'f', default_value = "plain")]
    pub format: String,

    /// Output file, `-` for stdout. Defaults depend on the format.
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Print each new lemma to stderr as it is recorded.
    #[arg(long)]
    pub progress: bool,
}
