use lexa::{
    core::FirstOccurrence,
    document::PageSource,
    filter::{NoveltyFilter, Vocabulary},
    normalizer::{LemmaNormalizer, Lemmatize, Lemmatizer},
    observer::{Observer, Silent},
    report::{Format, Report},
    tokenizer::{TextTokenizer, Word},
    tracker::FirstOccurrenceTracker,
};
use tracing::info;

use crate::{
    config::Config,
    error::Error,
    progress,
    read::read_vocabulary,
    source::load_document,
    write::{write_report, Output},
};

/// Tokenizer and normalizer shared by every run.
#[derive(Debug)]
pub struct LexaFacade<L: Lemmatize, T: TextTokenizer = Word> {
    pub tokenizer: T,
    pub normalizer: LemmaNormalizer<L>,
}

impl<L: Lemmatize> LexaFacade<L> {
    pub fn new(lemmatizer: L) -> Self {
        Self::with_tokenizer(Word::new(), lemmatizer)
    }
}

impl<L: Lemmatize, T: TextTokenizer> LexaFacade<L, T> {
    pub fn with_tokenizer(tokenizer: T, lemmatizer: L) -> Self {
        Self {
            tokenizer,
            normalizer: LemmaNormalizer::new(lemmatizer),
        }
    }

    /// Tracks every page of `source` and keeps the lemmas missing from
    /// `vocabulary`. Each call starts from an empty tracker.
    pub fn run(
        &mut self,
        source: &dyn PageSource,
        vocabulary: &Vocabulary,
        observer: &mut dyn Observer,
    ) -> Outcome {
        let occurrences =
            FirstOccurrenceTracker::new(&self.tokenizer, &mut self.normalizer, observer)
                .track(source);

        let mut stats = Stats {
            pages: occurrences.pages(),
            skipped: occurrences.skipped_pages().to_vec(),
            tokens: occurrences.tokens(),
            lemmas: occurrences.len(),
            novel: 0,
        };

        let novel = NoveltyFilter::new(vocabulary).filter(occurrences);
        stats.novel = novel.len();

        Outcome { novel, stats }
    }
}

/// Counters describing one run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    pub pages: usize,
    pub skipped: Vec<usize>,
    pub tokens: usize,
    pub lemmas: usize,
    pub novel: usize,
}

#[derive(Debug)]
pub struct Outcome {
    novel: Vec<FirstOccurrence>,
    stats: Stats,
}

impl Outcome {
    /// Novel lemmas in order of first appearance.
    #[inline]
    pub fn records(&self) -> &[FirstOccurrence] {
        &self.novel
    }

    #[inline]
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn report(&self, format: Format) -> Report {
        Report::new(format, &self.novel)
    }
}

/// Loads every input, runs the pipeline and writes the report.
///
/// Inputs are all loaded before anything is written, so a failure leaves the
/// output untouched.
pub async fn execute(config: &Config) -> Result<Stats, Error> {
    let lemmatizer = Lemmatizer::load(&config.wordnet)?;
    let vocabulary = read_vocabulary(&config.vocabulary).await?;
    let document = load_document(&config.document, config.kind).await?;

    info!("processing {}, {} pages", config.document.display(), document.len());

    let mut engine = LexaFacade::new(lemmatizer);

    let outcome = if config.progress {
        let (mut progress, reporter) = progress::spawn(std::io::stderr());
        let outcome = engine.run(&document, &vocabulary, &mut progress);

        drop(progress);
        let _ = reporter.join();

        outcome
    } else {
        engine.run(&document, &vocabulary, &mut Silent)
    };

    write_report(&config.output, &outcome.report(config.format)).await?;

    let stats = outcome.stats().clone();
    match &config.output {
        Output::File(path) => info!("{} new lemmas written to {}", stats.novel, path.display()),
        Output::Stdout => info!("{} new lemmas written to stdout", stats.novel),
    }

    Ok(stats)
}
