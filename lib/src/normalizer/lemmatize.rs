//! WordNet "morphy" lemmatization.
//!
//! A [`Lemmatizer`] holds, for every [`Pos`], the set of base forms listed in
//! WordNet's `index.<pos>` file and the irregular inflections listed in
//! `<pos>.exc`. A word is reduced by consulting the exception list first and
//! otherwise by detaching regular suffixes until a listed base form appears.

use std::{
    fmt::{Display, Formatter},
    fs,
    path::Path,
};

use hashbrown::{HashMap, HashSet};
use tracing::{debug, info};

use crate::error::{Error, LemmatizerError};

/// Grammatical role a token is lemmatized under.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum Pos {
    Noun,
    Verb,
}

impl Pos {
    pub const ALL: [Pos; 2] = [Pos::Noun, Pos::Verb];

    /// Suffix used by the WordNet dictionary file names.
    pub fn suffix(self) -> &'static str {
        match self {
            Pos::Noun => "noun",
            Pos::Verb => "verb",
        }
    }

    fn rules(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Pos::Noun => &[
                ("s", ""),
                ("ses", "s"),
                ("ves", "f"),
                ("xes", "x"),
                ("zes", "z"),
                ("ches", "ch"),
                ("shes", "sh"),
                ("men", "man"),
                ("ies", "y"),
            ],
            Pos::Verb => &[
                ("s", ""),
                ("ies", "y"),
                ("es", "e"),
                ("es", ""),
                ("ed", "e"),
                ("ed", ""),
                ("ing", "e"),
                ("ing", ""),
            ],
        }
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Maps a token and a grammatical role to a base form.
///
/// Implementations must be deterministic for a fixed `(token, pos)` pair.
pub trait Lemmatize {
    fn lemmatize(&self, token: &str, pos: Pos) -> String;
}

impl<F> Lemmatize for F
where
    F: Fn(&str, Pos) -> String,
{
    fn lemmatize(&self, token: &str, pos: Pos) -> String {
        self(token, pos)
    }
}

#[derive(Clone, Debug, Default)]
pub struct Lemmatizer {
    lookup: Lookup,
}

#[derive(Clone, Debug, Default)]
struct Lookup {
    index: HashMap<Pos, HashSet<String>>,
    exceptions: HashMap<Pos, HashMap<String, Vec<String>>>,
}

impl Lookup {
    fn contains(&self, pos: Pos, lemma: &str) -> bool {
        self.index
            .get(&pos)
            .is_some_and(|lemmas| lemmas.contains(lemma))
    }

    fn exceptions(&self, pos: Pos, form: &str) -> Option<&Vec<String>> {
        self.exceptions.get(&pos).and_then(|forms| forms.get(form))
    }

    fn lemma_count(&self, pos: Pos) -> usize {
        self.index.get(&pos).map_or(0, HashSet::len)
    }
}

impl Lemmatizer {
    /// Creates an empty lemmatizer, which leaves every token unchanged.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the noun and verb data from a WordNet `dict` directory.
    ///
    /// `index.noun` and `index.verb` are required and must list at least one
    /// lemma. `noun.exc` and `verb.exc` are read when present.
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self, Error> {
        let dir = dir.as_ref();
        let mut lemmatizer = Self::new();

        for pos in Pos::ALL {
            let path = dir.join(format!("index.{pos}"));
            let text = fs::read_to_string(&path).map_err(|error| LemmatizerError::File {
                path: path.display().to_string(),
                kind: error.kind(),
            })?;

            lemmatizer.read_index(pos, &text);

            if lemmatizer.lookup.lemma_count(pos) == 0 {
                return Err(LemmatizerError::EmptyIndex(path.display().to_string()).into());
            }

            let path = dir.join(format!("{pos}.exc"));
            match fs::read_to_string(&path) {
                Ok(text) => {
                    lemmatizer.read_exceptions(pos, &text);
                }
                Err(error) => debug!(path = %path.display(), %error, "no exception list"),
            }
        }

        info!(
            nouns = lemmatizer.lookup.lemma_count(Pos::Noun),
            verbs = lemmatizer.lookup.lemma_count(Pos::Verb),
            "loaded wordnet from {}",
            dir.display()
        );

        Ok(lemmatizer)
    }

    /// Reads the contents of an `index.<pos>` file.
    ///
    /// The lemma is the first field of each line. Lines starting with a space
    /// belong to the license header.
    pub fn read_index(&mut self, pos: Pos, text: &str) -> &mut Self {
        let lemmas = self.lookup.index.entry(pos).or_default();

        text.lines()
            .filter(|line| !line.starts_with(' '))
            .filter_map(|line| line.split_whitespace().next())
            .for_each(|lemma| {
                lemmas.insert(lemma.to_lowercase());
            });

        self
    }

    /// Reads the contents of a `<pos>.exc` file: an inflected form followed
    /// by one or more base forms per line.
    pub fn read_exceptions(&mut self, pos: Pos, text: &str) -> &mut Self {
        text.lines().for_each(|line| {
            let mut fields = line.split_whitespace();

            if let Some(form) = fields.next() {
                let bases = fields.map(str::to_string).collect::<Vec<_>>();

                if !bases.is_empty() {
                    self.insert_exception(pos, form, bases);
                }
            }
        });

        self
    }

    pub fn insert_lemma(&mut self, pos: Pos, lemma: &str) -> &mut Self {
        self.lookup
            .index
            .entry(pos)
            .or_default()
            .insert(lemma.to_string());
        self
    }

    pub fn insert_exception<I, S>(&mut self, pos: Pos, form: &str, bases: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lookup
            .exceptions
            .entry(pos)
            .or_default()
            .entry(form.to_string())
            .or_default()
            .extend(bases.into_iter().map(Into::into));
        self
    }

    /// Every base form of `form` known under `pos`, in discovery order.
    pub fn morphy(&self, form: &str, pos: Pos) -> Vec<String> {
        if let Some(bases) = self.lookup.exceptions(pos, form) {
            let candidates = std::iter::once(form.to_string()).chain(bases.iter().cloned());
            return self.known(pos, candidates);
        }

        let mut forms = detach(pos, &[form.to_string()]);

        let found = self.known(
            pos,
            std::iter::once(form.to_string()).chain(forms.iter().cloned()),
        );
        if !found.is_empty() {
            return found;
        }

        while !forms.is_empty() {
            forms = detach(pos, &forms);

            let found = self.known(pos, forms.iter().cloned());
            if !found.is_empty() {
                return found;
            }
        }

        Vec::new()
    }

    fn known(&self, pos: Pos, candidates: impl Iterator<Item = String>) -> Vec<String> {
        let mut seen = HashSet::new();

        candidates
            .filter(|candidate| self.lookup.contains(pos, candidate))
            .filter(|candidate| seen.insert(candidate.clone()))
            .collect()
    }
}

impl Lemmatize for Lemmatizer {
    /// The shortest base form, or the token itself when none is known.
    fn lemmatize(&self, token: &str, pos: Pos) -> String {
        self.morphy(token, pos)
            .into_iter()
            .min_by_key(|lemma| lemma.chars().count())
            .unwrap_or_else(|| token.to_string())
    }
}

fn detach(pos: Pos, forms: &[String]) -> Vec<String> {
    forms
        .iter()
        .flat_map(|form| {
            pos.rules().iter().filter_map(move |(old, new)| {
                form.strip_suffix(old)
                    .map(|stem| format!("{stem}{new}"))
            })
        })
        .collect()
}
