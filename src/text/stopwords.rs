// Stopword set: loaded once at startup, read-only afterwards.
//
// The classifier was trained on text filtered with the NLTK English list,
// so that list ships with the crate and is the default. The `stop-words`
// crate's English list and arbitrary word files are available as
// alternatives for experimenting with other models.

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use stop_words::{get, LANGUAGE};
use tracing::debug;

/// The 179-word NLTK English list, one word per line.
const NLTK_ENGLISH: &str = include_str!("../../resources/stopwords/english");

/// Where the stopword list comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum StopwordSource {
    /// Bundled NLTK English list (default, matches the trained model)
    Nltk,
    /// English list from the `stop-words` crate
    Iso,
    /// Newline-separated word file on disk
    File(PathBuf),
}

impl StopwordSource {
    /// Parse the `MBTI_STOPWORDS` value. Anything that isn't a known list
    /// name is treated as a file path.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "" | "nltk" => Self::Nltk,
            "iso" => Self::Iso,
            path => Self::File(PathBuf::from(path)),
        }
    }
}

impl fmt::Display for StopwordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nltk => write!(f, "nltk (bundled)"),
            Self::Iso => write!(f, "iso (stop-words crate)"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// An immutable set of lowercase stopwords.
#[derive(Debug, Clone)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Load the stopword list from the given source.
    ///
    /// Fails if the file can't be read or the list is empty.
    pub fn load(source: &StopwordSource) -> Result<Self> {
        let set = match source {
            StopwordSource::Nltk => Self::from_lines(NLTK_ENGLISH),
            StopwordSource::Iso => Self::from_words(get(LANGUAGE::English)),
            StopwordSource::File(path) => Self::from_file(path)?,
        };

        if set.is_empty() {
            anyhow::bail!("Stopword source {source} contains no words");
        }

        debug!(source = %source, words = set.len(), "Loaded stopwords");
        Ok(set)
    }

    /// Build a set from newline-separated text. Blank lines are skipped.
    pub fn from_lines(text: &str) -> Self {
        Self::from_words(text.lines().map(str::to_string))
    }

    /// Build a set from any collection of words. Words are trimmed and
    /// lowercased so lookups against normalized tokens are exact.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read stopword file {}", path.display()))?;
        Ok(Self::from_lines(&text))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
