// Text normalization: raw user text to the token string the TF-IDF
// vectorizer expects.
//
// The step order is load-bearing: URLs are removed before mentions, and
// mentions before punctuation. Changing the order changes which tokens reach
// the model (e.g. "user@domain.com" keeps "user" and "com" only because the
// mention pattern eats "@domain" before the dot is stripped). The trained
// model saw text cleaned exactly this way, so the order is kept literally.

use std::sync::Arc;

use anyhow::{Context, Result};
use regex::Regex;

use super::stopwords::StopwordSet;

/// Scheme-or-www prefix followed by non-whitespace. `\S` is spelled out so
/// the ASCII information separators count as whitespace, as they do for the
/// token split below.
const URL_PATTERN: &str = r"http[^\s\x1C-\x1F]+|www[^\s\x1C-\x1F]+|https[^\s\x1C-\x1F]+";

/// `@` followed by one or more word characters.
const MENTION_PATTERN: &str = r"@\w+";

/// Letters only (general categories Lu, Ll, Lt, Lm, Lo). Marks, letterlike
/// numbers, and symbols such as circled letters don't count.
const LETTERS_PATTERN: &str = r"^\p{L}+$";

/// Turns free text into whitespace-joined lowercase alphabetic tokens with
/// URLs, mentions, punctuation, and stopwords removed.
///
/// Holds only immutable state, so one instance is shared across callers.
#[derive(Debug, Clone)]
pub struct Normalizer {
    url: Regex,
    mention: Regex,
    letters: Regex,
    stopwords: Arc<StopwordSet>,
}

impl Normalizer {
    pub fn new(stopwords: Arc<StopwordSet>) -> Result<Self> {
        Ok(Self {
            url: Regex::new(URL_PATTERN).context("Failed to compile URL pattern")?,
            mention: Regex::new(MENTION_PATTERN).context("Failed to compile mention pattern")?,
            letters: Regex::new(LETTERS_PATTERN).context("Failed to compile letters pattern")?,
            stopwords,
        })
    }

    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    /// Normalize a single text. Total: never fails, and garbage input just
    /// produces an empty or short string.
    pub fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        let without_urls = self.url.replace_all(&lowered, " ");
        let without_mentions = self.mention.replace_all(&without_urls, " ");
        let stripped = strip_punctuation(&without_mentions);

        stripped
            .split(is_separator)
            .filter(|token| self.letters.is_match(token) && !self.stopwords.contains(token))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Delete (not replace) every ASCII punctuation character.
fn strip_punctuation(text: &str) -> String {
    text.chars().filter(|c| !c.is_ascii_punctuation()).collect()
}

/// Unicode whitespace plus the ASCII file/group/record/unit separators.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1C}'..='\u{1F}').contains(&c)
}
