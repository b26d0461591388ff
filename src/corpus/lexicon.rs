// Lexicon: the fixed English stopword set, built once at startup.
//
// The stopword lists ship inside the stop-words crate, so construction
// needs no network access and cannot fail at runtime. The lexicon is
// read-only after construction and passed by reference into the
// preprocessor.

use std::collections::HashSet;

use stop_words::{get, LANGUAGE};

/// The stopword set used by the preprocessor.
///
/// Initialized once at startup, read-only thereafter. Lookups expect
/// lowercase tokens; the tokenizer lowercases before filtering.
pub struct Lexicon {
    stopwords: HashSet<String>,
}

impl Lexicon {
    /// Build the lexicon from the embedded English stopword list.
    pub fn english() -> Self {
        let stopwords: HashSet<String> = get(LANGUAGE::English).into_iter().collect();
        Self { stopwords }
    }

    /// Build a lexicon from an explicit word list.
    pub fn from_words<I>(words: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            stopwords: words.into_iter().collect(),
        }
    }

    /// Whether a lowercase token is a stopword.
    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }

    /// Number of stopwords in the set.
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::english()
    }
}
