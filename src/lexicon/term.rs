//! Plain lexicon words: adjectives, adverbs and sayings

use serde::Serialize;

/// A word or phrase with its English glosses: adjectives, adverbs and sayings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LexiconTerm {
    pub word: String,
    /// Never empty for terms produced by the loader.
    pub english: Vec<String>,
}

impl LexiconTerm {
    pub fn new<I, S>(word: impl Into<String>, english: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        LexiconTerm {
            word: word.into(),
            english: english.into_iter().map(Into::into).collect(),
        }
    }
}
