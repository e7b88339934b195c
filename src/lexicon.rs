//! Vocabulary lexicon
//!
//! A [`Lexicon`] is loaded once from a YAML document with four top-level keys:
//!
//!     verbs:
//!       - pf:   { inf: ubiti, conj: ubijem }
//!         impf: { inf: ubijati, conj: ubijam }
//!         eng: [to kill]
//!     adjectives:
//!       dobar: [good]
//!     adverbs:
//!       brzo: [quickly, fast]
//!     sayings:
//!       - croatian: Bez muke nema nauke
//!         english: [no pain, no gain]
//!
//! Loading either yields a complete lexicon or an error naming the first
//! malformed node; nothing is skipped or repaired. Once loaded the lexicon is
//! a plain value with read-only accessors.

mod document;
pub mod error;
pub mod term;
pub mod verb;

pub use error::{LexiconError, LexiconFormatError};
pub use term::LexiconTerm;
pub use verb::{Aspect, IncompleteVerb, VerbAspectEntry, VerbEntry, VerbEntryBuilder};

use serde::Serialize;
use serde_yaml::Value;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lexicon {
    verbs: Vec<VerbEntry>,
    adjectives: Vec<LexiconTerm>,
    adverbs: Vec<LexiconTerm>,
    sayings: Vec<LexiconTerm>,
}

impl Lexicon {
    /// Parse and validate a lexicon from YAML text.
    pub fn load(source: &str) -> Result<Self, LexiconError> {
        let root: Value = serde_yaml::from_str(source)?;
        Ok(Self::from_value(&root)?)
    }

    /// Validate an already-parsed document.
    pub fn from_value(root: &Value) -> Result<Self, LexiconFormatError> {
        let sections = document::convert(root)?;
        Ok(Lexicon {
            verbs: sections.verbs,
            adjectives: sections.adjectives,
            adverbs: sections.adverbs,
            sayings: sections.sayings,
        })
    }

    /// Read and load a lexicon file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let lexicon = Self::load(&source)?;
        tracing::debug!(
            path = %path.display(),
            verbs = lexicon.verbs.len(),
            adjectives = lexicon.adjectives.len(),
            adverbs = lexicon.adverbs.len(),
            sayings = lexicon.sayings.len(),
            "loaded lexicon"
        );
        Ok(lexicon)
    }

    pub fn verbs(&self) -> &[VerbEntry] {
        &self.verbs
    }

    pub fn adjectives(&self) -> &[LexiconTerm] {
        &self.adjectives
    }

    pub fn adverbs(&self) -> &[LexiconTerm] {
        &self.adverbs
    }

    pub fn sayings(&self) -> &[LexiconTerm] {
        &self.sayings
    }

    /// Total number of entries across all four collections.
    pub fn len(&self) -> usize {
        self.verbs.len() + self.adjectives.len() + self.adverbs.len() + self.sayings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
