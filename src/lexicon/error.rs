//! Error types for lexicon loading

use crate::lexicon::verb::Aspect;
use std::path::PathBuf;
use thiserror::Error;

/// The document parsed, but its shape is not a valid lexicon.
///
/// `context` is a path into the document such as `verbs[2].pf` or
/// `adjectives.dobar`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexiconFormatError {
    #[error("missing required field '{field}' in {context}")]
    MissingField { field: String, context: String },

    #[error("expected {expected} at {context}")]
    UnexpectedType {
        context: String,
        expected: &'static str,
    },

    #[error("field '{field}' is empty in {context}")]
    EmptyField { field: String, context: String },

    /// Verb records are numbered from 0 in source order.
    #[error("verb {index} has no {aspect} aspect")]
    MissingAspect { aspect: Aspect, index: usize },

    #[error("empty English gloss list at {context}")]
    EmptyGloss { context: String },
}

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("cannot read lexicon from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("lexicon is not valid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid lexicon: {0}")]
    Format(#[from] LexiconFormatError),
}
