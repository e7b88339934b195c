//! Error types for note parsing

use std::path::PathBuf;
use thiserror::Error;

/// A single line could not be classified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaggingError {
    /// A `#marker` names a symbol outside the tag set.
    #[error("unknown tag '#{tag}' in line: {line}")]
    UnknownTag { tag: String, line: String },

    /// More than one `=` makes the equivalence split ambiguous.
    #[error("ambiguous equivalence ({count} '=' signs) in line: {line}")]
    AmbiguousEquivalence { count: usize, line: String },
}

/// Errors raised while parsing a whole note file.
#[derive(Debug, Error)]
pub enum NotesError {
    #[error("cannot read notes from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The first line that failed to classify, numbered from 1.
    #[error("line {line_number}: {source}")]
    Tagging {
        line_number: usize,
        #[source]
        source: TaggingError,
    },
}
