//! Note parsing
//!
//! Study notes are plain text, one fragment per line, annotated inline:
//!
//!     #v #pf ubiti = to kill (sl.)
//!     #n #m stol = table
//!     Bez muke nema nauke #say
//!
//! [`classify_line`] turns one line into a [`LessonItem`]; [`parse_file`] and
//! [`parse_str`] do it for every non-blank line of a note file.

pub mod error;
pub mod file;
pub mod line;
pub mod tag;

pub use error::{NotesError, TaggingError};
pub use file::{parse_file, parse_str, LessonData};
pub use line::{classify_line, LessonItem, VocabItem};
pub use tag::{Tag, UnknownTag};
