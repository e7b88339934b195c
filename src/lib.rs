//! # languagebuddy
//!
//! Structured records from language-learning study notes.
//!
//! - [`notes`]: classifies annotated note lines (`#v ubiti = to kill`) into
//!   tagged items with optional vocabulary pairs.
//! - [`lexicon`]: loads a YAML vocabulary lexicon with verb aspect pairs.
//! - [`lesson`] and [`language`]: a parsed note file together with the
//!   languages it relates.
//! - [`settings`] and [`render`]: configuration and output for the CLI.

pub mod language;
pub mod lesson;
pub mod lexicon;
pub mod notes;
pub mod render;
pub mod settings;

pub use language::Language;
pub use lesson::Lesson;
pub use lexicon::Lexicon;
pub use notes::{classify_line, parse_file, LessonData, LessonItem, Tag, VocabItem};
