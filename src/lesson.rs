//! A lesson: parsed notes together with the pair of languages they relate.

use crate::language::Language;
use crate::notes::{parse_file, LessonData, NotesError};
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lesson {
    /// The language explanations are written in.
    pub reference: Language,
    /// The language being learned.
    pub foreign: Language,
    pub data: LessonData,
}

impl Lesson {
    pub fn new(reference: Language, foreign: Language, data: LessonData) -> Self {
        Lesson {
            reference,
            foreign,
            data,
        }
    }

    /// Parse a note file into a lesson.
    pub fn from_notes<P: AsRef<Path>>(
        reference: Language,
        foreign: Language,
        path: P,
    ) -> Result<Self, NotesError> {
        let data = parse_file(path)?;
        Ok(Lesson::new(reference, foreign, data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notes::Tag;

    #[test]
    fn from_notes_keeps_languages_and_items() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lesson-01.txt");
        std::fs::write(&path, "#v raditi = to work\n\n#adv sutra = tomorrow\n").unwrap();

        let lesson = Lesson::from_notes(Language::English, Language::Croatian, &path).unwrap();
        assert_eq!(lesson.reference, Language::English);
        assert_eq!(lesson.foreign, Language::Croatian);
        assert_eq!(lesson.data.len(), 2);
        assert_eq!(lesson.data.with_tag(Tag::Adverb).count(), 1);
    }
}
