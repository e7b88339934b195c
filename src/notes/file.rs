//! Whole-file note parsing
//!
//! Blank lines separate note fragments but carry no content, so they are
//! dropped before classification. Every other line becomes one
//! [`LessonItem`], in file order. The first bad line aborts the parse.

use crate::notes::error::NotesError;
use crate::notes::line::{classify_line, LessonItem, VocabItem};
use crate::notes::tag::Tag;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// The classified lines of one note file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LessonData {
    pub items: Vec<LessonItem>,
}

impl LessonData {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LessonItem> {
        self.items.iter()
    }

    /// Items carrying `tag`, in file order.
    pub fn with_tag(&self, tag: Tag) -> impl Iterator<Item = &LessonItem> {
        self.items.iter().filter(move |item| item.has_tag(tag))
    }

    /// Every extracted equivalence pair, in file order.
    pub fn vocab(&self) -> impl Iterator<Item = &VocabItem> {
        self.items.iter().filter_map(|item| item.vocab.as_ref())
    }
}

impl<'a> IntoIterator for &'a LessonData {
    type Item = &'a LessonItem;
    type IntoIter = std::slice::Iter<'a, LessonItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Parse note text that is already in memory.
pub fn parse_str(source: &str) -> Result<LessonData, NotesError> {
    let mut items = Vec::new();

    for (index, line) in source.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let item = classify_line(line).map_err(|source| NotesError::Tagging {
            line_number: index + 1,
            source,
        })?;
        items.push(item);
    }

    Ok(LessonData { items })
}

/// Read and parse a note file.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<LessonData, NotesError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| NotesError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let data = parse_str(&source)?;
    tracing::debug!(path = %path.display(), items = data.len(), "parsed notes");
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notes::error::TaggingError;
    use std::io::Write;

    const NOTES: &str = "\
#v #pf ubiti = to kill (sl.)

   \t
#n #m stol = table
Bez muke nema nauke #say

#rule perfective verbs have no present tense
";

    #[test]
    fn blank_lines_are_dropped() {
        let data = parse_str(NOTES).unwrap();
        let texts: Vec<_> = data.iter().map(|item| item.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "ubiti = to kill (sl.)",
                "stol = table",
                "Bez muke nema nauke",
                "perfective verbs have no present tense",
            ]
        );
    }

    #[test]
    fn queries_by_tag_and_vocab() {
        let data = parse_str(NOTES).unwrap();
        assert_eq!(data.with_tag(Tag::Saying).count(), 1);
        assert_eq!(data.with_tag(Tag::Noun).next().unwrap().text, "stol = table");

        let pairs: Vec<_> = data
            .vocab()
            .map(|v| (v.source.as_str(), v.target.as_str()))
            .collect();
        assert_eq!(pairs, vec![("ubiti", "to kill"), ("stol", "table")]);
    }

    #[test]
    fn first_bad_line_aborts_with_its_number() {
        let err = parse_str("ok line\n\n#bogus line\n#alsobad\n").unwrap_err();
        match err {
            NotesError::Tagging {
                line_number,
                source: TaggingError::UnknownTag { tag, .. },
            } => {
                assert_eq!(line_number, 3);
                assert_eq!(tag, "bogus");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn half_equivalence_does_not_abort_the_file() {
        let data = parse_str("#v ubiti = to kill\n#rule the sign for equals is =\n").unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data.items[1].text, "the sign for equals is =");
        assert_eq!(data.items[1].vocab, None);
        assert_eq!(data.vocab().count(), 1);
    }

    #[test]
    fn empty_source_is_empty_data() {
        assert!(parse_str("").unwrap().is_empty());
        assert!(parse_str("\n  \n\t\n").unwrap().is_empty());
    }

    #[test]
    fn parses_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(NOTES.as_bytes()).unwrap();

        let data = parse_file(file.path()).unwrap();
        assert_eq!(data.len(), 4);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        match parse_file(&path) {
            Err(NotesError::Io { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
