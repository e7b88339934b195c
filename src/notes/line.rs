//! Line Classification
//!
//! Turns one raw note line into a [`LessonItem`]. The line grammar is small:
//!
//!     line        = { text | tag-marker } ;
//!     tag-marker  = "#" non-whitespace+ ;
//!
//! After the markers are removed, the remaining text may hold a single
//! equivalence `source = target`. Every parenthesized group on either side,
//! not only a trailing one, is a remark such as `(sl.)`: it is removed from
//! the phrase and kept in [`VocabItem::remarks`]. If either phrase is empty
//! once remarks are gone, the line has no equivalence. `text` keeps the
//! remarks.

use crate::notes::error::TaggingError;
use crate::notes::tag::{Tag, UnknownTag};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Matches a tag marker; group 1 is the symbol.
static TAG_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"#(\S+)").unwrap());

/// Matches a parenthesized remark; group 1 is its content.
static REMARK_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(([^)]*)\)").unwrap());

const EQUIVALENCE_MARKER: char = '=';

/// One classified note line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LessonItem {
    /// The line with tag markers removed and surrounding whitespace trimmed.
    pub text: String,
    /// Tags in order of appearance; repeats are kept.
    pub tags: Vec<Tag>,
    /// Present only when the text holds an equivalence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vocab: Option<VocabItem>,
}

impl LessonItem {
    pub fn has_tag(&self, tag: Tag) -> bool {
        self.tags.contains(&tag)
    }
}

/// A `source = target` pair extracted from a note line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VocabItem {
    pub source: String,
    pub target: String,
    /// Contents of the parenthesized remarks that were set aside.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub remarks: Vec<String>,
}

/// Classify a single note line.
///
/// Fails if a tag marker is not a known tag, or if the line holds more than
/// one `=`.
pub fn classify_line(line: &str) -> Result<LessonItem, TaggingError> {
    let tags = extract_tags(line)?;
    let text = TAG_REGEX.replace_all(line, "").trim().to_string();
    let vocab = extract_vocab(&text, line)?;

    Ok(LessonItem { text, tags, vocab })
}

fn extract_tags(line: &str) -> Result<Vec<Tag>, TaggingError> {
    TAG_REGEX
        .captures_iter(line)
        .map(|captures| {
            captures[1]
                .parse::<Tag>()
                .map_err(|UnknownTag(tag)| TaggingError::UnknownTag {
                    tag,
                    line: line.to_string(),
                })
        })
        .collect()
}

/// Split `text` on its `=`, if any.
///
/// A side left empty once remarks are removed means the `=` is not an
/// equivalence (e.g. `the sign for equals is =`), so no pair is produced.
fn extract_vocab(text: &str, line: &str) -> Result<Option<VocabItem>, TaggingError> {
    let count = text.matches(EQUIVALENCE_MARKER).count();
    if count > 1 {
        return Err(TaggingError::AmbiguousEquivalence {
            count,
            line: line.to_string(),
        });
    }
    let Some((source, target)) = text.split_once(EQUIVALENCE_MARKER) else {
        return Ok(None);
    };

    let mut remarks = Vec::new();
    let source = strip_remarks(source, &mut remarks);
    let target = strip_remarks(target, &mut remarks);
    if source.is_empty() || target.is_empty() {
        return Ok(None);
    }

    Ok(Some(VocabItem {
        source,
        target,
        remarks,
    }))
}

/// Remove remarks from a phrase, pushing their non-empty contents to `remarks`.
fn strip_remarks(phrase: &str, remarks: &mut Vec<String>) -> String {
    for captures in REMARK_REGEX.captures_iter(phrase) {
        let remark = captures[1].trim();
        if !remark.is_empty() {
            remarks.push(remark.to_string());
        }
    }
    REMARK_REGEX.replace_all(phrase, "").trim().to_string()
}
