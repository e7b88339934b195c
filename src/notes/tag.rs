//! Closed set of note tags.
//!
//! A tag marker in a note line is `#` followed by the tag symbol, e.g. `#v` or
//! `#impf`. The set of symbols is fixed: anything else is a typo in the notes
//! and is rejected when parsing.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Grammatical or pedagogical category of a note line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "&'static str")]
pub enum Tag {
    /// Needs correction.
    Fix,
    Verb,
    Perfective,
    Imperfective,
    Noun,
    Masculine,
    Feminine,
    Neuter,
    Adjective,
    Adverb,
    Sentence,
    Translation,
    /// A grammar rule.
    Rule,
    Saying,
    /// To be continued.
    ToBeContinued,
}

impl Tag {
    /// Every tag, in declaration order.
    pub const ALL: [Tag; 15] = [
        Tag::Fix,
        Tag::Verb,
        Tag::Perfective,
        Tag::Imperfective,
        Tag::Noun,
        Tag::Masculine,
        Tag::Feminine,
        Tag::Neuter,
        Tag::Adjective,
        Tag::Adverb,
        Tag::Sentence,
        Tag::Translation,
        Tag::Rule,
        Tag::Saying,
        Tag::ToBeContinued,
    ];

    /// The symbol written after `#` in the notes.
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Fix => "fix",
            Tag::Verb => "v",
            Tag::Perfective => "pf",
            Tag::Imperfective => "impf",
            Tag::Noun => "n",
            Tag::Masculine => "m",
            Tag::Feminine => "f",
            Tag::Neuter => "nt",
            Tag::Adjective => "adj",
            Tag::Adverb => "adv",
            Tag::Sentence => "sent",
            Tag::Translation => "trans",
            Tag::Rule => "rule",
            Tag::Saying => "say",
            Tag::ToBeContinued => "tbc",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Tag::Fix => "needs fixing",
            Tag::Verb => "verb",
            Tag::Perfective => "perfective verb aspect",
            Tag::Imperfective => "imperfective verb aspect",
            Tag::Noun => "noun",
            Tag::Masculine => "masculine noun",
            Tag::Feminine => "feminine noun",
            Tag::Neuter => "neuter noun",
            Tag::Adjective => "adjective",
            Tag::Adverb => "adverb",
            Tag::Sentence => "example sentence",
            Tag::Translation => "translation exercise",
            Tag::Rule => "grammar rule",
            Tag::Saying => "saying",
            Tag::ToBeContinued => "to be continued",
        }
    }

    /// The full marker as it appears in a note line, e.g. `#v`.
    pub fn marker(self) -> String {
        format!("#{}", self.as_str())
    }
}

/// A tag symbol outside the known set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tag '#{0}'")]
pub struct UnknownTag(pub String);

impl FromStr for Tag {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = match s {
            "fix" => Tag::Fix,
            "v" => Tag::Verb,
            "pf" => Tag::Perfective,
            "impf" => Tag::Imperfective,
            "n" => Tag::Noun,
            "m" => Tag::Masculine,
            "f" => Tag::Feminine,
            "nt" => Tag::Neuter,
            "adj" => Tag::Adjective,
            "adv" => Tag::Adverb,
            "sent" => Tag::Sentence,
            "trans" => Tag::Translation,
            "rule" => Tag::Rule,
            "say" => Tag::Saying,
            "tbc" => Tag::ToBeContinued,
            other => return Err(UnknownTag(other.to_string())),
        };
        Ok(tag)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Tag> for &'static str {
    fn from(tag: Tag) -> Self {
        tag.as_str()
    }
}
