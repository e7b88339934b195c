//! Supported languages and their alphabets

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const CROATIAN_LETTERS: &[&str] = &[
    "a", "b", "c", "č", "ć", "d", "dž", "đ", "e", "f", "g", "h", "i", "j", "k", "l", "lj", "m",
    "n", "nj", "o", "p", "r", "s", "š", "t", "u", "v", "z", "ž",
];

const ENGLISH_LETTERS: &[&str] = &[
    "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p", "q", "r", "s",
    "t", "u", "v", "w", "x", "y", "z",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Croatian,
    English,
}

impl Language {
    /// The alphabet in dictionary order. Multi-character letters such as the
    /// Croatian `lj` are single entries.
    pub fn letters(self) -> &'static [&'static str] {
        match self {
            Language::Croatian => CROATIAN_LETTERS,
            Language::English => ENGLISH_LETTERS,
        }
    }

    /// Split a word into letters of this alphabet, case-insensitively.
    ///
    /// Multi-character letters win over their single-character prefixes, so
    /// `džep` splits as `dž`, `e`, `p`. Returns the first character that is
    /// not part of the alphabet.
    pub fn split_letters(self, word: &str) -> Result<Vec<&'static str>, char> {
        let word = word.to_lowercase();
        let mut rest = word.as_str();
        let mut letters = Vec::new();

        while let Some(first) = rest.chars().next() {
            let letter = self
                .letters()
                .iter()
                .filter(|letter| rest.starts_with(**letter))
                .max_by_key(|letter| letter.len())
                .ok_or(first)?;
            letters.push(*letter);
            rest = &rest[letter.len()..];
        }

        Ok(letters)
    }

    pub fn name(self) -> &'static str {
        match self {
            Language::Croatian => "croatian",
            Language::English => "english",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A language name outside [`Language`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported language '{0}'")]
pub struct UnsupportedLanguage(pub String);

impl FromStr for Language {
    type Err = UnsupportedLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "croatian" => Ok(Language::Croatian),
            "english" => Ok(Language::English),
            other => Err(UnsupportedLanguage(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_sizes() {
        assert_eq!(Language::Croatian.letters().len(), 30);
        assert_eq!(Language::English.letters().len(), 26);
    }

    #[test]
    fn digraphs_are_single_letters() {
        assert_eq!(Language::Croatian.split_letters("džep"), Ok(vec!["dž", "e", "p"]));
        assert_eq!(
            Language::Croatian.split_letters("Ljubav"),
            Ok(vec!["lj", "u", "b", "a", "v"])
        );
        assert_eq!(
            Language::Croatian.split_letters("konj"),
            Ok(vec!["k", "o", "nj"])
        );
    }

    #[test]
    fn reports_first_foreign_character() {
        assert_eq!(Language::Croatian.split_letters("quiz"), Err('q'));
        assert_eq!(Language::English.split_letters("čaj"), Err('č'));
        assert_eq!(Language::English.split_letters("two words"), Err(' '));
    }

    #[test]
    fn parses_names() {
        assert_eq!("Croatian".parse::<Language>(), Ok(Language::Croatian));
        assert_eq!(Language::English.to_string(), "english");
        assert_eq!(
            "German".parse::<Language>(),
            Err(UnsupportedLanguage("german".to_string()))
        );
    }
}
