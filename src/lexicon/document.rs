//! Validating conversion from an untyped YAML tree
//!
//! The lexicon source is hand-maintained, so nothing about its shape is
//! trusted. Each function here checks the shape of one node while converting
//! it; the first mismatch is returned with a path to the offending node.

use crate::lexicon::error::LexiconFormatError;
use crate::lexicon::term::LexiconTerm;
use crate::lexicon::verb::{Aspect, IncompleteVerb, VerbEntry};
use serde_yaml::{Mapping, Value};

const VERBS: &str = "verbs";
const ADJECTIVES: &str = "adjectives";
const ADVERBS: &str = "adverbs";
const SAYINGS: &str = "sayings";

const INFINITIVE: &str = "inf";
const CONJUGATED: &str = "conj";
const VERB_GLOSS: &str = "eng";
const SAYING_WORD: [&str; 2] = ["croatian", "word"];
const SAYING_GLOSS: [&str; 2] = ["english", "eng"];

/// The four collections of a lexicon, in source order.
#[derive(Debug, Default)]
pub(crate) struct Sections {
    pub verbs: Vec<VerbEntry>,
    pub adjectives: Vec<LexiconTerm>,
    pub adverbs: Vec<LexiconTerm>,
    pub sayings: Vec<LexiconTerm>,
}

pub(crate) fn convert(root: &Value) -> Result<Sections, LexiconFormatError> {
    let root = as_mapping(root, "document")?;

    Ok(Sections {
        verbs: convert_sequence(section(root, VERBS)?, VERBS, convert_verb)?,
        adjectives: convert_word_map(section(root, ADJECTIVES)?, ADJECTIVES)?,
        adverbs: convert_word_map(section(root, ADVERBS)?, ADVERBS)?,
        sayings: convert_sequence(section(root, SAYINGS)?, SAYINGS, convert_saying)?,
    })
}

/// A top-level section. Absent is an error; an explicit null is empty.
fn section<'a>(root: &'a Mapping, key: &str) -> Result<Option<&'a Value>, LexiconFormatError> {
    match root.get(key) {
        None => Err(LexiconFormatError::MissingField {
            field: key.to_string(),
            context: "document".to_string(),
        }),
        Some(Value::Null) => Ok(None),
        Some(value) => Ok(Some(value)),
    }
}

fn convert_sequence<T>(
    value: Option<&Value>,
    name: &str,
    mut convert_item: impl FnMut(usize, &Value) -> Result<T, LexiconFormatError>,
) -> Result<Vec<T>, LexiconFormatError> {
    let Some(value) = value else {
        return Ok(Vec::new());
    };
    let Value::Sequence(items) = value else {
        return Err(unexpected(name, "a sequence"));
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| convert_item(index, item))
        .collect()
}

fn convert_verb(index: usize, record: &Value) -> Result<VerbEntry, LexiconFormatError> {
    let context = format!("{VERBS}[{index}]");
    let record = as_mapping(record, &context)?;

    let mut builder = VerbEntry::builder();
    for aspect in Aspect::ALL {
        let sub_record = match record.get(aspect.code()) {
            None | Some(Value::Null) => continue,
            Some(value) => value,
        };
        let sub_context = format!("{context}.{}", aspect.code());
        let sub_record = as_mapping(sub_record, &sub_context)?;
        builder = builder.aspect(
            aspect,
            required_str(sub_record, INFINITIVE, &sub_context)?,
            required_str(sub_record, CONJUGATED, &sub_context)?,
        );
    }

    let english = match record.get(VERB_GLOSS) {
        Some(value) => gloss_list(value, &format!("{context}.{VERB_GLOSS}"))?,
        None => {
            return Err(LexiconFormatError::MissingField {
                field: VERB_GLOSS.to_string(),
                context,
            })
        }
    };

    builder
        .english(english)
        .build()
        .map_err(|incomplete| match incomplete {
            IncompleteVerb::MissingAspect(aspect) => {
                LexiconFormatError::MissingAspect { aspect, index }
            }
            IncompleteVerb::MissingGloss => LexiconFormatError::EmptyGloss {
                context: format!("{context}.{VERB_GLOSS}"),
            },
        })
}

/// `word: [gloss, ...]` entries, kept in mapping order.
fn convert_word_map(
    value: Option<&Value>,
    name: &str,
) -> Result<Vec<LexiconTerm>, LexiconFormatError> {
    let Some(value) = value else {
        return Ok(Vec::new());
    };
    let entries = as_mapping(value, name)?;

    entries
        .iter()
        .map(|(key, glosses)| {
            let Value::String(word) = key else {
                return Err(unexpected(name, "string keys"));
            };
            let context = format!("{name}.{word}");
            if word.trim().is_empty() {
                return Err(LexiconFormatError::EmptyField {
                    field: "word".to_string(),
                    context,
                });
            }
            Ok(LexiconTerm {
                word: word.clone(),
                english: gloss_list(glosses, &context)?,
            })
        })
        .collect()
}

fn convert_saying(index: usize, record: &Value) -> Result<LexiconTerm, LexiconFormatError> {
    let context = format!("{SAYINGS}[{index}]");
    let record = as_mapping(record, &context)?;

    let word = match first_entry(record, &SAYING_WORD) {
        Some((key, _)) => required_str(record, key, &context)?,
        None => {
            return Err(LexiconFormatError::MissingField {
                field: SAYING_WORD[0].to_string(),
                context,
            })
        }
    };
    let english = match first_entry(record, &SAYING_GLOSS) {
        Some((key, glosses)) => gloss_list(glosses, &format!("{context}.{key}"))?,
        None => {
            return Err(LexiconFormatError::MissingField {
                field: SAYING_GLOSS[0].to_string(),
                context,
            })
        }
    };

    Ok(LexiconTerm { word, english })
}

/// A non-empty list of non-empty strings. A lone string counts as one gloss.
fn gloss_list(value: &Value, context: &str) -> Result<Vec<String>, LexiconFormatError> {
    let glosses = match value {
        Value::String(gloss) => vec![gloss.clone()],
        Value::Sequence(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::String(gloss) => Ok(gloss.clone()),
                _ => Err(unexpected(&format!("{context}[{index}]"), "a string")),
            })
            .collect::<Result<Vec<_>, _>>()?,
        Value::Null => Vec::new(),
        _ => return Err(unexpected(context, "a gloss list")),
    };

    if glosses.is_empty() {
        return Err(LexiconFormatError::EmptyGloss {
            context: context.to_string(),
        });
    }
    if glosses.iter().any(|gloss| gloss.trim().is_empty()) {
        return Err(LexiconFormatError::EmptyField {
            field: "gloss".to_string(),
            context: context.to_string(),
        });
    }
    Ok(glosses)
}

fn required_str(
    record: &Mapping,
    field: &str,
    context: &str,
) -> Result<String, LexiconFormatError> {
    match record.get(field) {
        None | Some(Value::Null) => Err(LexiconFormatError::MissingField {
            field: field.to_string(),
            context: context.to_string(),
        }),
        Some(Value::String(text)) if text.trim().is_empty() => {
            Err(LexiconFormatError::EmptyField {
                field: field.to_string(),
                context: context.to_string(),
            })
        }
        Some(Value::String(text)) => Ok(text.clone()),
        Some(_) => Err(unexpected(&format!("{context}.{field}"), "a string")),
    }
}

/// The first of `keys` present in `record`, with its value.
fn first_entry<'k, 'v>(record: &'v Mapping, keys: &[&'k str]) -> Option<(&'k str, &'v Value)> {
    keys.iter()
        .find_map(|key| record.get(*key).map(|value| (*key, value)))
}

fn as_mapping<'a>(value: &'a Value, context: &str) -> Result<&'a Mapping, LexiconFormatError> {
    match value {
        Value::Mapping(mapping) => Ok(mapping),
        _ => Err(unexpected(context, "a mapping")),
    }
}

fn unexpected(context: &str, expected: &'static str) -> LexiconFormatError {
    LexiconFormatError::UnexpectedType {
        context: context.to_string(),
        expected,
    }
}
