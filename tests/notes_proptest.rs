//! Property-based tests for note line classification
//!
//! These tests check the line grammar against generated lines:
//! - lines without markers or `=` come back as trimmed text with no tags
//! - tags come back in source order and never leak into the text
//! - blank and whitespace-only lines never produce items

use languagebuddy::notes::{classify_line, parse_str, Tag};
use proptest::prelude::*;

/// Free text without tag markers or equivalence signs
fn plain_text_strategy() -> impl Strategy<Value = String> {
    "[ \t]{0,3}[a-zA-Zčćđšž,.!?()' -]{0,30}[ \t]{0,3}"
}

/// A single word (no whitespace, no markers)
fn word_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Zčćđšž]{1,8}"
}

fn tag_strategy() -> impl Strategy<Value = Tag> {
    prop::sample::select(Tag::ALL.to_vec())
}

/// Lines made of words and tag markers, interleaved
fn tagged_line_strategy() -> impl Strategy<Value = (String, Vec<Tag>)> {
    prop::collection::vec((word_strategy(), prop::option::of(tag_strategy())), 1..8).prop_map(
        |parts| {
            let mut line = Vec::new();
            let mut tags = Vec::new();
            for (word, tag) in parts {
                line.push(word);
                if let Some(tag) = tag {
                    line.push(tag.marker());
                    tags.push(tag);
                }
            }
            (line.join(" "), tags)
        },
    )
}

/// Note lines paired with whether they are blank
fn note_lines_strategy() -> impl Strategy<Value = Vec<(String, bool)>> {
    prop::collection::vec(
        prop_oneof![
            "[ \t]{0,4}".prop_map(|line| (line, true)),
            "[a-z]{1,10}( #v)?".prop_map(|line| (line, false)),
        ],
        0..20,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn untagged_lines_are_trimmed_text(line in plain_text_strategy()) {
        let item = classify_line(&line).unwrap();
        prop_assert!(item.tags.is_empty());
        prop_assert_eq!(item.text, line.trim());
        prop_assert!(item.vocab.is_none());
    }

    #[test]
    fn tags_keep_source_order((line, expected) in tagged_line_strategy()) {
        let item = classify_line(&line).unwrap();
        prop_assert_eq!(&item.tags, &expected);
        prop_assert!(!item.text.contains('#'), "marker left in {:?}", item.text);
    }

    #[test]
    fn blank_lines_contribute_nothing(lines in note_lines_strategy()) {
        let source = lines
            .iter()
            .map(|(line, _)| line.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        let expected: Vec<&str> = lines
            .iter()
            .filter(|(_, blank)| !blank)
            .map(|(line, _)| line.trim_end_matches(" #v"))
            .collect();

        let data = parse_str(&source).unwrap();
        let texts: Vec<&str> = data.iter().map(|item| item.text.as_str()).collect();
        prop_assert_eq!(texts, expected);
    }
}
