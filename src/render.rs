//! Output rendering for lessons and lexicons.

use crate::lesson::Lesson;
use crate::lexicon::{Lexicon, LexiconTerm};
use crate::notes::LessonItem;
use crate::settings::OutputFormat;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("cannot render JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("cannot render YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Values that have a human-readable text form besides their serde form.
pub trait Render: Serialize {
    fn to_text(&self) -> String;

    fn render(&self, format: OutputFormat) -> Result<String, RenderError> {
        let output = match format {
            OutputFormat::Text => self.to_text(),
            OutputFormat::Json => serde_json::to_string_pretty(self)? + "\n",
            OutputFormat::Yaml => serde_yaml::to_string(self)?,
        };
        Ok(output)
    }
}

impl Render for Lesson {
    fn to_text(&self) -> String {
        let mut out = format!(
            "lesson: {} -> {} ({} items)\n",
            self.reference,
            self.foreign,
            self.data.len()
        );
        for item in &self.data {
            out.push_str(&item_line(item));
            out.push('\n');
        }
        out
    }
}

fn item_line(item: &LessonItem) -> String {
    if item.tags.is_empty() {
        return item.text.clone();
    }
    let tags: Vec<&str> = item.tags.iter().map(|tag| tag.as_str()).collect();
    format!("[{}] {}", tags.join(" "), item.text)
        .trim_end()
        .to_string()
}

impl Render for Lexicon {
    fn to_text(&self) -> String {
        let mut out = format!("verbs ({})\n", self.verbs().len());
        for verb in self.verbs() {
            let pf = verb.perfective();
            let impf = verb.imperfective();
            out.push_str(&format!(
                "  {} ({}) / {} ({}): {}\n",
                pf.infinitive,
                pf.conjugated,
                impf.infinitive,
                impf.conjugated,
                verb.english().join(", ")
            ));
        }
        push_terms(&mut out, "adjectives", self.adjectives());
        push_terms(&mut out, "adverbs", self.adverbs());
        push_terms(&mut out, "sayings", self.sayings());
        out
    }
}

fn push_terms(out: &mut String, heading: &str, terms: &[LexiconTerm]) {
    out.push_str(&format!("{heading} ({})\n", terms.len()));
    for term in terms {
        out.push_str(&format!("  {}: {}\n", term.word, term.english.join(", ")));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;
    use crate::notes::parse_str;

    const ONE_VERB: &str = "\
verbs:
  - pf: {inf: ubiti, conj: ubijem}
    impf: {inf: ubijati, conj: ubijam}
    eng: [to kill]
";

    fn lesson() -> Lesson {
        let data = parse_str("#v #pf ubiti = to kill (sl.)\n\nDobar dan\n#rule\n").unwrap();
        Lesson::new(Language::English, Language::Croatian, data)
    }

    #[test]
    fn lesson_as_text() {
        insta::assert_snapshot!(lesson().to_text(), @r"
        lesson: english -> croatian (3 items)
        [v pf] ubiti = to kill (sl.)
        Dobar dan
        [rule]
        ");
    }

    #[test]
    fn lesson_as_json() {
        let json = lesson().render(OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["reference"], "english");
        assert_eq!(value["data"]["items"][0]["tags"], serde_json::json!(["v", "pf"]));
        assert_eq!(value["data"]["items"][0]["vocab"]["target"], "to kill");
        assert_eq!(value["data"]["items"][0]["vocab"]["remarks"], serde_json::json!(["sl."]));
        assert!(value["data"]["items"][1].get("vocab").is_none());
    }

    #[test]
    fn lexicon_as_text() {
        let lexicon = Lexicon::load(&format!(
            "{ONE_VERB}adjectives:\n  dobar: [good, kind]\nadverbs: {{}}\nsayings: []\n"
        ))
        .unwrap();

        insta::assert_snapshot!(lexicon.to_text(), @r"
        verbs (1)
          ubiti (ubijem) / ubijati (ubijam): to kill
        adjectives (1)
          dobar: good, kind
        adverbs (0)
        sayings (0)
        ");
    }

    #[test]
    fn lexicon_as_yaml_keeps_aspects() {
        let lexicon = Lexicon::load(&format!(
            "{ONE_VERB}adjectives: {{}}\nadverbs: {{}}\nsayings: []\n"
        ))
        .unwrap();
        let yaml = lexicon.render(OutputFormat::Yaml).unwrap();
        let value: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(value["verbs"][0]["perfective"]["infinitive"].as_str(), Some("ubiti"));
        assert_eq!(value["verbs"][0]["imperfective"]["conjugated"].as_str(), Some("ubijam"));
    }
}
