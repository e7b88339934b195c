//! Verbs and their aspect pairing
//!
//! Every verb is learned as a perfective/imperfective pair. A [`VerbEntry`]
//! can only be obtained from a [`VerbEntryBuilder`], which refuses to build
//! until both aspects and the shared English gloss are present.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Grammatical aspect of a verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Aspect {
    Perfective,
    Imperfective,
}

impl Aspect {
    pub const ALL: [Aspect; 2] = [Aspect::Perfective, Aspect::Imperfective];

    /// Short code used as the sub-record key in lexicon sources.
    pub fn code(self) -> &'static str {
        match self {
            Aspect::Perfective => "pf",
            Aspect::Imperfective => "impf",
        }
    }
}

impl fmt::Display for Aspect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Aspect::Perfective => f.write_str("perfective"),
            Aspect::Imperfective => f.write_str("imperfective"),
        }
    }
}

/// One aspect of a verb.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerbAspectEntry {
    pub infinitive: String,
    /// An example conjugated form, e.g. first person singular.
    pub conjugated: String,
    pub english: Vec<String>,
}

/// A verb with both of its aspects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerbEntry {
    perfective: VerbAspectEntry,
    imperfective: VerbAspectEntry,
}

impl VerbEntry {
    pub fn builder() -> VerbEntryBuilder {
        VerbEntryBuilder::default()
    }

    pub fn perfective(&self) -> &VerbAspectEntry {
        &self.perfective
    }

    pub fn imperfective(&self) -> &VerbAspectEntry {
        &self.imperfective
    }

    pub fn aspect(&self, aspect: Aspect) -> &VerbAspectEntry {
        match aspect {
            Aspect::Perfective => &self.perfective,
            Aspect::Imperfective => &self.imperfective,
        }
    }

    /// The gloss shared by both aspects.
    pub fn english(&self) -> &[String] {
        &self.perfective.english
    }
}

/// What a [`VerbEntryBuilder`] was still missing when asked to build.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IncompleteVerb {
    #[error("missing {0} aspect")]
    MissingAspect(Aspect),
    #[error("missing English gloss")]
    MissingGloss,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct AspectForms {
    infinitive: String,
    conjugated: String,
}

/// Collects the two aspect sub-records of a verb, then checks completeness.
#[derive(Debug, Clone, Default)]
pub struct VerbEntryBuilder {
    perfective: Option<AspectForms>,
    imperfective: Option<AspectForms>,
    english: Option<Vec<String>>,
}

impl VerbEntryBuilder {
    /// Record the forms of one aspect, replacing any earlier forms for it.
    pub fn aspect(
        mut self,
        aspect: Aspect,
        infinitive: impl Into<String>,
        conjugated: impl Into<String>,
    ) -> Self {
        let forms = Some(AspectForms {
            infinitive: infinitive.into(),
            conjugated: conjugated.into(),
        });
        match aspect {
            Aspect::Perfective => self.perfective = forms,
            Aspect::Imperfective => self.imperfective = forms,
        }
        self
    }

    /// Set the gloss shared by both aspects.
    pub fn english<I, S>(mut self, glosses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.english = Some(glosses.into_iter().map(Into::into).collect());
        self
    }

    pub fn build(self) -> Result<VerbEntry, IncompleteVerb> {
        let perfective = self
            .perfective
            .ok_or(IncompleteVerb::MissingAspect(Aspect::Perfective))?;
        let imperfective = self
            .imperfective
            .ok_or(IncompleteVerb::MissingAspect(Aspect::Imperfective))?;
        let english = self
            .english
            .filter(|glosses| !glosses.is_empty())
            .ok_or(IncompleteVerb::MissingGloss)?;

        Ok(VerbEntry {
            perfective: VerbAspectEntry {
                infinitive: perfective.infinitive,
                conjugated: perfective.conjugated,
                english: english.clone(),
            },
            imperfective: VerbAspectEntry {
                infinitive: imperfective.infinitive,
                conjugated: imperfective.conjugated,
                english,
            },
        })
    }
}
