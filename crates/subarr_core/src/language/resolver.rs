//! Language resolution cascade.
//!
//! Stages run in a fixed order and stop at the first that yields a
//! determined tag:
//!
//! 1. explicit IETF tag from the container
//! 2. explicit legacy (ISO 639-2) tag from the container
//! 3. a language name found in the track name
//! 4. classification of a dialogue sample (text formats only)
//!
//! Nothing here fails: when every stage comes up empty the result is `und`.

use tracing::{debug, info, warn};

use super::classifier::LanguageClassifier;
use super::names::find_by_name;
use super::tags::LanguageTag;
use crate::models::{SubtitleType, PLACEHOLDER_TRACKNAME};

/// Which stage produced a resolved tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageSource {
    ExplicitIetf,
    ExplicitLegacy,
    TrackName,
    Content,
    Unresolved,
}

/// Stages in the order they are attempted.
pub const RESOLVER_STAGES: [LanguageSource; 4] = [
    LanguageSource::ExplicitIetf,
    LanguageSource::ExplicitLegacy,
    LanguageSource::TrackName,
    LanguageSource::Content,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLanguage {
    pub tag: LanguageTag,
    pub source: LanguageSource,
}

impl ResolvedLanguage {
    pub fn unresolved() -> Self {
        Self {
            tag: LanguageTag::und(),
            source: LanguageSource::Unresolved,
        }
    }
}

/// Everything known about a track before resolution.
#[derive(Debug, Clone, Copy, Default)]
pub struct LanguageEvidence<'a> {
    pub ietf: Option<&'a str>,
    pub legacy: Option<&'a str>,
    pub trackname: Option<&'a str>,
    pub subtype: SubtitleType,
}

/// Lazily produces plain dialogue text for the content stage.
///
/// Only called when the cheaper stages failed, since producing a sample
/// usually means extracting the stream.
pub trait DialogueSource {
    fn dialogue_sample(&self) -> Option<String>;
}

impl<F> DialogueSource for F
where
    F: Fn() -> Option<String>,
{
    fn dialogue_sample(&self) -> Option<String> {
        self()
    }
}

/// A source with nothing to offer.
pub struct NoDialogue;

impl DialogueSource for NoDialogue {
    fn dialogue_sample(&self) -> Option<String> {
        None
    }
}

pub struct LanguageResolver<'c> {
    classifier: &'c dyn LanguageClassifier,
}

impl<'c> LanguageResolver<'c> {
    pub fn new(classifier: &'c dyn LanguageClassifier) -> Self {
        Self { classifier }
    }

    /// Run the cascade.
    pub fn resolve(
        &self,
        evidence: &LanguageEvidence<'_>,
        dialogue: &dyn DialogueSource,
    ) -> ResolvedLanguage {
        for stage in RESOLVER_STAGES {
            if let Some(tag) = self.attempt(stage, evidence, dialogue) {
                debug!("Language '{}' resolved from {:?}", tag, stage);
                return ResolvedLanguage { tag, source: stage };
            }
        }
        info!(
            "Language unresolved for track '{}', keeping 'und'",
            evidence.trackname.unwrap_or(PLACEHOLDER_TRACKNAME)
        );
        ResolvedLanguage::unresolved()
    }

    fn attempt(
        &self,
        stage: LanguageSource,
        evidence: &LanguageEvidence<'_>,
        dialogue: &dyn DialogueSource,
    ) -> Option<LanguageTag> {
        match stage {
            LanguageSource::ExplicitIetf => evidence.ietf.and_then(determined),
            LanguageSource::ExplicitLegacy => evidence.legacy.and_then(determined),
            LanguageSource::TrackName => evidence
                .trackname
                .filter(|name| *name != PLACEHOLDER_TRACKNAME)
                .and_then(|name| {
                    let guess = find_by_name(name);
                    if guess.is_none() {
                        debug!("No language name found in '{}'", name);
                    }
                    guess
                })
                .and_then(|raw| determined(&raw)),
            LanguageSource::Content => {
                if !evidence.subtype.is_text() {
                    return None;
                }
                let sample = dialogue.dialogue_sample()?;
                let result = self.classifier.classify(&sample)?;
                info!(
                    "Content classified as '{}' (confidence {:.2})",
                    result.code, result.confidence
                );
                determined(&result.code)
            }
            LanguageSource::Unresolved => None,
        }
    }
}

/// Standardize a raw tag, treating `und` and garbage as "nothing".
fn determined(raw: &str) -> Option<LanguageTag> {
    match LanguageTag::parse(raw) {
        Ok(tag) if tag.is_undetermined() => None,
        Ok(tag) => Some(tag),
        Err(e) => {
            warn!("Ignoring language value: {}", e);
            None
        }
    }
}

/// Whether a resolved language makes the track the default one.
///
/// Compares primary subtags, so `fr-CA` counts as default when the
/// configured default is `fr`.
pub fn is_default_language(language: &LanguageTag, default_language: &LanguageTag) -> bool {
    !language.is_undetermined() && language.primary_subtag() == default_language.primary_subtag()
}
