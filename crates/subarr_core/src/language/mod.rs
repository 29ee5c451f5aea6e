//! Language tags, names and the resolution cascade.

pub mod classifier;
pub mod names;
pub mod resolver;
pub mod tags;

pub use classifier::{Classification, LanguageClassifier, WhatlangClassifier};
pub use resolver::{
    is_default_language, DialogueSource, LanguageEvidence, LanguageResolver, LanguageSource,
    NoDialogue, ResolvedLanguage,
};
pub use tags::{standardize, LanguageTag, TagError, TagResult, UNDETERMINED};
