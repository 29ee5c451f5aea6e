//! BCP-47 language tags.
//!
//! Every language value in the crate passes through [`LanguageTag::parse`],
//! which canonicalizes casing and collapses three-letter codes onto their
//! ISO 639-1 form when one exists. `und` is a valid, terminal value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use unic_langid::LanguageIdentifier;

use super::names::{entry_for_code, LanguageEntry};

/// Tag for an undetermined language.
pub const UNDETERMINED: &str = "und";

/// Errors from tag standardization.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TagError {
    #[error("empty language tag")]
    Empty,

    #[error("invalid language tag '{tag}': {reason}")]
    Invalid { tag: String, reason: String },
}

impl TagError {
    fn invalid(tag: &str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            tag: tag.to_string(),
            reason: reason.into(),
        }
    }
}

pub type TagResult<T> = Result<T, TagError>;

/// A standardized BCP-47 language tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LanguageTag(String);

impl LanguageTag {
    /// Standardize a raw tag (`"FRE"`, `"pt_br"`, `"zh-hans-cn"`, ...).
    pub fn parse(raw: &str) -> TagResult<Self> {
        standardize(raw).map(Self)
    }

    pub fn und() -> Self {
        Self(UNDETERMINED.to_string())
    }

    pub fn is_undetermined(&self) -> bool {
        self.0 == UNDETERMINED
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First two characters of the tag.
    ///
    /// This is what track comparison and default-language inference look
    /// at, so `es-419` and `es-ES` share the primary subtag `es`.
    pub fn primary_subtag(&self) -> &str {
        match self.0.char_indices().nth(2) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }

    fn entry(&self) -> Option<&'static LanguageEntry> {
        let language = self.0.split('-').next().unwrap_or_default();
        entry_for_code(language)
    }

    /// English display name of the language subtag, if known.
    pub fn english_name(&self) -> Option<&'static str> {
        self.entry().map(|entry| entry.english)
    }

    /// Autonym of the language subtag, if known.
    pub fn native_name(&self) -> Option<&'static str> {
        self.entry().map(|entry| entry.native)
    }

    /// `"<English> # <native>"` label used for unnamed tracks.
    pub fn display_label(&self) -> Option<String> {
        let entry = self.entry()?;
        Some(format!("{} # {}", entry.english, entry.native))
    }
}

impl Default for LanguageTag {
    fn default() -> Self {
        Self::und()
    }
}

impl FromStr for LanguageTag {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for LanguageTag {
    type Error = TagError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<LanguageTag> for String {
    fn from(value: LanguageTag) -> Self {
        value.0
    }
}

/// Canonicalize a tag string.
///
/// - separators `_` become `-`
/// - the language subtag must be 2-3 letters and is mapped to ISO 639-1
///   when known; an extended language subtag (`zh-yue`) replaces it
/// - script, region and variant casing follow `unic-langid`
/// - extension and private-use sections (`-u-...`, `-x-...`) are kept,
///   lower-cased
pub fn standardize(raw: &str) -> TagResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TagError::Empty);
    }

    let normalized = trimmed.replace('_', "-");
    let subtags: Vec<&str> = normalized.split('-').collect();
    if subtags.iter().any(|subtag| subtag.is_empty()) {
        return Err(TagError::invalid(trimmed, "empty subtag"));
    }

    let mut language = subtags[0].to_ascii_lowercase();
    if !is_language_subtag(&language) {
        return Err(TagError::invalid(trimmed, "language subtag must be 2-3 letters"));
    }

    let tail_start = subtags
        .iter()
        .position(|subtag| subtag.len() == 1)
        .unwrap_or(subtags.len());
    let (head, tail) = subtags.split_at(tail_start);

    let mut rest = &head[1..];
    if let Some((extlang, after)) = rest.split_first() {
        if extlang.len() == 3 && extlang.chars().all(|c| c.is_ascii_alphabetic()) {
            language = extlang.to_ascii_lowercase();
            rest = after;
        }
    }

    if language != UNDETERMINED {
        if let Some(entry) = entry_for_code(&language) {
            language = entry.code().to_string();
        }
    }

    let head = std::iter::once(language.as_str())
        .chain(rest.iter().copied())
        .collect::<Vec<_>>()
        .join("-");
    let langid: LanguageIdentifier = head
        .parse()
        .map_err(|e| TagError::invalid(trimmed, format!("{}", e)))?;

    let mut tag = langid.to_string();
    if !tail.is_empty() {
        tag.push('-');
        tag.push_str(&canonical_tail(trimmed, tail)?);
    }
    Ok(tag)
}

fn is_language_subtag(subtag: &str) -> bool {
    (2..=3).contains(&subtag.len()) && subtag.chars().all(|c| c.is_ascii_alphabetic())
}

/// Extension and private-use subtags. Every extension singleton needs a
/// body, and `x` needs at least one private-use subtag.
fn canonical_tail(tag: &str, tail: &[&str]) -> TagResult<String> {
    let malformed = || TagError::invalid(tag, "malformed extension");
    let alphanumeric = tail
        .iter()
        .all(|subtag| subtag.len() <= 8 && subtag.chars().all(|c| c.is_ascii_alphanumeric()));
    if !alphanumeric {
        return Err(malformed());
    }

    let private = tail
        .iter()
        .position(|subtag| subtag.eq_ignore_ascii_case("x"))
        .unwrap_or(tail.len());
    let (extensions, private_use) = tail.split_at(private);
    if private_use.len() == 1 {
        return Err(malformed());
    }

    let mut needs_body = false;
    for subtag in extensions {
        if subtag.len() == 1 {
            if needs_body {
                return Err(malformed());
            }
            needs_body = true;
        } else {
            needs_body = false;
        }
    }
    if needs_body {
        return Err(malformed());
    }

    Ok(tail.join("-").to_ascii_lowercase())
}
