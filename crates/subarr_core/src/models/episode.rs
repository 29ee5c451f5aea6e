//! Season/episode numbering and release group values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while building model values from raw input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("'{0}' is not a valid season or episode number")]
    InvalidNumber(String),
}

/// Season or episode index, rendered zero-padded to at least two digits.
///
/// Only ever built from a parseable integer, so the rendered form is always
/// `01`, `12`, `103`, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EpisodeNumber(u32);

impl EpisodeNumber {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl FromStr for EpisodeNumber {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(Self)
            .map_err(|_| ModelError::InvalidNumber(s.to_string()))
    }
}

impl fmt::Display for EpisodeNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

impl TryFrom<String> for EpisodeNumber {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<EpisodeNumber> for String {
    fn from(value: EpisodeNumber) -> Self {
        value.to_string()
    }
}

impl From<u32> for EpisodeNumber {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Release group placeholder used when none is known.
pub const ANONYMOUS_RELEASE: &str = "Anonymous";

/// Normalize a release group name.
///
/// Media managers report a missing group as absent, empty, or the literal
/// string `None`; all of these collapse to [`ANONYMOUS_RELEASE`].
pub fn normalize_release(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        None | Some("") | Some("None") => ANONYMOUS_RELEASE.to_string(),
        Some(group) => group.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_zero_padded() {
        assert_eq!("1".parse::<EpisodeNumber>().unwrap().to_string(), "01");
        assert_eq!("20".parse::<EpisodeNumber>().unwrap().to_string(), "20");
        assert_eq!("007".parse::<EpisodeNumber>().unwrap().to_string(), "07");
        assert_eq!(EpisodeNumber::new(104).to_string(), "104");
    }

    #[test]
    fn non_numeric_is_recoverable_error() {
        let err = "pilot".parse::<EpisodeNumber>().unwrap_err();
        assert_eq!(err, ModelError::InvalidNumber("pilot".to_string()));
        assert!("".parse::<EpisodeNumber>().is_err());
        assert!("-3".parse::<EpisodeNumber>().is_err());
    }

    #[test]
    fn release_defaults_to_anonymous() {
        assert_eq!(normalize_release(None), "Anonymous");
        assert_eq!(normalize_release(Some("")), "Anonymous");
        assert_eq!(normalize_release(Some("None")), "Anonymous");
        assert_eq!(normalize_release(Some("Retr0")), "Retr0");
    }

    #[test]
    fn serializes_as_padded_string() {
        let json = serde_json::to_string(&EpisodeNumber::new(3)).unwrap();
        assert_eq!(json, "\"03\"");
        let back: EpisodeNumber = serde_json::from_str(&json).unwrap();
        assert_eq!(back, EpisodeNumber::new(3));
    }
}
