//! Forced / hearing-impaired flag inference from track names.

use crate::models::PLACEHOLDER_TRACKNAME;

/// Substrings that mark a track as forced (signs, songs, forced-only).
pub const FORCED_KEYWORDS: &[&str] = &["signs", "songs", "forc", "s&s"];

/// Whole filename tokens that mark a sidecar as hearing-impaired.
pub const SDH_TOKENS: &[&str] = &["hi", "cc", "sdh"];

/// Decide whether a track is forced.
///
/// An explicit container flag always wins. Otherwise the lower-cased name is
/// scanned for [`FORCED_KEYWORDS`]; the placeholder name never matches.
pub fn infer_forced(trackname: &str, explicit: Option<bool>) -> bool {
    if let Some(flag) = explicit {
        return flag;
    }
    if trackname.is_empty() || trackname == PLACEHOLDER_TRACKNAME {
        return false;
    }
    let lowered = trackname.to_lowercase();
    FORCED_KEYWORDS.iter().any(|keyword| lowered.contains(keyword))
}

/// Whether a filename token signals hearing-impaired subtitles.
pub fn is_sdh_token(token: &str) -> bool {
    SDH_TOKENS.iter().any(|t| t.eq_ignore_ascii_case(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_scan_is_case_insensitive() {
        assert!(infer_forced("Signs & Songs", None));
        assert!(infer_forced("FORCED", None));
        assert!(infer_forced("english s&s", None));
        assert!(!infer_forced("French Dub", None));
    }

    #[test]
    fn explicit_flag_wins() {
        assert!(!infer_forced("Signs", Some(false)));
        assert!(infer_forced("Dialogue", Some(true)));
    }

    #[test]
    fn placeholder_never_forced() {
        assert!(!infer_forced("und", None));
        assert!(!infer_forced("", None));
    }

    #[test]
    fn sdh_tokens() {
        assert!(is_sdh_token("SDH"));
        assert!(is_sdh_token("hi"));
        assert!(is_sdh_token("CC"));
        assert!(!is_sdh_token("hindi"));
    }
}
