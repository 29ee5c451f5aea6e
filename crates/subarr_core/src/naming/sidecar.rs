//! Hints carried by the names of subtitle files sitting next to a video.
//!
//! `Show.S01E01.mkv` + `Show.S01E01.Full.en.forced.srt` gives trackname
//! `Full`, language `en`, forced.

use std::path::Path;

use crate::flags::is_sdh_token;

/// What a sidecar filename says about its track. Absent values are left to
/// the other resolvers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SidecarHints {
    pub trackname: Option<String>,
    pub language: Option<String>,
    pub is_default: bool,
    pub is_forced: bool,
    pub is_sdh: bool,
}

/// Parse the name of `subtitle` relative to `video`.
pub fn parse_sidecar_name(video: &Path, subtitle: &Path) -> SidecarHints {
    let stem = video
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = subtitle
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let rest = name
        .strip_prefix(stem.as_str())
        .map(|r| r.strip_prefix('.').unwrap_or(r))
        .unwrap_or(name.as_str());
    let rest = match rest.rfind('.') {
        Some(idx) => &rest[..idx],
        None => "",
    };

    let mut hints = SidecarHints::default();
    let mut remaining = Vec::new();
    for token in rest.split('.').filter(|t| !t.is_empty()) {
        if token.eq_ignore_ascii_case("default") {
            hints.is_default = true;
        } else if token.eq_ignore_ascii_case("forced") {
            hints.is_forced = true;
        } else if is_sdh_token(token) {
            hints.is_sdh = true;
        } else {
            remaining.push(token);
        }
    }

    match remaining.as_slice() {
        [trackname, language] => {
            hints.trackname = Some(trackname.to_string());
            hints.language = Some(language.to_string());
        }
        [language] => hints.language = Some(language.to_string()),
        _ => {}
    }

    hints
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIDEO: &str = "/tv/Show/Show.S01E01.1080p.mkv";

    fn parse(sub: &str) -> SidecarHints {
        parse_sidecar_name(Path::new(VIDEO), &Path::new("/tv/Show").join(sub))
    }

    #[test]
    fn language_only() {
        let hints = parse("Show.S01E01.1080p.fr.srt");
        assert_eq!(hints.language.as_deref(), Some("fr"));
        assert_eq!(hints.trackname, None);
    }

    #[test]
    fn trackname_and_language_with_flags() {
        let hints = parse("Show.S01E01.1080p.Full.en.Forced.SDH.ass");
        assert_eq!(hints.trackname.as_deref(), Some("Full"));
        assert_eq!(hints.language.as_deref(), Some("en"));
        assert!(hints.is_forced);
        assert!(hints.is_sdh);
        assert!(!hints.is_default);
    }

    #[test]
    fn keywords_match_whole_tokens_only() {
        let hints = parse("Show.S01E01.1080p.hindi.srt");
        assert_eq!(hints.language.as_deref(), Some("hindi"));
        assert!(!hints.is_sdh);

        let hints = parse("Show.S01E01.1080p.default.cc.srt");
        assert!(hints.is_default);
        assert!(hints.is_sdh);
        assert_eq!(hints.language, None);
    }

    #[test]
    fn too_many_tokens_is_under_specified() {
        let hints = parse("Show.S01E01.1080p.a.b.c.srt");
        assert_eq!(hints, SidecarHints::default());
    }

    #[test]
    fn bare_sidecar_has_no_hints() {
        assert_eq!(parse("Show.S01E01.1080p.srt"), SidecarHints::default());
    }
}
