//! The canonical track value.
//!
//! A `TrackInfo` describes one subtitle stream, either embedded in a
//! container (`track_id` set) or sitting on disk as a file. Derived strings
//! (combined name, filename tokens, location parts) are computed on demand
//! and never stored.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::enums::{RemuxDecision, SubtitleType};
use super::episode::{normalize_release, EpisodeNumber, ANONYMOUS_RELEASE};
use crate::language::LanguageTag;

/// Track name used when nothing better is known.
pub const PLACEHOLDER_TRACKNAME: &str = "und";

/// Make a track name safe to embed in a filename. Blank names become the
/// placeholder.
pub fn sanitize_trackname(name: &str) -> String {
    let name = name.trim();
    if name.is_empty() {
        return PLACEHOLDER_TRACKNAME.to_string();
    }
    name.replace('/', "#")
}

/// One subtitle track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackInfo {
    /// Stream id inside the container; `None` for file-based tracks.
    pub track_id: Option<u64>,
    pub filepath: PathBuf,
    pub is_default: bool,
    pub is_forced: bool,
    pub is_sdh: bool,
    pub season: EpisodeNumber,
    pub episode: EpisodeNumber,
    pub trackname: String,
    pub release: String,
    pub subtype: SubtitleType,
    pub language: LanguageTag,
    pub remux: RemuxDecision,
    /// Offset applied by an accepted realignment, in milliseconds.
    pub delay_ms: i64,
}

impl TrackInfo {
    pub fn new(season: EpisodeNumber, episode: EpisodeNumber) -> Self {
        Self {
            track_id: None,
            filepath: PathBuf::new(),
            is_default: false,
            is_forced: false,
            is_sdh: false,
            season,
            episode,
            trackname: PLACEHOLDER_TRACKNAME.to_string(),
            release: ANONYMOUS_RELEASE.to_string(),
            subtype: SubtitleType::Unsupported,
            language: LanguageTag::und(),
            remux: RemuxDecision::Unevaluated,
            delay_ms: 0,
        }
    }

    pub fn with_track_id(mut self, id: u64) -> Self {
        self.track_id = Some(id);
        self
    }

    pub fn with_filepath(mut self, path: impl Into<PathBuf>) -> Self {
        self.filepath = path.into();
        self
    }

    pub fn with_default(mut self, value: bool) -> Self {
        self.is_default = value;
        self
    }

    pub fn with_forced(mut self, value: bool) -> Self {
        self.is_forced = value;
        self
    }

    pub fn with_sdh(mut self, value: bool) -> Self {
        self.is_sdh = value;
        self
    }

    pub fn with_trackname(mut self, name: &str) -> Self {
        self.trackname = sanitize_trackname(name);
        self
    }

    /// Missing groups become `Anonymous`; `/` is replaced like in track
    /// names.
    pub fn with_release(mut self, release: impl AsRef<str>) -> Self {
        self.release = normalize_release(Some(release.as_ref())).replace('/', "#");
        self
    }

    pub fn with_subtype(mut self, subtype: SubtitleType) -> Self {
        self.subtype = subtype;
        self
    }

    pub fn with_language(mut self, language: LanguageTag) -> Self {
        self.language = language;
        self
    }

    /// `[release]-[trackname]`, or the track name itself when it already
    /// has that shape.
    pub fn combined_name(&self) -> String {
        if regex!(r"^\[.+\]-\[.+\]").is_match(&self.trackname) {
            self.trackname.clone()
        } else {
            format!("[{}]-[{}]", self.release, self.trackname)
        }
    }

    pub fn default_token(&self) -> &'static str {
        if self.is_default {
            "default."
        } else {
            ""
        }
    }

    pub fn forced_token(&self) -> &'static str {
        if self.is_forced {
            "forced."
        } else {
            ""
        }
    }

    pub fn sdh_token(&self) -> &'static str {
        if self.is_sdh {
            "sdh."
        } else {
            ""
        }
    }

    pub fn basedir(&self) -> Option<&Path> {
        self.filepath.parent()
    }

    pub fn filename(&self) -> Option<String> {
        self.filepath
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
    }

    /// True when this track came out of a container rather than a file.
    pub fn is_embedded(&self) -> bool {
        self.track_id.is_some()
    }

    /// The fields a canonical filename carries.
    pub fn filename_fields(&self) -> FilenameFields {
        FilenameFields {
            season: self.season,
            episode: self.episode,
            combined_name: self.combined_name(),
            is_default: self.is_default,
            language: self.language.clone(),
            is_forced: self.is_forced,
            is_sdh: self.is_sdh,
            subtype: self.subtype,
        }
    }
}

/// Projection of a track onto what its canonical filename encodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilenameFields {
    pub season: EpisodeNumber,
    pub episode: EpisodeNumber,
    pub combined_name: String,
    pub is_default: bool,
    pub language: LanguageTag,
    pub is_forced: bool,
    pub is_sdh: bool,
    pub subtype: SubtitleType,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track() -> TrackInfo {
        TrackInfo::new(EpisodeNumber::new(1), EpisodeNumber::new(20))
    }

    #[test]
    fn new_track_defaults() {
        let t = track();
        assert_eq!(t.release, "Anonymous");
        assert_eq!(t.trackname, "und");
        assert!(t.language.is_undetermined());
        assert_eq!(t.remux, RemuxDecision::Unevaluated);
        assert_eq!(t.delay_ms, 0);
        assert!(!t.is_embedded());
    }

    #[test]
    fn combined_name_wraps_once() {
        let t = track().with_release("Retr0").with_trackname("Full");
        assert_eq!(t.combined_name(), "[Retr0]-[Full]");

        let again = t.clone().with_trackname(&t.combined_name());
        assert_eq!(again.combined_name(), "[Retr0]-[Full]");
    }

    #[test]
    fn trackname_is_filesystem_safe() {
        let t = track().with_trackname("Signs/Songs");
        assert_eq!(t.trackname, "Signs#Songs");
        assert_eq!(track().with_trackname("  ").trackname, "und");
    }

    #[test]
    fn release_is_normalized_and_filesystem_safe() {
        assert_eq!(track().with_release("AC/DC Subs").release, "AC#DC Subs");
        assert_eq!(track().with_release("").release, "Anonymous");
        assert_eq!(track().with_release(" None ").release, "Anonymous");

        let t = track().with_release("").with_trackname("Full");
        assert_eq!(t.combined_name(), "[Anonymous]-[Full]");
    }

    #[test]
    fn tokens_are_zero_width_when_false() {
        let t = track();
        assert_eq!(t.default_token(), "");
        assert_eq!(t.forced_token(), "");
        assert_eq!(t.sdh_token(), "");

        let t = t.with_default(true).with_forced(true).with_sdh(true);
        assert_eq!(t.default_token(), "default.");
        assert_eq!(t.forced_token(), "forced.");
        assert_eq!(t.sdh_token(), "sdh.");
    }

    #[test]
    fn location_parts_derive_from_filepath() {
        let t = track().with_filepath("/library/42/S01/E20/sub.ass");
        assert_eq!(t.basedir(), Some(Path::new("/library/42/S01/E20")));
        assert_eq!(t.filename().as_deref(), Some("sub.ass"));
    }
}
