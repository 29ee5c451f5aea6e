//! Core enums used throughout the application.

use serde::{Deserialize, Serialize};

/// Normalized subtitle format.
///
/// Mapped from a container codec identifier (e.g. `S_TEXT/ASS`) or a file
/// extension. `Unsupported` carries an empty extension tag: such tracks can
/// still be exported but are skipped by sync and content classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubtitleType {
    /// HDMV Presentation Graphic Stream (Blu-ray bitmaps).
    Sup,
    /// Advanced SubStation Alpha.
    Ass,
    /// SubStation Alpha.
    Ssa,
    /// SubRip text.
    Srt,
    /// VobSub bitmaps.
    Sub,
    /// Universal Subtitle Format.
    Usf,
    /// WebVTT.
    Vtt,
    /// Timed Text Markup Language.
    Ttml,
    /// Unknown codec.
    #[default]
    Unsupported,
}

/// Codec identifier fragments, checked in order. First hit wins.
const CODEC_FRAGMENTS: &[(&str, SubtitleType)] = &[
    ("PGS", SubtitleType::Sup),
    ("ASS", SubtitleType::Ass),
    ("SSA", SubtitleType::Ssa),
    ("UTF8", SubtitleType::Srt),
    ("ASCII", SubtitleType::Srt),
    ("VOBSUB", SubtitleType::Sub),
    ("USF", SubtitleType::Usf),
    ("WEBVTT", SubtitleType::Vtt),
    ("TIMED TEXT", SubtitleType::Ttml),
];

impl SubtitleType {
    /// Normalize a container codec identifier.
    ///
    /// Case-insensitive substring match, so both `S_TEXT/ASS` and the
    /// human-readable `SubStationAlpha` style names resolve.
    pub fn from_codec_id(codec_id: &str) -> Self {
        let upper = codec_id.to_uppercase();
        CODEC_FRAGMENTS
            .iter()
            .find(|(fragment, _)| upper.contains(fragment))
            .map(|(_, kind)| *kind)
            .unwrap_or(Self::Unsupported)
    }

    /// Parse a file extension (without the leading dot).
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "sup" => Self::Sup,
            "ass" => Self::Ass,
            "ssa" => Self::Ssa,
            "srt" => Self::Srt,
            "sub" => Self::Sub,
            "usf" => Self::Usf,
            "vtt" => Self::Vtt,
            "ttml" => Self::Ttml,
            _ => Self::Unsupported,
        }
    }

    /// Short extension tag; empty for `Unsupported`.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Sup => "sup",
            Self::Ass => "ass",
            Self::Ssa => "ssa",
            Self::Srt => "srt",
            Self::Sub => "sub",
            Self::Usf => "usf",
            Self::Vtt => "vtt",
            Self::Ttml => "ttml",
            Self::Unsupported => "",
        }
    }

    /// Whether dialogue text can be sampled for language classification.
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Ass | Self::Ssa | Self::Srt)
    }

    /// Whether the format can serve as a realignment reference or input.
    /// Bitmap formats cannot.
    pub fn is_syncable(&self) -> bool {
        !matches!(self, Self::Sup | Self::Sub | Self::Unsupported)
    }

    pub fn is_supported(&self) -> bool {
        *self != Self::Unsupported
    }
}

impl std::fmt::Display for SubtitleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// Outcome of comparing an external track against the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemuxDecision {
    /// The matcher has not looked at this track yet.
    #[default]
    Unevaluated,
    /// No equivalent embedded track; the track should be muxed in.
    Remux,
    /// An equivalent track already exists in the container.
    AlreadyPresent,
}

impl RemuxDecision {
    /// Tri-state view: `None` until evaluated.
    pub fn to_remux(&self) -> Option<bool> {
        match self {
            Self::Unevaluated => None,
            Self::Remux => Some(true),
            Self::AlreadyPresent => Some(false),
        }
    }
}
