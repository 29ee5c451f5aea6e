//! Data models for subtitle tracks.

mod enums;
mod episode;
mod track;

pub use enums::{RemuxDecision, SubtitleType};
pub use episode::{normalize_release, EpisodeNumber, ModelError, ANONYMOUS_RELEASE};
pub use track::{sanitize_trackname, FilenameFields, TrackInfo, PLACEHOLDER_TRACKNAME};
