//! Subtitle text access.
//!
//! The crate never renders or rewrites subtitles; it only reads enough of
//! a text subtitle to classify its language, pick up an ASS title, or tidy
//! an ASS header.

pub mod ass;
mod error;
pub mod sample;
pub mod srt;

pub use ass::{clean_header, parse_ass, strip_override_tags, AssDocument};
pub use error::{SubtitleError, SubtitleResult};
pub use sample::{read_dialogue_sample, SAMPLE_LINE_BUDGET};
