//! Bounded dialogue sampling for language classification.

use std::fs;
use std::path::Path;

use tracing::debug;

use super::ass::parse_ass;
use super::error::{SubtitleError, SubtitleResult};
use super::srt::dialogue_lines;
use crate::models::SubtitleType;

/// Maximum number of lines (SRT) or dialogue events (ASS/SSA) read.
pub const SAMPLE_LINE_BUDGET: usize = 400;

/// Read a bounded, markup-free dialogue sample from a text subtitle file.
///
/// Non UTF-8 bytes are replaced rather than rejected; subtitle files in
/// legacy encodings still classify reasonably.
pub fn read_dialogue_sample(path: &Path, subtype: SubtitleType) -> SubtitleResult<String> {
    if !subtype.is_text() {
        return Err(SubtitleError::NotText(subtype.to_string()));
    }

    let bytes = fs::read(path).map_err(|e| SubtitleError::read(path, e))?;
    let content = String::from_utf8_lossy(&bytes);

    let lines = match subtype {
        SubtitleType::Srt => dialogue_lines(&content, SAMPLE_LINE_BUDGET),
        _ => parse_ass(&content, SAMPLE_LINE_BUDGET).dialogue,
    };
    debug!("Sampled {} dialogue lines from {}", lines.len(), path.display());

    Ok(lines.join("\n"))
}
