//! Subtitle track listing using `mkvmerge -J`.

use std::path::Path;

use serde_json::Value;

use super::error::{ExtractionError, ExtractionResult};
use crate::models::SubtitleType;
use crate::tools::Toolbox;

/// One subtitle stream as reported by the container inspector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerTrack {
    pub id: u64,
    pub codec_id: String,
    pub name: Option<String>,
    pub forced: Option<bool>,
    pub language_ietf: Option<String>,
    pub language: Option<String>,
    pub hearing_impaired: Option<bool>,
}

impl ContainerTrack {
    /// Normalized format, from the codec id or else the codec display name.
    pub fn subtype(&self) -> SubtitleType {
        SubtitleType::from_codec_id(&self.codec_id)
    }
}

/// Probe a container and return its subtitle tracks in container order.
pub fn probe_subtitles(tools: &Toolbox<'_>, path: &Path) -> ExtractionResult<Vec<ContainerTrack>> {
    if !path.exists() {
        return Err(ExtractionError::FileNotFound(path.to_path_buf()));
    }

    tracing::debug!("Probing file: {}", path.display());

    let args = vec!["-J".to_string(), path.display().to_string()];
    let output = tools
        .runner
        .run(&tools.mkvmerge, &args, None)
        .and_then(|out| out.ensure_success(&tools.mkvmerge))
        .map_err(|e| ExtractionError::inspection(path, e.to_string()))?;

    let json: Value = serde_json::from_str(&output.stdout)
        .map_err(|e| ExtractionError::inspection(path, format!("invalid JSON: {}", e)))?;

    parse_probe_json(&json, path)
}

/// Pull subtitle entries out of `mkvmerge -J` JSON.
pub fn parse_probe_json(json: &Value, path: &Path) -> ExtractionResult<Vec<ContainerTrack>> {
    let tracks = json
        .get("tracks")
        .and_then(|t| t.as_array())
        .ok_or_else(|| ExtractionError::inspection(path, "no track list in report"))?;

    Ok(tracks
        .iter()
        .filter(|t| t.get("type").and_then(|v| v.as_str()) == Some("subtitles"))
        .filter_map(parse_subtitle_track)
        .collect())
}

fn parse_subtitle_track(track: &Value) -> Option<ContainerTrack> {
    let id = track.get("id")?.as_u64()?;
    let properties = track.get("properties");

    let string_prop = |key: &str| {
        properties
            .and_then(|p| p.get(key))
            .and_then(|v| v.as_str())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
    };
    let bool_prop = |key: &str| properties.and_then(|p| p.get(key)).and_then(|v| v.as_bool());

    let codec_id = string_prop("codec_id")
        .or_else(|| track.get("codec").and_then(|c| c.as_str()).map(|s| s.to_string()))
        .unwrap_or_default();

    Some(ContainerTrack {
        id,
        codec_id,
        name: string_prop("track_name"),
        forced: bool_prop("forced_track"),
        language_ietf: string_prop("language_ietf"),
        language: string_prop("language"),
        hearing_impaired: bool_prop("flag_hearing_impaired"),
    })
}
