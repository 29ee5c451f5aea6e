//! External subtitle files sitting next to a video.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::options::EpisodeJob;
use super::PipelineContext;
use crate::flags::infer_forced;
use crate::language::{LanguageEvidence, LanguageResolver};
use crate::models::{SubtitleType, TrackInfo, PLACEHOLDER_TRACKNAME};
use crate::naming::parse_sidecar_name;
use crate::subtitles::{clean_header, parse_ass, read_dialogue_sample};

/// Extensions picked up as sidecars.
pub const SIDECAR_EXTENSIONS: &[&str] = &["ass", "srt", "ssa", "sub", "sup"];

/// Sidecar files for `video`: same folder, name starting with the video's
/// stem, known subtitle extension. Sorted by name.
pub fn list_sidecar_tracks(video: &Path) -> Vec<PathBuf> {
    let (Some(dir), Some(stem)) = (video.parent(), video.file_stem()) else {
        return Vec::new();
    };
    let stem = stem.to_string_lossy();
    let dir = if dir.as_os_str().is_empty() {
        Path::new(".")
    } else {
        dir
    };
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut found: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let ext = path
                .extension()
                .map(|e| e.to_string_lossy().to_lowercase())
                .unwrap_or_default();
            name.starts_with(stem.as_ref()) && SIDECAR_EXTENSIONS.contains(&ext.as_str())
        })
        .collect();
    found.sort();
    found
}

/// Title from an ASS/SSA header, if the file has a usable one.
fn ass_title(path: &Path) -> Option<String> {
    let bytes = fs::read(path).ok()?;
    let mut doc = parse_ass(&String::from_utf8_lossy(&bytes), 0);
    clean_header(&mut doc.script_info);
    doc.title().map(str::to_string)
}

/// Build the candidate track for one sidecar without asking anyone.
///
/// Name hints come first; text formats fall back to the ASS title for the
/// name and to content classification for the language.
pub fn build_sidecar_track(
    ctx: &PipelineContext<'_>,
    video: &Path,
    sidecar: &Path,
    job: &EpisodeJob,
) -> TrackInfo {
    let subtype = sidecar
        .extension()
        .map(|e| SubtitleType::from_extension(&e.to_string_lossy()))
        .unwrap_or_default();
    let hints = parse_sidecar_name(video, sidecar);

    let trackname = hints
        .trackname
        .clone()
        .or_else(|| {
            matches!(subtype, SubtitleType::Ass | SubtitleType::Ssa)
                .then(|| ass_title(sidecar))
                .flatten()
        })
        .unwrap_or_else(|| PLACEHOLDER_TRACKNAME.to_string());

    let sample = || {
        read_dialogue_sample(sidecar, subtype)
            .map_err(|e| warn!("{}: {}", sidecar.display(), e))
            .ok()
    };
    let evidence = LanguageEvidence {
        ietf: hints.language.as_deref(),
        legacy: None,
        trackname: Some(trackname.as_str()),
        subtype,
    };
    let resolved = LanguageResolver::new(ctx.classifier).resolve(&evidence, &sample);

    let track = TrackInfo::new(job.season, job.episode)
        .with_filepath(sidecar)
        .with_release(job.release.clone())
        .with_trackname(&trackname)
        .with_subtype(subtype)
        .with_default(hints.is_default)
        .with_forced(infer_forced(&trackname, hints.is_forced.then_some(true)))
        .with_sdh(hints.is_sdh)
        .with_language(resolved.tag);

    debug!(
        "Sidecar {}: {} {} ({:?})",
        sidecar.display(),
        track.combined_name(),
        track.language,
        resolved.source
    );
    track
}
