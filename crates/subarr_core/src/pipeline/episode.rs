//! Processing one episode end to end, and batches of episodes.
//!
//! Per episode:
//! 1. probe the container (failure aborts this episode only)
//! 2. copy large or multi-track containers to the temp folder
//! 3. resolve every embedded track and export it to the library
//! 4. optionally import sidecar files, realign and mux the new ones
//! 5. empty the scratch folders

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{error, info, warn};

use super::errors::{PipelineError, PipelineResult};
use super::inspect::track_from_container;
use super::library::episode_dir;
use super::options::{EpisodeJob, ScratchDirs};
use super::sidecars::{build_sidecar_track, list_sidecar_tracks};
use super::PipelineContext;
use crate::extraction::{extract_track, probe_subtitles};
use crate::matching::reconcile;
use crate::models::{RemuxDecision, TrackInfo};
use crate::mux::mux_tracks;
use crate::naming::encode;
use crate::sync::realign_or_keep;

/// What happened to one episode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EpisodeReport {
    pub episode: String,
    /// Embedded tracks now present in the library.
    pub exported: Vec<PathBuf>,
    /// Embedded tracks that could not be extracted.
    pub failed_tracks: usize,
    /// Sidecar tracks moved into the library.
    pub imported: Vec<PathBuf>,
    /// Sidecar tracks muxed into the video.
    pub remuxed: usize,
}

/// Outcome of a batch.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub completed: Vec<EpisodeReport>,
    pub failed: Vec<PipelineError>,
}

/// Process one episode.
pub fn export_episode(ctx: &PipelineContext<'_>, job: &EpisodeJob) -> PipelineResult<EpisodeReport> {
    if !job.video.is_file() {
        return Err(PipelineError::VideoNotFound(job.video.clone()));
    }

    // The realigner runs inside the scratch folder, so every path handed to
    // external tools must be absolute.
    let temp = absolute(&ctx.options.temp_folder)?;
    let job = EpisodeJob {
        video: absolute(&job.video)?,
        ..job.clone()
    };
    let scratch = ScratchDirs::new(&temp);
    prepare_scratch(&scratch)?;

    let result = run_episode(ctx, &job, &scratch);
    clean_scratch(&scratch);
    result
}

/// Process many episodes. A failing episode is logged and recorded; the
/// rest still run.
pub fn process_batch(ctx: &PipelineContext<'_>, jobs: &[EpisodeJob]) -> BatchReport {
    let mut report = BatchReport::default();
    for job in jobs {
        match export_episode(ctx, job) {
            Ok(done) => report.completed.push(done),
            Err(e) => {
                let e = PipelineError::for_episode(job.to_string(), e);
                error!("{}", e);
                report.failed.push(e);
            }
        }
    }
    info!(
        "Batch finished: {} done, {} failed",
        report.completed.len(),
        report.failed.len()
    );
    report
}

fn run_episode(
    ctx: &PipelineContext<'_>,
    job: &EpisodeJob,
    scratch: &ScratchDirs,
) -> PipelineResult<EpisodeReport> {
    info!("Processing {}", job);
    let mut report = EpisodeReport {
        episode: job.to_string(),
        ..Default::default()
    };

    let raw_tracks = probe_subtitles(&ctx.tools, &job.video)?;
    let source = local_source(ctx, &job.video, raw_tracks.len(), &scratch.copy)?;

    let embedded: Vec<TrackInfo> = raw_tracks
        .iter()
        .map(|raw| track_from_container(ctx, &source, job, raw, &scratch.subs))
        .collect();

    let library_dir = episode_dir(
        &ctx.options.subtitle_library,
        &job.series_id,
        job.season,
        job.episode,
    );
    fs::create_dir_all(&library_dir).map_err(|e| PipelineError::io(&library_dir, e))?;

    for track in &embedded {
        match export_embedded(ctx, &source, track, &library_dir) {
            Some(path) => report.exported.push(path),
            None => report.failed_tracks += 1,
        }
    }

    if ctx.options.export_external_tracks {
        import_sidecars(ctx, job, &source, &embedded, &library_dir, scratch, &mut report)?;
    }

    info!(
        "{}: {} exported, {} failed, {} imported, {} remuxed",
        job,
        report.exported.len(),
        report.failed_tracks,
        report.imported.len(),
        report.remuxed
    );
    Ok(report)
}

/// Pick the file to extract from, copying it locally when it is big or
/// will be read many times.
fn local_source(
    ctx: &PipelineContext<'_>,
    video: &Path,
    subtitle_tracks: usize,
    copy_dir: &Path,
) -> PipelineResult<PathBuf> {
    let size = fs::metadata(video)
        .map_err(|e| PipelineError::io(video, e))?
        .len();
    if size <= ctx.options.local_copy_threshold_bytes && subtitle_tracks <= 1 {
        return Ok(video.to_path_buf());
    }

    let Some(name) = video.file_name() else {
        return Ok(video.to_path_buf());
    };
    let copy = copy_dir.join(name);
    info!("Copying {} to {}", video.display(), copy.display());
    fs::copy(video, &copy).map_err(|e| PipelineError::io(&copy, e))?;
    Ok(copy)
}

/// Extract one embedded track to its canonical library path.
fn export_embedded(
    ctx: &PipelineContext<'_>,
    source: &Path,
    track: &TrackInfo,
    library_dir: &Path,
) -> Option<PathBuf> {
    let track_id = track.track_id?;
    let dest = library_dir.join(encode(track));
    if dest.exists() {
        info!("Already in library: {}", dest.display());
        return Some(dest);
    }
    match extract_track(&ctx.tools, source, track_id, &dest) {
        Ok(()) => Some(dest),
        Err(e) => {
            warn!("Skipping track {}: {}", track_id, e);
            None
        }
    }
}

fn import_sidecars(
    ctx: &PipelineContext<'_>,
    job: &EpisodeJob,
    source: &Path,
    embedded: &[TrackInfo],
    library_dir: &Path,
    scratch: &ScratchDirs,
    report: &mut EpisodeReport,
) -> PipelineResult<()> {
    let mut candidates: Vec<TrackInfo> = list_sidecar_tracks(&job.video)
        .iter()
        .map(|path| build_sidecar_track(ctx, &job.video, path, job))
        .collect();
    if candidates.is_empty() {
        return Ok(());
    }

    reconcile(&mut candidates, embedded);

    if ctx.options.remux {
        for candidate in candidates.iter_mut() {
            if candidate.remux == RemuxDecision::Remux {
                *candidate = realign_or_keep(&ctx.tools, source, candidate, embedded, &scratch.subs);
            }
        }

        let new_tracks: Vec<&TrackInfo> = candidates
            .iter()
            .filter(|c| c.remux == RemuxDecision::Remux)
            .collect();
        if !new_tracks.is_empty() {
            remux_into_video(ctx, &job.video, &new_tracks, &scratch.import)?;
            report.remuxed = new_tracks.len();
        }
    }

    for candidate in &candidates {
        let dest = library_dir.join(encode(candidate));
        match move_file(&candidate.filepath, &dest) {
            Ok(()) => report.imported.push(dest),
            Err(e) => warn!("Could not import {}: {}", candidate.filepath.display(), e),
        }
    }
    Ok(())
}

/// Mux into `<import>/<video name>`, then replace the video with it.
fn remux_into_video(
    ctx: &PipelineContext<'_>,
    video: &Path,
    tracks: &[&TrackInfo],
    import_dir: &Path,
) -> PipelineResult<()> {
    let Some(name) = video.file_name() else {
        return Err(PipelineError::VideoNotFound(video.to_path_buf()));
    };
    let output = import_dir.join(name);
    mux_tracks(&ctx.tools, video, tracks, &output)?;
    fs::copy(&output, video).map_err(|e| PipelineError::io(video, e))?;
    info!("Replaced {} with remuxed file", video.display());
    Ok(())
}

fn absolute(path: &Path) -> PipelineResult<PathBuf> {
    std::path::absolute(path).map_err(|e| PipelineError::io(path, e))
}

/// Rename, falling back to copy + delete across filesystems.
fn move_file(from: &Path, to: &Path) -> std::io::Result<()> {
    if fs::rename(from, to).is_ok() {
        return Ok(());
    }
    fs::copy(from, to)?;
    fs::remove_file(from)
}

fn prepare_scratch(scratch: &ScratchDirs) -> PipelineResult<()> {
    for dir in scratch.all() {
        fs::create_dir_all(dir).map_err(|e| PipelineError::io(dir, e))?;
    }
    Ok(())
}

/// Empty the scratch folders, keeping the folders themselves.
fn clean_scratch(scratch: &ScratchDirs) {
    for dir in scratch.all() {
        let Ok(entries) = fs::read_dir(dir) else {
            continue;
        };
        for entry in entries.filter_map(|e| e.ok()) {
            let path = entry.path();
            let removed = if path.is_dir() {
                fs::remove_dir_all(&path)
            } else {
                fs::remove_file(&path)
            };
            if let Err(e) = removed {
                warn!("Could not clean {}: {}", path.display(), e);
            }
        }
    }
}
