//! Realigning external subtitles against an embedded reference.
//!
//! All scratch files live in one directory (`<temp>/subs`): the exported
//! reference, the realigner output `s.<ext>`, and the accepted result
//! `synced.<original name>`.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use super::error::{SyncError, SyncResult};
use super::offset::{check_offset, offset_to_ms};
use crate::extraction::extract_track;
use crate::models::TrackInfo;
use crate::tools::Toolbox;

/// First embedded track usable as timing reference for `candidate`.
///
/// Same primary language (or an undetermined one), same forced flag, and a
/// format the realigner can read.
pub fn select_reference<'a>(candidate: &TrackInfo, embedded: &'a [TrackInfo]) -> Option<&'a TrackInfo> {
    embedded.iter().find(|track| {
        let language_ok = track.language.is_undetermined()
            || track.language.primary_subtag() == candidate.language.primary_subtag();
        language_ok
            && track.is_forced == candidate.is_forced
            && track.subtype.is_syncable()
            && track.track_id.is_some()
    })
}

/// Export `reference` from `container` into the scratch directory.
pub fn export_reference(
    tools: &Toolbox<'_>,
    container: &Path,
    reference: &TrackInfo,
    scratch: &Path,
) -> SyncResult<PathBuf> {
    let track_id = reference.track_id.ok_or(SyncError::NoReference)?;
    let dest = scratch.join(format!("ref.{}.{}", track_id, reference.subtype.extension()));
    extract_track(tools, container, track_id, &dest)?;
    Ok(dest)
}

/// Realign `candidate` against `reference_file`.
///
/// On acceptance the returned track points at `<scratch>/synced.<name>` and
/// carries the offset in `delay_ms`. Any error means the caller keeps the
/// original file.
pub fn realign(
    tools: &Toolbox<'_>,
    candidate: &TrackInfo,
    reference_file: &Path,
    scratch: &Path,
) -> SyncResult<TrackInfo> {
    if !candidate.subtype.is_syncable() {
        return Err(SyncError::NotSyncable(candidate.subtype.to_string()));
    }
    let name = candidate
        .filename()
        .ok_or_else(|| SyncError::NotSyncable("file without a name".to_string()))?;

    let output_name = format!("s.{}", candidate.subtype.extension());
    let output = scratch.join(&output_name);
    let args = vec![
        reference_file.display().to_string(),
        "-i".to_string(),
        candidate.filepath.display().to_string(),
        "-o".to_string(),
        output_name,
    ];

    let report = tools.runner.run(&tools.ffsubsync, &args, Some(scratch))?;
    if !report.success() {
        let _ = fs::remove_file(&output);
        return Err(report.failure(&tools.ffsubsync).into());
    }

    let offset = match check_offset(&report.combined()) {
        Ok(offset) => offset,
        Err(e) => {
            let _ = fs::remove_file(&output);
            return Err(e);
        }
    };

    let synced = scratch.join(format!("synced.{}", name));
    fs::rename(&output, &synced).map_err(|source| SyncError::Io {
        path: output.clone(),
        source,
    })?;

    info!("Realigned {} by {:+.3}s", name, offset);

    let mut accepted = candidate.clone().with_filepath(synced);
    accepted.delay_ms = offset_to_ms(offset);
    Ok(accepted)
}

/// Full realignment step for one candidate. Never fails: a rejected or
/// impossible realignment returns the candidate unchanged.
pub fn realign_or_keep(
    tools: &Toolbox<'_>,
    container: &Path,
    candidate: &TrackInfo,
    embedded: &[TrackInfo],
    scratch: &Path,
) -> TrackInfo {
    let attempt = select_reference(candidate, embedded)
        .ok_or(SyncError::NoReference)
        .and_then(|reference| export_reference(tools, container, reference, scratch))
        .and_then(|reference_file| realign(tools, candidate, &reference_file, scratch));

    match attempt {
        Ok(track) => track,
        Err(e) => {
            warn!(
                "Keeping {} as is: {}",
                candidate.filename().unwrap_or_default(),
                e
            );
            candidate.clone()
        }
    }
}
