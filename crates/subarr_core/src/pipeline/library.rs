//! Canonical subtitle library layout.
//!
//! ```text
//! <library>/<series id>/S<season>/E<episode>/<canonical filename>
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::models::{EpisodeNumber, TrackInfo};
use crate::naming::decode;

/// Folder holding every subtitle of one episode.
pub fn episode_dir(
    library: &Path,
    series_id: &str,
    season: EpisodeNumber,
    episode: EpisodeNumber,
) -> PathBuf {
    library
        .join(series_id)
        .join(format!("S{}", season))
        .join(format!("E{}", episode))
}

/// Decode every canonical file in an episode folder.
///
/// Files that don't decode are skipped with a warning; a missing folder is
/// simply empty. Results are sorted by filename.
pub fn analyze_folder(dir: &Path) -> Vec<TrackInfo> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    paths.sort();

    paths
        .iter()
        .filter_map(|path| match decode(path) {
            Ok(track) => Some(track),
            Err(e) => {
                warn!("Skipping {}", e);
                None
            }
        })
        .collect()
}
