//! Muxing new subtitle tracks back into a container.

pub mod options_builder;

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::TrackInfo;
use crate::tools::{ToolError, Toolbox};

pub use options_builder::MkvmergeOptionsBuilder;

#[derive(Error, Debug)]
pub enum MuxError {
    #[error("Nothing to mux into {}", .0.display())]
    NoTracks(PathBuf),

    #[error("Muxing {} failed: {source}", path.display())]
    Failed {
        path: PathBuf,
        #[source]
        source: ToolError,
    },
}

pub type MuxResult<T> = Result<T, MuxError>;

/// Write `source` plus `tracks` to `output`.
///
/// mkvmerge exits with 1 when it only emitted warnings; that still counts
/// as success.
pub fn mux_tracks(
    tools: &Toolbox<'_>,
    source: &Path,
    tracks: &[&TrackInfo],
    output: &Path,
) -> MuxResult<()> {
    if tracks.is_empty() {
        return Err(MuxError::NoTracks(source.to_path_buf()));
    }

    let args = MkvmergeOptionsBuilder::new(source, output)
        .add_tracks(tracks.iter().copied())
        .build();

    let out = tools
        .runner
        .run(&tools.mkvmerge, &args, None)
        .map_err(|source_err| MuxError::Failed {
            path: source.to_path_buf(),
            source: source_err,
        })?;

    match out.exit_code {
        Some(0) => {}
        Some(1) => tracing::warn!("mkvmerge warnings for {}: {}", source.display(), out.stdout.trim()),
        _ => {
            return Err(MuxError::Failed {
                path: source.to_path_buf(),
                source: out.failure(&tools.mkvmerge),
            })
        }
    }

    tracing::info!("Muxed {} track(s) into {}", tracks.len(), output.display());
    Ok(())
}
