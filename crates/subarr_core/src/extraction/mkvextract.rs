//! Track extraction with `mkvextract`.

use std::fs;
use std::path::Path;

use super::error::{ExtractionError, ExtractionResult};
use crate::tools::Toolbox;

/// Extract a single track to `output_path`.
pub fn extract_track(
    tools: &Toolbox<'_>,
    input_path: &Path,
    track_id: u64,
    output_path: &Path,
) -> ExtractionResult<()> {
    if !input_path.exists() {
        return Err(ExtractionError::FileNotFound(input_path.to_path_buf()));
    }

    let args = vec![
        input_path.display().to_string(),
        "tracks".to_string(),
        format!("{}:{}", track_id, output_path.display()),
    ];

    tools
        .runner
        .run(&tools.mkvextract, &args, None)
        .and_then(|out| out.ensure_success(&tools.mkvextract))
        .map_err(|source| ExtractionError::TrackFailed { track_id, source })?;

    let written = fs::metadata(output_path).map(|m| m.len() > 0).unwrap_or(false);
    if !written {
        return Err(ExtractionError::OutputMissing(output_path.to_path_buf()));
    }

    tracing::info!(
        "Extracted track {} from {} to {}",
        track_id,
        input_path.display(),
        output_path.display()
    );

    Ok(())
}
