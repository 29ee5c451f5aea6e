//! Acceptance policy for realignment offsets.

use tracing::warn;

use super::error::{SyncError, SyncResult};

/// Largest offset, in seconds either way, accepted from the realigner.
pub const MAX_SYNC_OFFSET_SECS: f64 = 2.0;

/// Pull the reported offset out of realigner output.
pub fn parse_reported_offset(report: &str) -> Option<f64> {
    regex!(r"offset seconds: (-?\d+\.\d+)")
        .captures(report)
        .and_then(|caps| caps[1].parse().ok())
}

/// Accept or reject a realignment based on its report.
///
/// Returns the offset in seconds when it lies within
/// [`MAX_SYNC_OFFSET_SECS`] of zero (bounds included).
pub fn check_offset(report: &str) -> SyncResult<f64> {
    let offset = parse_reported_offset(report).ok_or(SyncError::MissingOffset)?;
    if offset.abs() > MAX_SYNC_OFFSET_SECS {
        warn!(
            "Realignment offset {:.3}s exceeds {:.1}s, keeping original",
            offset, MAX_SYNC_OFFSET_SECS
        );
        return Err(SyncError::ImplausibleOffset(offset));
    }
    Ok(offset)
}

/// Offset in whole milliseconds.
pub fn offset_to_ms(offset_secs: f64) -> i64 {
    (offset_secs * 1000.0).round() as i64
}
