//! Realignment of external subtitles and the offset acceptance policy.

mod error;
pub mod offset;
pub mod realign;

pub use error::{SyncError, SyncResult};
pub use offset::{check_offset, offset_to_ms, parse_reported_offset, MAX_SYNC_OFFSET_SECS};
pub use realign::{realign, realign_or_keep, select_reference};
