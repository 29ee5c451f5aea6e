//! Container inspection and track extraction.

mod error;
pub mod mkvextract;
pub mod probe;

pub use error::{ExtractionError, ExtractionResult};
pub use mkvextract::extract_track;
pub use probe::{parse_probe_json, probe_subtitles, ContainerTrack};
