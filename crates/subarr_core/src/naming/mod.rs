//! Subtitle filenames: the canonical library name and sidecar hints.

pub mod canonical;
mod error;
pub mod sidecar;

pub use canonical::{decode, encode};
pub use error::{NamingError, NamingResult};
pub use sidecar::{parse_sidecar_name, SidecarHints};
