//! subarr core - subtitle track classification and reconciliation
//!
//! Inspects episode containers and the subtitle files sitting next to them,
//! works out each track's language and flags without asking anyone, files
//! every track in a canonical library, and muxes external tracks the
//! container does not already carry.

#[macro_use]
mod macros;

pub mod config;
pub mod extraction;
pub mod flags;
pub mod language;
pub mod logging;
pub mod matching;
pub mod models;
pub mod mux;
pub mod naming;
pub mod pipeline;
pub mod subtitles;
pub mod sync;
pub mod tools;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
