//! Episode processing.
//!
//! A [`PipelineContext`] bundles the tools, the content classifier and the
//! run options; everything else is passed per call. Nothing here prompts:
//! every decision is made from container metadata, filenames and content.

pub mod episode;
mod errors;
pub mod inspect;
pub mod library;
pub mod options;
pub mod sidecars;

pub use episode::{export_episode, process_batch, BatchReport, EpisodeReport};
pub use errors::{PipelineError, PipelineResult};
pub use library::{analyze_folder, episode_dir};
pub use options::{EpisodeJob, RunOptions, ScratchDirs};

use crate::language::LanguageClassifier;
use crate::tools::Toolbox;

/// Shared state for one run.
pub struct PipelineContext<'a> {
    pub tools: Toolbox<'a>,
    pub classifier: &'a dyn LanguageClassifier,
    pub options: RunOptions,
}

impl<'a> PipelineContext<'a> {
    pub fn new(tools: Toolbox<'a>, classifier: &'a dyn LanguageClassifier, options: RunOptions) -> Self {
        Self {
            tools,
            classifier,
            options,
        }
    }
}
