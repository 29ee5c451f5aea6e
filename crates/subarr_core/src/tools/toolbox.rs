//! Tool names bound to a runner.

use super::runner::ToolRunner;
use crate::config::ToolsSettings;

/// The external programs the pipeline drives, plus the runner that starts
/// them.
pub struct Toolbox<'r> {
    pub runner: &'r dyn ToolRunner,
    pub mkvmerge: String,
    pub mkvextract: String,
    pub ffsubsync: String,
}

impl<'r> Toolbox<'r> {
    pub fn new(runner: &'r dyn ToolRunner, settings: &ToolsSettings) -> Self {
        Self {
            runner,
            mkvmerge: settings.mkvmerge.clone(),
            mkvextract: settings.mkvextract.clone(),
            ffsubsync: settings.ffsubsync.clone(),
        }
    }

    /// Toolbox using the bare executable names, resolved through `PATH`.
    pub fn with_defaults(runner: &'r dyn ToolRunner) -> Self {
        Self::new(runner, &ToolsSettings::default())
    }
}
