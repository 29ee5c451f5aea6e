//! Run configuration and per-episode jobs.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::language::{LanguageTag, TagResult};
use crate::models::{normalize_release, EpisodeNumber};

/// Everything the pipeline needs to know about how to run, passed in
/// explicitly at the entry point.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub temp_folder: PathBuf,
    pub subtitle_library: PathBuf,
    pub default_language: LanguageTag,
    /// Mux new sidecar tracks into the video.
    pub remux: bool,
    /// Import sidecar subtitle files found next to the video.
    pub export_external_tracks: bool,
    /// Containers larger than this are copied locally before extraction.
    pub local_copy_threshold_bytes: u64,
}

impl RunOptions {
    pub fn from_settings(settings: &Settings) -> TagResult<Self> {
        Ok(Self {
            temp_folder: PathBuf::from(&settings.paths.temp_folder),
            subtitle_library: PathBuf::from(&settings.paths.subtitle_library),
            default_language: LanguageTag::parse(&settings.language.default_language)?,
            remux: settings.pipeline.remux,
            export_external_tracks: settings.pipeline.export_external_tracks,
            local_copy_threshold_bytes: settings
                .pipeline
                .local_copy_threshold_mb
                .saturating_mul(1024 * 1024),
        })
    }

    pub fn with_remux(mut self, remux: bool) -> Self {
        self.remux = remux;
        self
    }

    pub fn with_external_tracks(mut self, enabled: bool) -> Self {
        self.export_external_tracks = enabled;
        self
    }

    pub fn scratch(&self) -> ScratchDirs {
        ScratchDirs::new(&self.temp_folder)
    }
}

/// Scratch folders under the temp folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScratchDirs {
    /// Extracted samples, realignment references and results.
    pub subs: PathBuf,
    /// Local copies of large containers.
    pub copy: PathBuf,
    /// Remux output before it replaces the video.
    pub import: PathBuf,
}

impl ScratchDirs {
    pub fn new(temp: &Path) -> Self {
        Self {
            subs: temp.join("subs"),
            copy: temp.join("copy"),
            import: temp.join("import"),
        }
    }

    pub fn all(&self) -> [&Path; 3] {
        [&self.subs, &self.copy, &self.import]
    }
}

/// One episode to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeJob {
    pub video: PathBuf,
    pub series_id: String,
    pub season: EpisodeNumber,
    pub episode: EpisodeNumber,
    pub release: String,
}

impl EpisodeJob {
    pub fn new(
        video: impl Into<PathBuf>,
        series_id: impl Into<String>,
        season: EpisodeNumber,
        episode: EpisodeNumber,
    ) -> Self {
        Self {
            video: video.into(),
            series_id: series_id.into(),
            season,
            episode,
            release: normalize_release(None),
        }
    }

    pub fn with_release(mut self, release: Option<&str>) -> Self {
        self.release = normalize_release(release);
        self
    }
}

impl fmt::Display for EpisodeJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} S{}E{}", self.series_id, self.season, self.episode)
    }
}
