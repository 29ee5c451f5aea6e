//! Settings struct with TOML-based sections.
//!
//! Each section maps to one TOML table and can be rewritten on its own.

use serde::{Deserialize, Serialize};

use crate::logging::LogLevel;

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub paths: PathSettings,

    #[serde(default)]
    pub logging: LoggingSettings,

    #[serde(default)]
    pub language: LanguageSettings,

    #[serde(default)]
    pub tools: ToolsSettings,

    #[serde(default)]
    pub pipeline: PipelineSettings,
}

/// Working, library and log directories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathSettings {
    /// Scratch space for extracted, realigned and copied files.
    #[serde(default = "default_temp_folder")]
    pub temp_folder: String,

    /// Root of the canonical subtitle store.
    #[serde(default = "default_subtitle_library")]
    pub subtitle_library: String,

    /// Folder for log files. Empty disables file logging.
    #[serde(default = "default_logs_folder")]
    pub logs_folder: String,
}

fn default_temp_folder() -> String {
    "./temp/".to_string()
}

fn default_subtitle_library() -> String {
    "./subtitles/".to_string()
}

fn default_logs_folder() -> String {
    ".logs".to_string()
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            temp_folder: default_temp_folder(),
            subtitle_library: default_subtitle_library(),
            logs_folder: default_logs_folder(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    #[serde(default)]
    pub level: LogLevel,

    /// Also write a daily log file under `paths.logs_folder`.
    #[serde(default = "default_true")]
    pub log_to_file: bool,
}

fn default_true() -> bool {
    true
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            log_to_file: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageSettings {
    /// Tracks in this language are flagged default.
    #[serde(default = "default_language")]
    pub default_language: String,

    /// Tags offered first when a language has to be chosen by hand.
    #[serde(default = "default_common_tags")]
    pub common_tags: Vec<String>,
}

fn default_language() -> String {
    "fr".to_string()
}

fn default_common_tags() -> Vec<String> {
    [
        "en-US", "en-GB", "pt-BR", "pt-PT", "es-419", "es-ES", "fr-FR", "fr-CA", "de-DE",
        "de-CH", "it-IT", "pl-PL", "nl-NL", "nl-BE", "no-NO", "fi-FI", "fil-PH", "tr-TR",
        "sv-SE", "el-GR", "ro-RO", "ko-KR", "da-DK", "zh-Hans-CN", "hu-HU", "cs-CZ", "sk-SK",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl Default for LanguageSettings {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            common_tags: default_common_tags(),
        }
    }
}

/// External executables. Bare names are looked up on `PATH`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolsSettings {
    #[serde(default = "default_mkvmerge")]
    pub mkvmerge: String,

    #[serde(default = "default_mkvextract")]
    pub mkvextract: String,

    #[serde(default = "default_ffsubsync")]
    pub ffsubsync: String,

    /// Deadline for every tool invocation.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_mkvmerge() -> String {
    "mkvmerge".to_string()
}

fn default_mkvextract() -> String {
    "mkvextract".to_string()
}

fn default_ffsubsync() -> String {
    "ffsubsync".to_string()
}

fn default_timeout_secs() -> u64 {
    600
}

impl Default for ToolsSettings {
    fn default() -> Self {
        Self {
            mkvmerge: default_mkvmerge(),
            mkvextract: default_mkvextract(),
            ffsubsync: default_ffsubsync(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineSettings {
    /// Mux new sidecar tracks back into the video.
    #[serde(default)]
    pub remux: bool,

    /// Import sidecar files sitting next to the video.
    #[serde(default)]
    pub export_external_tracks: bool,

    /// Containers above this size are copied to the temp folder first.
    #[serde(default = "default_local_copy_threshold_mb")]
    pub local_copy_threshold_mb: u64,
}

fn default_local_copy_threshold_mb() -> u64 {
    200
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            remux: false,
            export_external_tracks: false,
            local_copy_threshold_mb: default_local_copy_threshold_mb(),
        }
    }
}

/// Config sections for targeted updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSection {
    Paths,
    Logging,
    Language,
    Tools,
    Pipeline,
}

impl ConfigSection {
    pub const ALL: [ConfigSection; 5] = [
        ConfigSection::Paths,
        ConfigSection::Logging,
        ConfigSection::Language,
        ConfigSection::Tools,
        ConfigSection::Pipeline,
    ];

    /// Get the TOML table name for this section.
    pub fn table_name(&self) -> &'static str {
        match self {
            ConfigSection::Paths => "paths",
            ConfigSection::Logging => "logging",
            ConfigSection::Language => "language",
            ConfigSection::Tools => "tools",
            ConfigSection::Pipeline => "pipeline",
        }
    }

    /// Section for a TOML table name.
    pub fn from_table_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|section| section.table_name().eq_ignore_ascii_case(name.trim()))
    }

    /// Comment written above the table.
    pub fn description(&self) -> &'static str {
        match self {
            ConfigSection::Paths => "Working, library and log directories",
            ConfigSection::Logging => "Logging configuration",
            ConfigSection::Language => "Language defaults",
            ConfigSection::Tools => "External tools",
            ConfigSection::Pipeline => "Pipeline behaviour",
        }
    }
}
