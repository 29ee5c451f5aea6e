//! Configuration management.
//!
//! # Example
//!
//! ```no_run
//! use subarr_core::config::{ConfigManager, ConfigSection};
//!
//! let mut config = ConfigManager::new("subarr.toml");
//! config.load_or_create().unwrap();
//!
//! println!("Library: {}", config.settings().paths.subtitle_library);
//!
//! config.settings_mut().tools.timeout_secs = 120;
//! config.update_section(ConfigSection::Tools).unwrap();
//! ```

mod manager;
mod settings;

pub use manager::{ConfigError, ConfigManager, ConfigResult};
pub use settings::{
    ConfigSection, LanguageSettings, LoggingSettings, PathSettings, PipelineSettings, Settings,
    ToolsSettings,
};
