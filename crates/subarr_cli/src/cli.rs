//! Command-line argument structures.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "subarr: subtitle track classification and reconciliation",
    long_about = "Files every subtitle track of an episode into a canonical library and muxes external subtitles the container is missing."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (created with defaults when missing)
    #[arg(short, long, global = true, default_value = "subarr.toml", value_name = "FILE")]
    pub config: PathBuf,

    /// Log more (repeat for trace output)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Process one episode
    Export(ExportArgs),
    /// Process several episodes of one series, numbered from their filenames
    Batch(BatchArgs),
    /// List the tracks filed in a library folder
    Scan {
        /// Episode folder inside the library
        #[arg(value_name = "DIR")]
        dir: PathBuf,
    },
    /// Show the fields carried by canonical filenames
    Decode {
        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,
    },
    /// Show or change the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the settings, or one section of them
    Show {
        /// Table name: paths, logging, language, tools or pipeline
        #[arg(value_name = "SECTION")]
        section: Option<String>,
    },
    /// Set the language whose tracks are flagged default
    SetLanguage {
        #[arg(value_name = "TAG")]
        tag: String,
    },
    /// Change external tool executables or their timeout
    SetTools(ToolsArgs),
}

#[derive(Args, Debug, Default)]
pub struct ToolsArgs {
    #[arg(long, value_name = "PATH")]
    pub mkvmerge: Option<String>,

    #[arg(long, value_name = "PATH")]
    pub mkvextract: Option<String>,

    #[arg(long, value_name = "PATH")]
    pub ffsubsync: Option<String>,

    /// Seconds before a tool is killed
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

/// Switches shared by `export` and `batch`.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Series identifier used as the library folder name
    #[arg(short, long, value_name = "ID")]
    pub series: String,

    /// Release group (defaults to Anonymous)
    #[arg(short, long, value_name = "GROUP")]
    pub release: Option<String>,

    /// Mux new external subtitles into the video
    #[arg(long)]
    pub remux: bool,

    /// Import subtitle files found next to the video
    #[arg(long)]
    pub external: bool,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Episode container
    #[arg(value_name = "VIDEO")]
    pub video: PathBuf,

    #[arg(long, value_name = "N")]
    pub season: String,

    #[arg(long, value_name = "N")]
    pub episode: String,

    #[command(flatten)]
    pub run: RunArgs,
}

#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Episode containers; names must contain `SxxEyy`
    #[arg(required = true, value_name = "VIDEO")]
    pub videos: Vec<PathBuf>,

    #[command(flatten)]
    pub run: RunArgs,
}
