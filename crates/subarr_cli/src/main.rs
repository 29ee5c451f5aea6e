//! subarr command-line front end.
//!
//! Loads the configuration, sets up logging, then hands the requested
//! episodes to `subarr_core::pipeline`.

mod cli;

use std::path::Path;
use std::process;
use std::sync::OnceLock;

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use regex::Regex;
use subarr_core::config::{ConfigManager, ConfigSection, ToolsSettings};
use subarr_core::language::{LanguageTag, WhatlangClassifier};
use subarr_core::logging::init_tracing;
use subarr_core::models::EpisodeNumber;
use subarr_core::naming::decode;
use subarr_core::pipeline::{
    analyze_folder, export_episode, process_batch, EpisodeJob, PipelineContext, RunOptions,
};
use subarr_core::tools::{CommandRunner, Toolbox};
use tracing::{error, info};

use cli::{BatchArgs, Cli, Commands, ConfigAction, ExportArgs, RunArgs, ToolsArgs};

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = ConfigManager::new(&cli.config);
    config
        .load_or_create()
        .with_context(|| format!("loading {}", cli.config.display()))?;
    config.ensure_dirs_exist()?;

    let mut level = config.settings().logging.level;
    for _ in 0..cli.verbose {
        level = level.more_verbose();
    }
    let logs = config.logs_folder();
    let _guard = init_tracing(level, logs.as_deref());

    match cli.command {
        Commands::Export(args) => export(&config, args),
        Commands::Batch(args) => batch(&config, args),
        Commands::Scan { dir } => {
            for track in analyze_folder(&dir) {
                println!("{}", serde_json::to_string(&track)?);
            }
            Ok(())
        }
        Commands::Decode { files } => {
            for file in files {
                let track = decode(&file)?;
                println!("{}", serde_json::to_string_pretty(&track.filename_fields())?);
            }
            Ok(())
        }
        Commands::Config { action } => configure(&mut config, action),
    }
}

fn configure(config: &mut ConfigManager, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show { section } => {
            let sections = match section {
                Some(name) => vec![ConfigSection::from_table_name(&name)
                    .ok_or_else(|| anyhow!("unknown config section '{}'", name))?],
                None => ConfigSection::ALL.to_vec(),
            };
            for section in sections {
                println!("[{}]", section.table_name());
                println!("{}", config.section_toml(section)?);
            }
        }
        ConfigAction::SetLanguage { tag } => {
            let tag = LanguageTag::parse(&tag)?;
            config.settings_mut().language.default_language = tag.to_string();
            config.update_section(ConfigSection::Language)?;
            info!("Default language set to {}", tag);
        }
        ConfigAction::SetTools(args) => {
            apply_tools(&mut config.settings_mut().tools, args);
            config.update_section(ConfigSection::Tools)?;
            info!("Tool settings saved to {}", config.path().display());
        }
    }
    Ok(())
}

fn apply_tools(tools: &mut ToolsSettings, args: ToolsArgs) {
    if let Some(path) = args.mkvmerge {
        tools.mkvmerge = path;
    }
    if let Some(path) = args.mkvextract {
        tools.mkvextract = path;
    }
    if let Some(path) = args.ffsubsync {
        tools.ffsubsync = path;
    }
    if let Some(secs) = args.timeout {
        tools.timeout_secs = secs;
    }
}

fn run_options(config: &ConfigManager, run: &RunArgs) -> Result<RunOptions> {
    let options = RunOptions::from_settings(config.settings())?;
    let remux = options.remux || run.remux;
    let external = options.export_external_tracks || run.external;
    Ok(options.with_remux(remux).with_external_tracks(external))
}

fn export(config: &ConfigManager, args: ExportArgs) -> Result<()> {
    let season: EpisodeNumber = args.season.parse()?;
    let episode: EpisodeNumber = args.episode.parse()?;
    let job = EpisodeJob::new(&args.video, &args.run.series, season, episode)
        .with_release(args.run.release.as_deref());

    let runner = CommandRunner::from_secs(config.settings().tools.timeout_secs);
    let classifier = WhatlangClassifier;
    let ctx = PipelineContext::new(
        Toolbox::new(&runner, &config.settings().tools),
        &classifier,
        run_options(config, &args.run)?,
    );

    let report = export_episode(&ctx, &job)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn batch(config: &ConfigManager, args: BatchArgs) -> Result<()> {
    let jobs = args
        .videos
        .iter()
        .map(|video| -> Result<EpisodeJob> {
            let (season, episode) = numbers_from_filename(video)?;
            Ok(EpisodeJob::new(video, &args.run.series, season, episode)
                .with_release(args.run.release.as_deref()))
        })
        .collect::<Result<Vec<_>>>()?;

    let runner = CommandRunner::from_secs(config.settings().tools.timeout_secs);
    let classifier = WhatlangClassifier;
    let ctx = PipelineContext::new(
        Toolbox::new(&runner, &config.settings().tools),
        &classifier,
        run_options(config, &args.run)?,
    );

    let report = process_batch(&ctx, &jobs);
    for done in &report.completed {
        println!("{}", serde_json::to_string(done)?);
    }
    if !report.failed.is_empty() {
        bail!("{} of {} episodes failed", report.failed.len(), jobs.len());
    }
    Ok(())
}

static EPISODE_MARKER: OnceLock<Regex> = OnceLock::new();

/// Season and episode from an `SxxEyy` marker in the file name.
fn numbers_from_filename(video: &Path) -> Result<(EpisodeNumber, EpisodeNumber)> {
    let name = video
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let marker = EPISODE_MARKER
        .get_or_init(|| Regex::new(r"(?i)S(\d{1,3})E(\d{1,3})").expect("literal regex"));
    let caps = marker
        .captures(&name)
        .ok_or_else(|| anyhow!("no SxxEyy marker in '{}'", name))?;
    Ok((caps[1].parse()?, caps[2].parse()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn episode_numbers_from_names() {
        let (s, e) = numbers_from_filename(Path::new("/tv/Show.s02e13.1080p.mkv")).unwrap();
        assert_eq!((s.to_string(), e.to_string()), ("02".to_string(), "13".to_string()));
        assert!(numbers_from_filename(Path::new("/tv/Show.Special.mkv")).is_err());
    }

    #[test]
    fn marker_lookup_is_stable_across_a_batch() {
        for n in 1..=30u32 {
            let name = format!("/tv/Show.S01E{:02}.mkv", n);
            let (_, e) = numbers_from_filename(Path::new(&name)).unwrap();
            assert_eq!(e, EpisodeNumber::new(n));
        }
        assert!(EPISODE_MARKER.get().is_some());
    }

    #[test]
    fn cli_parses_export() {
        let cli = Cli::parse_from([
            "subarr", "export", "/tv/a.mkv", "--season", "1", "--episode", "2", "--series", "42",
            "--remux", "-vv",
        ]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Export(args) => {
                assert_eq!(args.run.series, "42");
                assert!(args.run.remux);
                assert!(!args.run.external);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    fn fresh_config(dir: &Path) -> ConfigManager {
        let mut config = ConfigManager::new(dir.join("subarr.toml"));
        config.load_or_create().unwrap();
        config
    }

    fn reload(dir: &Path) -> ConfigManager {
        let mut config = ConfigManager::new(dir.join("subarr.toml"));
        config.load().unwrap();
        config
    }

    #[test]
    fn set_language_is_standardized_and_saved() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = fresh_config(dir.path());

        let action = ConfigAction::SetLanguage { tag: "ENG".to_string() };
        configure(&mut config, action).unwrap();
        assert_eq!(reload(dir.path()).settings().language.default_language, "en");

        let bad = ConfigAction::SetLanguage { tag: "english".to_string() };
        assert!(configure(&mut config, bad).is_err());
        assert_eq!(reload(dir.path()).settings().language.default_language, "en");
    }

    #[test]
    fn set_tools_changes_only_given_values() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = fresh_config(dir.path());

        let args = ToolsArgs {
            mkvmerge: Some("/opt/mkvtoolnix/mkvmerge".to_string()),
            timeout: Some(90),
            ..Default::default()
        };
        configure(&mut config, ConfigAction::SetTools(args)).unwrap();

        let tools = reload(dir.path()).settings().tools.clone();
        assert_eq!(tools.mkvmerge, "/opt/mkvtoolnix/mkvmerge");
        assert_eq!(tools.timeout_secs, 90);
        assert_eq!(tools.mkvextract, "mkvextract");
    }

    #[test]
    fn show_rejects_unknown_section() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = fresh_config(dir.path());
        let action = ConfigAction::Show { section: Some("sonarr".to_string()) };
        assert!(configure(&mut config, action).is_err());
        let action = ConfigAction::Show { section: Some("tools".to_string()) };
        assert!(configure(&mut config, action).is_ok());
    }

    #[test]
    fn cli_parses_config_actions() {
        let cli = Cli::parse_from(["subarr", "config", "set-tools", "--timeout", "30"]);
        match cli.command {
            Commands::Config { action: ConfigAction::SetTools(args) } => {
                assert_eq!(args.timeout, Some(30));
                assert!(args.mkvmerge.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
