//! End-to-end behavior through the public API, with scripted external tools.

use std::fs;
use std::path::Path;

use subarr_core::config::Settings;
use subarr_core::language::{Classification, LanguageClassifier, LanguageTag};
use subarr_core::matching::compare_with_embedded;
use subarr_core::models::{EpisodeNumber, RemuxDecision, SubtitleType, TrackInfo};
use subarr_core::naming::{decode, encode};
use subarr_core::pipeline::{export_episode, EpisodeJob, PipelineContext, RunOptions};
use subarr_core::tools::{CommandOutput, ToolResult, ToolRunner, Toolbox};

/// Plays `mkvmerge -J` and `mkvextract` for a container holding one
/// untagged SRT track named "Dialogue".
struct ScriptedTools;

const PROBE: &str = r#"{
    "container": {"type": "Matroska"},
    "tracks": [
        {"id": 0, "type": "video", "properties": {"codec_id": "V_MPEG4/ISO/AVC"}},
        {"id": 1, "type": "subtitles", "codec": "SubRip/SRT",
         "properties": {"codec_id": "S_TEXT/UTF8", "language": "und",
                        "language_ietf": "und", "track_name": "Dialogue"}}
    ]
}"#;

const FRENCH_SRT: &str = "1\n00:00:01,000 --> 00:00:03,000\nBonjour, tu viens ce soir ?\n\n\
2\n00:00:04,000 --> 00:00:06,000\nOui, je serai la avec mes amis.\n";

impl ToolRunner for ScriptedTools {
    fn run(&self, program: &str, args: &[String], _cwd: Option<&Path>) -> ToolResult<CommandOutput> {
        let stdout = match program {
            "mkvmerge" => PROBE.to_string(),
            "mkvextract" => {
                if let Some((_, dest)) = args[2].split_once(':') {
                    fs::write(dest, FRENCH_SRT).unwrap();
                }
                String::new()
            }
            other => panic!("unexpected tool {}", other),
        };
        Ok(CommandOutput {
            stdout,
            stderr: String::new(),
            exit_code: Some(0),
        })
    }
}

struct French;

impl LanguageClassifier for French {
    fn classify(&self, text: &str) -> Option<Classification> {
        text.contains("Bonjour").then(|| Classification {
            code: "fra".to_string(),
            confidence: 0.95,
        })
    }
}

#[test]
fn untagged_track_is_classified_from_content() {
    let dir = tempfile::tempdir().unwrap();
    let video = dir.path().join("Show.S01E01.mkv");
    fs::write(&video, "video").unwrap();

    let mut options = RunOptions::from_settings(&Settings::default()).unwrap();
    options.temp_folder = dir.path().join("temp");
    options.subtitle_library = dir.path().join("lib");

    let ctx = PipelineContext::new(Toolbox::with_defaults(&ScriptedTools), &French, options);
    let job = EpisodeJob::new(&video, "121361", EpisodeNumber::new(1), EpisodeNumber::new(1))
        .with_release(Some("Retr0"));

    let report = export_episode(&ctx, &job).unwrap();
    assert_eq!(report.exported.len(), 1);

    let exported = &report.exported[0];
    assert_eq!(
        exported.file_name().unwrap().to_string_lossy(),
        "S01.E01.[Retr0]-[Dialogue].default.fr.srt"
    );
    let track = decode(exported).unwrap();
    assert_eq!(track.language.primary_subtag(), "fr");
    assert_eq!(track.subtype, SubtitleType::Srt);
    assert!(track.is_default);
    assert!(!track.is_forced);
}

#[test]
fn canonical_filename_with_nested_brackets() {
    let path = Path::new("/lib/S01.E20.[Retr0]-[Signs#Songs [Commie]].default.eng.forced.ass");
    let track = decode(path).unwrap();

    assert_eq!(track.season.to_string(), "01");
    assert_eq!(track.episode.to_string(), "20");
    assert!(track.is_default);
    assert!(track.is_forced);
    assert!(!track.is_sdh);
    assert_eq!(track.language, LanguageTag::parse("en").unwrap());
    assert_eq!(track.subtype, SubtitleType::Ass);
    assert_eq!(encode(&track), "S01.E20.[Retr0]-[Signs#Songs [Commie]].default.en.forced.ass");
}

#[test]
fn regional_variants_count_as_the_same_track() {
    let track = |lang: &str| {
        TrackInfo::new(EpisodeNumber::new(1), EpisodeNumber::new(1))
            .with_release("Grp")
            .with_trackname("Full")
            .with_subtype(SubtitleType::Ass)
            .with_language(LanguageTag::parse(lang).unwrap())
    };
    let embedded = vec![track("es-ES").with_track_id(3)];

    let decision = compare_with_embedded(&track("es-419"), &embedded);
    assert_eq!(decision, RemuxDecision::AlreadyPresent);
    assert_eq!(decision.to_remux(), Some(false));
}
