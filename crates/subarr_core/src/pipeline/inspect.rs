//! Turning inspector output into tracks.

use std::path::Path;

use tracing::{debug, warn};

use super::options::EpisodeJob;
use super::PipelineContext;
use crate::extraction::{extract_track, ContainerTrack};
use crate::flags::infer_forced;
use crate::language::{is_default_language, LanguageEvidence, LanguageResolver};
use crate::models::{TrackInfo, PLACEHOLDER_TRACKNAME};
use crate::subtitles::read_dialogue_sample;

/// Resolve one embedded subtitle stream into a [`TrackInfo`].
///
/// The content sample (extract + read) is only produced if the container
/// metadata and track name leave the language undetermined.
pub fn track_from_container(
    ctx: &PipelineContext<'_>,
    container: &Path,
    job: &EpisodeJob,
    raw: &ContainerTrack,
    scratch: &Path,
) -> TrackInfo {
    let subtype = raw.subtype();
    if !subtype.is_supported() {
        warn!("Track {}: unsupported codec '{}'", raw.id, raw.codec_id);
    }

    let sample = || {
        let dest = scratch.join(format!("sample.{}.{}", raw.id, subtype.extension()));
        if let Err(e) = extract_track(&ctx.tools, container, raw.id, &dest) {
            warn!("Track {}: no content sample: {}", raw.id, e);
            return None;
        }
        read_dialogue_sample(&dest, subtype)
            .map_err(|e| warn!("Track {}: {}", raw.id, e))
            .ok()
    };

    let evidence = LanguageEvidence {
        ietf: raw.language_ietf.as_deref(),
        legacy: raw.language.as_deref(),
        trackname: raw.name.as_deref(),
        subtype,
    };
    let resolved = LanguageResolver::new(ctx.classifier).resolve(&evidence, &sample);

    let trackname = match raw.name.as_deref() {
        Some(name) => name.to_string(),
        None => resolved
            .tag
            .display_label()
            .unwrap_or_else(|| PLACEHOLDER_TRACKNAME.to_string()),
    };

    let track = TrackInfo::new(job.season, job.episode)
        .with_track_id(raw.id)
        .with_filepath(container)
        .with_release(job.release.clone())
        .with_trackname(&trackname)
        .with_subtype(subtype)
        // Inspectors report `forced_track: false` on every ordinary track,
        // so only a set flag overrides the name scan.
        .with_forced(infer_forced(&trackname, raw.forced.filter(|forced| *forced)))
        .with_sdh(raw.hearing_impaired.unwrap_or(false))
        .with_default(is_default_language(&resolved.tag, &ctx.options.default_language))
        .with_language(resolved.tag);

    debug!(
        "Track {}: {} {} ({:?})",
        raw.id,
        track.combined_name(),
        track.language,
        resolved.source
    );
    track
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use crate::config::Settings;
    use crate::extraction::parse_probe_json;
    use crate::language::{Classification, LanguageClassifier, LanguageTag};
    use crate::models::{EpisodeNumber, SubtitleType};
    use crate::pipeline::{PipelineContext, RunOptions};
    use crate::tools::fake::{exit, ok, FakeRunner};
    use crate::tools::Toolbox;

    struct Fixed(&'static str);

    impl LanguageClassifier for Fixed {
        fn classify(&self, _text: &str) -> Option<Classification> {
            Some(Classification {
                code: self.0.to_string(),
                confidence: 0.9,
            })
        }
    }

    fn parse_track(properties: &str) -> ContainerTrack {
        let json = format!(
            r#"{{"tracks": [{{"id": 4, "type": "subtitles", "properties": {}}}]}}"#,
            properties
        );
        let value = serde_json::from_str(&json).unwrap();
        parse_probe_json(&value, Path::new("v.mkv")).unwrap().remove(0)
    }

    fn job() -> EpisodeJob {
        EpisodeJob::new("/tv/v.mkv", "42", EpisodeNumber::new(2), EpisodeNumber::new(5))
            .with_release(Some("Grp"))
    }

    fn options() -> RunOptions {
        RunOptions::from_settings(&Settings::default()).unwrap()
    }

    /// Resolve `properties` with a runner that must never be called.
    fn resolve_offline(properties: &str) -> TrackInfo {
        let runner = FakeRunner::new(|_, _, _| exit(2, "no tools expected"));
        let ctx = PipelineContext::new(Toolbox::with_defaults(&runner), &Fixed("deu"), options());
        let raw = parse_track(properties);
        let track = track_from_container(&ctx, Path::new("v.mkv"), &job(), &raw, Path::new("."));
        assert!(runner.calls.borrow().is_empty());
        track
    }

    #[test]
    fn unset_forced_flag_falls_back_to_name() {
        let track = resolve_offline(
            r#"{"codec_id": "S_TEXT/ASS", "track_name": "Signs & Songs", "forced_track": false, "language": "eng"}"#,
        );
        assert!(track.is_forced);

        let full = resolve_offline(
            r#"{"codec_id": "S_TEXT/ASS", "track_name": "Full Subtitles", "forced_track": false, "language": "eng"}"#,
        );
        assert!(!full.is_forced);
    }

    #[test]
    fn set_forced_flag_wins_over_name() {
        let track = resolve_offline(
            r#"{"codec_id": "S_TEXT/ASS", "track_name": "Dialogue", "forced_track": true, "language": "eng"}"#,
        );
        assert!(track.is_forced);
    }

    #[test]
    fn hearing_impaired_flag_maps_to_sdh() {
        let sdh = resolve_offline(
            r#"{"codec_id": "S_TEXT/UTF8", "track_name": "English", "flag_hearing_impaired": true, "language": "eng"}"#,
        );
        assert!(sdh.is_sdh);

        let plain = resolve_offline(r#"{"codec_id": "S_TEXT/UTF8", "track_name": "English", "language": "eng"}"#);
        assert!(!plain.is_sdh);
    }

    #[test]
    fn default_follows_configured_language() {
        let french = resolve_offline(r#"{"codec_id": "S_HDMV/PGS", "language_ietf": "fr-CA", "track_name": "Full"}"#);
        assert_eq!(french.language, LanguageTag::parse("fr-CA").unwrap());
        assert!(french.is_default);

        let english = resolve_offline(r#"{"codec_id": "S_HDMV/PGS", "language": "eng", "track_name": "Full"}"#);
        assert!(!english.is_default);

        let unknown = resolve_offline(r#"{"codec_id": "S_HDMV/PGS", "language": "und", "track_name": "Full"}"#);
        assert!(unknown.language.is_undetermined());
        assert!(!unknown.is_default);
    }

    #[test]
    fn identity_comes_from_job_and_container() {
        let track = resolve_offline(r#"{"codec_id": "S_TEXT/ASS", "language": "jpn", "track_name": "Full"}"#);
        assert_eq!(track.track_id, Some(4));
        assert_eq!(track.release, "Grp");
        assert_eq!(track.season, EpisodeNumber::new(2));
        assert_eq!(track.episode, EpisodeNumber::new(5));
        assert_eq!(track.subtype, SubtitleType::Ass);
        assert_eq!(track.filepath, Path::new("v.mkv"));
    }

    #[test]
    fn unnamed_track_is_labelled_from_sampled_language() {
        let dir = tempfile::tempdir().unwrap();
        let video = dir.path().join("v.mkv");
        fs::write(&video, "video").unwrap();

        let runner = FakeRunner::new(|_, args, _| {
            let (_, dest) = args[2].split_once(':').unwrap();
            fs::write(dest, "1\n00:00:01,000 --> 00:00:02,000\nGuten Morgen\n").unwrap();
            ok("")
        });
        let ctx = PipelineContext::new(Toolbox::with_defaults(&runner), &Fixed("deu"), options());
        let raw = parse_track(r#"{"codec_id": "S_TEXT/UTF8", "language": "und"}"#);

        let track = track_from_container(&ctx, &video, &job(), &raw, dir.path());
        assert_eq!(track.language.as_str(), "de");
        assert_eq!(track.trackname, "German # Deutsch");
        assert!(!track.is_forced);
        assert_eq!(runner.programs(), vec!["mkvextract"]);
        assert!(dir.path().join("sample.4.srt").exists());
    }

    #[test]
    fn unresolvable_unnamed_track_keeps_placeholder() {
        let runner = FakeRunner::new(|_, _, _| exit(2, "Error: cannot extract"));
        let ctx = PipelineContext::new(Toolbox::with_defaults(&runner), &Fixed("deu"), options());
        let dir = tempfile::tempdir().unwrap();
        let video = dir.path().join("v.mkv");
        fs::write(&video, "video").unwrap();
        let raw = parse_track(r#"{"codec_id": "S_TEXT/UTF8", "language": "und"}"#);

        let track = track_from_container(&ctx, &video, &job(), &raw, dir.path());
        assert!(track.language.is_undetermined());
        assert_eq!(track.trackname, PLACEHOLDER_TRACKNAME);
    }
}
