//! Canonical subtitle filename codec.
//!
//! ```text
//! S<season>.E<episode>.[<release>]-[<trackname>].<default.><language>.<forced.><sdh.><ext>
//! ```
//!
//! Flag tokens appear only when set. Decoding accepts exactly what encoding
//! produces, so `decode(encode(t))` restores every filename-encoded field.

use std::path::Path;

use super::error::{NamingError, NamingResult};
use crate::language::LanguageTag;
use crate::models::{SubtitleType, TrackInfo};

/// Flag tokens recognized in the flag section, in encoding order.
const DEFAULT_TOKEN: &str = "default";
const FORCED_TOKEN: &str = "forced";
const SDH_TOKEN: &str = "sdh";

/// Build the canonical filename for a track.
pub fn encode(track: &TrackInfo) -> String {
    format!(
        "S{}.E{}.{}.{}{}.{}{}{}",
        track.season,
        track.episode,
        track.combined_name(),
        track.default_token(),
        track.language,
        track.forced_token(),
        track.sdh_token(),
        track.subtype.extension(),
    )
}

/// Parse a canonical filename (or a path ending in one) into a track.
///
/// The returned track has `filepath` set to `path`, `release` and
/// `trackname` split out of the bracketed name, and no container id.
pub fn decode(path: &Path) -> NamingResult<TrackInfo> {
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| NamingError::malformed(path.display().to_string(), "no file name"))?;

    let caps = regex!(r"^S(\d{2,3})\.E(\d{2,3})\.\[(.+)\]-\[(.+)\]\.(.+)\.(\w{3,4})$")
        .captures(&filename)
        .ok_or_else(|| NamingError::malformed(&filename, "does not match the canonical pattern"))?;

    let season = caps[1]
        .parse()
        .map_err(|e| NamingError::malformed(&filename, format!("{}", e)))?;
    let episode = caps[2]
        .parse()
        .map_err(|e| NamingError::malformed(&filename, format!("{}", e)))?;

    let mut flags = caps[5].to_string();
    let is_default = strip_once(&mut flags, DEFAULT_TOKEN);
    let is_forced = strip_once(&mut flags, FORCED_TOKEN);
    let is_sdh = strip_once(&mut flags, SDH_TOKEN);

    let remainder: Vec<&str> = flags.split('.').filter(|part| !part.is_empty()).collect();
    let [language] = remainder.as_slice() else {
        return Err(NamingError::malformed(
            &filename,
            format!("expected one language token, found '{}'", remainder.join(".")),
        ));
    };
    let language = LanguageTag::parse(language)
        .map_err(|e| NamingError::malformed(&filename, e.to_string()))?;

    Ok(TrackInfo::new(season, episode)
        .with_filepath(path)
        .with_release(&caps[3])
        .with_trackname(&caps[4])
        .with_default(is_default)
        .with_forced(is_forced)
        .with_sdh(is_sdh)
        .with_language(language)
        .with_subtype(SubtitleType::from_extension(&caps[6])))
}

/// Remove the first occurrence of `token`; report whether it was present.
fn strip_once(haystack: &mut String, token: &str) -> bool {
    match haystack.find(token) {
        Some(idx) => {
            haystack.replace_range(idx..idx + token.len(), "");
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EpisodeNumber;

    fn track(language: &str) -> TrackInfo {
        TrackInfo::new(EpisodeNumber::new(1), EpisodeNumber::new(20))
            .with_release("Retr0")
            .with_trackname("Full")
            .with_language(LanguageTag::parse(language).unwrap())
            .with_subtype(SubtitleType::Ass)
    }

    #[test]
    fn encodes_without_stray_separators() {
        assert_eq!(encode(&track("en")), "S01.E20.[Retr0]-[Full].en.ass");
    }

    #[test]
    fn encodes_all_flags_in_order() {
        let t = track("fr").with_default(true).with_forced(true).with_sdh(true);
        assert_eq!(encode(&t), "S01.E20.[Retr0]-[Full].default.fr.forced.sdh.ass");
    }

    #[test]
    fn decodes_release_style_name() {
        let path = Path::new("S01.E20.[Retr0]-[Signs#Songs [Commie]].default.eng.forced.ass");
        let t = decode(path).unwrap();
        assert_eq!(t.season.to_string(), "01");
        assert_eq!(t.episode.to_string(), "20");
        assert_eq!(t.release, "Retr0");
        assert_eq!(t.trackname, "Signs#Songs [Commie]");
        assert!(t.is_default);
        assert!(t.is_forced);
        assert!(!t.is_sdh);
        assert_eq!(t.language.as_str(), "en");
        assert_eq!(t.subtype, SubtitleType::Ass);
        assert_eq!(t.filepath, path);
        assert_eq!(t.track_id, None);
    }

    #[test]
    fn round_trip_preserves_encoded_fields() {
        let variants = [
            track("en"),
            track("pt-BR").with_default(true),
            track("und").with_forced(true).with_sdh(true),
            track("zh-Hans-CN").with_subtype(SubtitleType::Ttml),
            track("es-419").with_sdh(true).with_subtype(SubtitleType::Sup),
            track("de").with_release("").with_trackname("Dub/Full"),
            track("en").with_release("Fan/Subs"),
            track("de-DE-u-co-phonebk"),
        ];
        for t in variants {
            let name = encode(&t);
            let back = decode(Path::new(&name)).unwrap();
            assert_eq!(back.filename_fields(), t.filename_fields(), "{}", name);
            assert_eq!(encode(&back), name);
            assert!(!name.contains('/'), "{}", name);
        }
    }

    #[test]
    fn three_digit_numbers() {
        let t = decode(Path::new("S100.E104.[A]-[B].ja.srt")).unwrap();
        assert_eq!(t.season.value(), 100);
        assert_eq!(t.episode.to_string(), "104");
    }

    #[test]
    fn malformed_names_are_errors() {
        for name in [
            "episode.ass",
            "S1.E20.[A]-[B].en.ass",
            "S01.E20.A-B.en.ass",
            "S01.E20.[A]-[B].ass",
            "S01.E20.[A]-[B].en.fr.ass",
            "S01.E20.[A]-[B].english.ass",
        ] {
            let err = decode(Path::new(name)).unwrap_err();
            assert!(matches!(err, NamingError::MalformedFilename { .. }), "{}", name);
        }
    }
}
