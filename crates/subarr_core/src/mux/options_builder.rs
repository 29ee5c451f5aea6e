//! mkvmerge command options builder.
//!
//! Produces the token list for remuxing a video with additional subtitle
//! files. Each subtitle file contributes a single track, always id `0`.

use std::path::Path;

use crate::models::TrackInfo;

/// Builder for mkvmerge command-line options.
pub struct MkvmergeOptionsBuilder<'a> {
    source: &'a Path,
    output_path: &'a Path,
    tracks: Vec<&'a TrackInfo>,
}

impl<'a> MkvmergeOptionsBuilder<'a> {
    pub fn new(source: &'a Path, output_path: &'a Path) -> Self {
        Self {
            source,
            output_path,
            tracks: Vec::new(),
        }
    }

    pub fn add_track(mut self, track: &'a TrackInfo) -> Self {
        self.tracks.push(track);
        self
    }

    pub fn add_tracks(mut self, tracks: impl IntoIterator<Item = &'a TrackInfo>) -> Self {
        self.tracks.extend(tracks);
        self
    }

    /// Build the complete mkvmerge argument list.
    pub fn build(&self) -> Vec<String> {
        let mut tokens = vec![
            "-o".to_string(),
            self.output_path.to_string_lossy().to_string(),
            self.source.to_string_lossy().to_string(),
        ];

        for track in &self.tracks {
            add_single_track_options(&mut tokens, track);
        }

        tokens
    }
}

fn flag(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Options for one subtitle file, followed by the file itself.
fn add_single_track_options(tokens: &mut Vec<String>, track: &TrackInfo) {
    let track_id = "0";

    tokens.push("--default-track-flag".to_string());
    tokens.push(format!("{}:{}", track_id, flag(track.is_default)));

    tokens.push("--track-enabled-flag".to_string());
    tokens.push(format!("{}:true", track_id));

    tokens.push("--forced-display-flag".to_string());
    tokens.push(format!("{}:{}", track_id, flag(track.is_forced)));

    tokens.push("--hearing-impaired-flag".to_string());
    tokens.push(format!("{}:{}", track_id, flag(track.is_sdh)));

    tokens.push("--track-name".to_string());
    tokens.push(format!("{}:{}", track_id, track.combined_name()));

    tokens.push("--language".to_string());
    tokens.push(format!("{}:{}", track_id, track.language));

    tokens.push(track.filepath.to_string_lossy().to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::LanguageTag;
    use crate::models::{EpisodeNumber, SubtitleType};

    #[test]
    fn one_block_per_track_after_source() {
        let forced = TrackInfo::new(EpisodeNumber::new(1), EpisodeNumber::new(2))
            .with_release("Grp")
            .with_trackname("Signs")
            .with_forced(true)
            .with_language(LanguageTag::parse("en").unwrap())
            .with_subtype(SubtitleType::Ass)
            .with_filepath("/tmp/subs/a.ass");
        let full = TrackInfo::new(EpisodeNumber::new(1), EpisodeNumber::new(2))
            .with_trackname("Full")
            .with_default(true)
            .with_sdh(true)
            .with_language(LanguageTag::parse("fr").unwrap())
            .with_filepath("/tmp/subs/b.srt");

        let tokens = MkvmergeOptionsBuilder::new(Path::new("/v/ep.mkv"), Path::new("/t/ep.mkv"))
            .add_tracks([&forced, &full])
            .build();

        assert_eq!(&tokens[..3], &["-o", "/t/ep.mkv", "/v/ep.mkv"]);
        assert_eq!(
            &tokens[3..16],
            &[
                "--default-track-flag",
                "0:false",
                "--track-enabled-flag",
                "0:true",
                "--forced-display-flag",
                "0:true",
                "--hearing-impaired-flag",
                "0:false",
                "--track-name",
                "0:[Grp]-[Signs]",
                "--language",
                "0:en",
                "/tmp/subs/a.ass",
            ]
        );
        assert_eq!(tokens[16..].len(), 13);
        assert_eq!(tokens[17], "0:true");
        assert_eq!(tokens[23], "0:true");
        assert_eq!(tokens[25], "0:[Anonymous]-[Full]");
        assert_eq!(tokens.last().map(String::as_str), Some("/tmp/subs/b.srt"));
    }
}
