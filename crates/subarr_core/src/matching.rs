//! External-vs-embedded track comparison.

use tracing::debug;

use crate::models::{RemuxDecision, TrackInfo};

/// Whether two tracks carry the same subtitles.
///
/// Same primary language subtag, same combined display name, same format.
pub fn is_equivalent(candidate: &TrackInfo, embedded: &TrackInfo) -> bool {
    candidate.language.primary_subtag() == embedded.language.primary_subtag()
        && candidate.combined_name() == embedded.combined_name()
        && candidate.subtype == embedded.subtype
}

/// Decide the remux fate of one external candidate.
///
/// Embedded tracks are scanned in container order and the first equivalent
/// one settles it. An empty container means the candidate is new.
pub fn compare_with_embedded(candidate: &TrackInfo, embedded: &[TrackInfo]) -> RemuxDecision {
    match embedded.iter().find(|track| is_equivalent(candidate, track)) {
        Some(existing) => {
            debug!(
                "{} already present as track {:?}",
                candidate.combined_name(),
                existing.track_id
            );
            RemuxDecision::AlreadyPresent
        }
        None => RemuxDecision::Remux,
    }
}

/// Set `remux` on every candidate.
pub fn reconcile(candidates: &mut [TrackInfo], embedded: &[TrackInfo]) {
    for candidate in candidates.iter_mut() {
        candidate.remux = compare_with_embedded(candidate, embedded);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::LanguageTag;
    use crate::models::{EpisodeNumber, SubtitleType};

    fn track(lang: &str, name: &str, subtype: SubtitleType) -> TrackInfo {
        TrackInfo::new(EpisodeNumber::new(1), EpisodeNumber::new(2))
            .with_release("Grp")
            .with_trackname(name)
            .with_language(LanguageTag::parse(lang).unwrap())
            .with_subtype(subtype)
    }

    #[test]
    fn regional_variants_are_duplicates() {
        let external = track("es-419", "Full", SubtitleType::Ass);
        let embedded = vec![track("es-ES", "Full", SubtitleType::Ass).with_track_id(3)];
        assert_eq!(
            compare_with_embedded(&external, &embedded),
            RemuxDecision::AlreadyPresent
        );
    }

    #[test]
    fn any_difference_means_new() {
        let external = track("en", "Full", SubtitleType::Ass);
        let embedded = vec![
            track("fr", "Full", SubtitleType::Ass),
            track("en", "Signs", SubtitleType::Ass),
            track("en", "Full", SubtitleType::Srt),
        ];
        assert_eq!(compare_with_embedded(&external, &embedded), RemuxDecision::Remux);
    }

    #[test]
    fn empty_container_means_new() {
        let external = track("en", "Full", SubtitleType::Ass);
        assert_eq!(compare_with_embedded(&external, &[]), RemuxDecision::Remux);
    }

    #[test]
    fn name_must_match_exactly() {
        let external = track("en", "Full", SubtitleType::Ass);
        let embedded = vec![track("en", "Full Subs", SubtitleType::Ass)];
        assert_eq!(compare_with_embedded(&external, &embedded), RemuxDecision::Remux);
    }

    #[test]
    fn reconcile_is_order_stable() {
        let embedded = vec![track("en", "Full", SubtitleType::Ass)];
        let mut candidates = vec![
            track("en", "Full", SubtitleType::Ass),
            track("de", "Full", SubtitleType::Ass),
        ];
        reconcile(&mut candidates, &embedded);
        let again = candidates.clone();
        reconcile(&mut candidates, &embedded);
        assert_eq!(candidates, again);
        assert_eq!(candidates[0].remux, RemuxDecision::AlreadyPresent);
        assert_eq!(candidates[1].remux, RemuxDecision::Remux);
    }
}
