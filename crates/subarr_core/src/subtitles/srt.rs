//! SRT dialogue extraction.

/// Dialogue text from the first `max_lines` lines of an SRT file.
///
/// Cue indices, timing lines and `<i>`-style tags are removed; blank
/// results are dropped.
pub fn dialogue_lines(content: &str, max_lines: usize) -> Vec<String> {
    content
        .lines()
        .take(max_lines)
        .map(|line| line.trim_start_matches('\u{feff}').trim())
        .filter(|line| !line.is_empty())
        .filter(|line| !line.chars().all(|c| c.is_ascii_digit()))
        .map(|line| {
            let timing = regex!(r"\d{2}:\d{2}:\d{2},\d{3} --> \d{2}:\d{2}:\d{2},\d{3}");
            let tags = regex!(r"</?[a-zA-Z][^>]*>");
            let line = timing.replace_all(line, "");
            tags.replace_all(&line, "").trim().to_string()
        })
        .filter(|line| !line.is_empty())
        .collect()
}
