//! ASS/SSA reading.
//!
//! Only what classification and sidecar import need: the `[Script Info]`
//! header as ordered key/value pairs and the plain text of dialogue events.
//!
//! # Format Overview
//!
//! - `[Script Info]`: metadata (title, resolution, tool leftovers)
//! - `[V4+ Styles]` / `[V4 Styles]`: ignored here
//! - `[Events]`: `Format:` line, then `Dialogue:` / `Comment:` lines

/// Script Info keys written by authoring tools that say nothing about the
/// subtitle itself. Dropped by [`clean_header`].
pub const VOLATILE_HEADER_KEYS: &[&str] = &[
    "ScriptType",
    "WrapStyle",
    "PlayResX",
    "PlayResY",
    "ScaledBorderAndShadow",
    "YCbCr Matrix",
    "Last Style Storage",
    "Video Aspect Ratio",
    "Video Zoom",
    "Video Position",
    "Collisions",
    "Video File",
    "Aegisub Video Aspect Ratio",
    "Synch Point",
    "Update Details",
    "Timer",
];

/// Parsed subset of an ASS/SSA file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssDocument {
    /// `[Script Info]` entries in file order.
    pub script_info: Vec<(String, String)>,
    /// Plain dialogue text, markup removed, comments skipped.
    pub dialogue: Vec<String>,
}

impl AssDocument {
    /// Value of a Script Info key (case-insensitive).
    pub fn header(&self, key: &str) -> Option<&str> {
        self.script_info
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// Script title, ignoring the placeholders authoring tools write.
    pub fn title(&self) -> Option<&str> {
        self.header("Title")
            .map(str::trim)
            .filter(|t| !t.is_empty() && !t.eq_ignore_ascii_case("Default Aegisub file"))
    }
}

/// Parse ASS/SSA content, keeping at most `max_events` dialogue lines.
pub fn parse_ass(content: &str, max_events: usize) -> AssDocument {
    let mut doc = AssDocument::default();
    let mut section = String::new();
    let mut text_index = 9;

    for line in content.lines() {
        let line = line.trim_start_matches('\u{feff}').trim();
        if line.is_empty() || line.starts_with(';') {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            section = line[1..line.len() - 1].to_lowercase();
            continue;
        }

        match section.as_str() {
            "script info" => {
                if let Some((key, value)) = line.split_once(':') {
                    doc.script_info
                        .push((key.trim().to_string(), value.trim().to_string()));
                }
            }
            "events" => {
                if let Some(format) = line.strip_prefix("Format:") {
                    text_index = format
                        .split(',')
                        .position(|f| f.trim().eq_ignore_ascii_case("text"))
                        .unwrap_or(9);
                } else if let Some(event) = line.strip_prefix("Dialogue:") {
                    if doc.dialogue.len() >= max_events {
                        break;
                    }
                    let Some(raw) = event.splitn(text_index + 1, ',').nth(text_index) else {
                        continue;
                    };
                    let text = strip_override_tags(raw);
                    if !text.is_empty() {
                        doc.dialogue.push(text);
                    }
                }
            }
            _ => {}
        }
    }

    doc
}

/// Remove `{...}` override blocks and ASS escapes, leaving plain text.
pub fn strip_override_tags(text: &str) -> String {
    let stripped = regex!(r"\{[^}]*\}").replace_all(text, "");
    stripped
        .replace("\\N", " ")
        .replace("\\n", " ")
        .replace("\\h", " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Drop volatile Script Info keys, keeping everything else in order.
pub fn clean_header(script_info: &mut Vec<(String, String)>) {
    script_info.retain(|(key, _)| {
        !VOLATILE_HEADER_KEYS
            .iter()
            .any(|volatile| volatile.eq_ignore_ascii_case(key))
    });
}
