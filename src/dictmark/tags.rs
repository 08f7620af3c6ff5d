//! Inline tag extraction and part-of-speech label matching.

use regex::Regex;
use std::sync::OnceLock;

use super::models::TagMap;

/// Compiled regex for inline tag occurrences.
///
/// Matches `[key]` and `[key: v1, v2]`. The key may not contain `]` or `:`;
/// the optional value runs to the closing `]`.
static TAG_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Compiled regex for a part-of-speech line, `<label>` with a non-empty
/// label that contains no `>`.
static POS_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Returns the cached inline tag regex.
fn tag_regex() -> &'static Regex {
    TAG_PATTERN
        .get_or_init(|| Regex::new(r"\[([^\]:]+)(?::\s*([^\]]*))?\]").expect("Invalid tag pattern"))
}

/// Returns the cached part-of-speech label regex.
fn pos_regex() -> &'static Regex {
    POS_PATTERN.get_or_init(|| Regex::new(r"^<([^>]+)>$").expect("Invalid POS pattern"))
}

/// Extract inline tags from a meaning line's content (the text after the
/// leading `-` marker).
///
/// Occurrences are scanned left to right. Keys are trimmed and kept in
/// first-seen order; a key repeated on the same line accumulates into its
/// existing value sequence. A present, non-empty value is split on commas,
/// each piece trimmed, empty pieces discarded. A bare `[key]` registers the
/// key with no values.
///
/// Returns the gloss (the line with every matched span excised, then
/// trimmed) and the collected tags.
pub(super) fn extract_tags(content: &str) -> (String, TagMap) {
    let re = tag_regex();
    let mut tags = TagMap::new();
    let mut gloss = String::new();
    let mut last_pos = 0;

    for cap in re.captures_iter(content) {
        let span = cap.get(0).expect("capture group 0 always present");

        // Keep the text between the previous match and this one
        gloss.push_str(&content[last_pos..span.start()]);
        last_pos = span.end();

        let key = cap[1].trim();
        let value = cap.get(2).map(|m| m.as_str().trim()).unwrap_or("");

        if value.is_empty() {
            tags.append(key, std::iter::empty());
        } else {
            tags.append(
                key,
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|piece| !piece.is_empty())
                    .map(str::to_string),
            );
        }
    }

    gloss.push_str(&content[last_pos..]);
    (gloss.trim().to_string(), tags)
}

/// Extract the label from a part-of-speech line, e.g. `<名>` → `名`.
///
/// Returns `None` when the line does not carry a usable label: an empty
/// `<>` pair, a whitespace-only label, or a `>` inside the label. Such
/// lines are absorbed by the parser without opening a definition.
pub(super) fn parse_pos_label(line: &str) -> Option<String> {
    let caps = pos_regex().captures(line)?;
    let label = caps[1].trim();
    if label.is_empty() {
        return None;
    }
    Some(label.to_string())
}
