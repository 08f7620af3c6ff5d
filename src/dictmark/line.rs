//! Line classification for the dictionary markup.

/// The kind of a physical line, decided by its leading character(s) after
/// surrounding whitespace is trimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum LineType {
    /// Blank after trimming. Carries no meaning anywhere in the document.
    Empty,
    /// `<label>`: opens a part-of-speech block.
    Pos,
    /// `- gloss [tags...]`: a meaning under the current part of speech.
    Meaning,
    /// `> original | translation`: an example under the current meaning.
    Example,
    /// Anything else: a headword starting a new entry.
    Term,
}

/// Classify a trimmed line. First match wins.
pub(super) fn classify(line: &str) -> LineType {
    if line.is_empty() {
        return LineType::Empty;
    }
    if line.starts_with('<') && line.ends_with('>') {
        return LineType::Pos;
    }
    if line.starts_with('-') {
        return LineType::Meaning;
    }
    if line.starts_with('>') {
        return LineType::Example;
    }
    LineType::Term
}
