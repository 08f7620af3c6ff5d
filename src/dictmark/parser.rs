//! Single-pass line parser for dictionary markup.
//!
//! The parser walks the input line by line, classifies each line, and keeps
//! three "current" slots (entry, part-of-speech block, meaning) that are
//! finalized into their parent whenever a higher-priority line type starts.
//! There is no lookahead and no recursion; a single ordering violation
//! aborts the whole parse.

use log::{debug, info, trace};

use super::error::{ParseError, Result};
use super::line::{classify, LineType};
use super::models::{Definition, Entry, Example, Meaning};
use super::tags;

/// Transient parser state: the entities currently under construction.
///
/// Each slot is filled when its line type is seen and drained into its
/// parent by the finalize methods. Slots always nest: a meaning can only
/// exist under an open definition, a definition only under an open entry.
#[derive(Default)]
struct ParserState {
    entry: Option<Entry>,
    definition: Option<Definition>,
    meaning: Option<Meaning>,
}

impl ParserState {
    /// Move the current meaning into the current definition.
    fn finalize_meaning(&mut self) {
        if let Some(meaning) = self.meaning.take() {
            if let Some(definition) = self.definition.as_mut() {
                definition.meanings.push(meaning);
            }
        }
    }

    /// Close the current part-of-speech block into the current entry,
    /// finalizing any open meaning first.
    fn finalize_definition(&mut self) {
        self.finalize_meaning();
        if let Some(definition) = self.definition.take() {
            if let Some(entry) = self.entry.as_mut() {
                entry.definitions.push(definition);
            }
        }
    }

    /// Close the current entry into the output, finalizing any open
    /// definition first.
    fn finalize_entry(&mut self, entries: &mut Vec<Entry>) {
        self.finalize_definition();
        if let Some(entry) = self.entry.take() {
            entries.push(entry);
        }
    }
}

/// Split an example line's content (after the `>` marker) at the first `|`.
///
/// Text before the separator is the original, trimmed text after it the
/// translation. Without a separator the whole content is the original and
/// the translation is empty.
fn parse_example(content: &str) -> Example {
    match content.find('|') {
        Some(idx) => Example {
            original: content[..idx].trim().to_string(),
            translation: content[idx + 1..].trim().to_string(),
        },
        None => Example {
            original: content.trim().to_string(),
            translation: String::new(),
        },
    }
}

/// Parse dictionary markup into an ordered list of entries.
///
/// The input is a single text blob with `\n` line separators. Line layout:
/// - headword: any text not matching the forms below; starts a new entry
/// - `<label>`: opens a part-of-speech block under the current entry
/// - `- gloss [tag] [tag: v1, v2]`: a meaning under the current block
/// - `> original | translation`: an example under the current meaning
/// - blank lines are ignored everywhere; indentation is insignificant
///
/// # Errors
/// Fails on the first ordering violation (e.g. a meaning line before any
/// part-of-speech line) with the 1-based line number and the raw line text.
/// No partial result is returned.
pub fn parse(text: &str) -> Result<Vec<Entry>> {
    let mut entries = Vec::new();
    let mut state = ParserState::default();

    info!("Parsing dictionary markup: {} bytes", text.len());

    for (idx, raw_line) in text.split('\n').enumerate() {
        let line_number = idx + 1;
        let line = raw_line.trim();
        let line_type = classify(line);
        trace!("line {}: {:?}", line_number, line_type);

        match line_type {
            LineType::Empty => {}

            LineType::Pos => {
                if state.entry.is_none() {
                    return Err(ParseError::PosBeforeTerm {
                        line: line_number,
                        raw: raw_line.to_string(),
                    });
                }
                state.finalize_definition();
                if let Some(pos) = tags::parse_pos_label(line) {
                    debug!("line {}: part-of-speech block <{}>", line_number, pos);
                    state.definition = Some(Definition::new(pos));
                }
                // Unusable label (e.g. `<>`): the previous block is closed
                // and nothing opens until the next pos or term line.
            }

            LineType::Meaning => {
                if state.entry.is_none() {
                    return Err(ParseError::MeaningBeforeTerm {
                        line: line_number,
                        raw: raw_line.to_string(),
                    });
                }
                if state.definition.is_none() {
                    return Err(ParseError::MeaningBeforePos {
                        line: line_number,
                        raw: raw_line.to_string(),
                    });
                }
                state.finalize_meaning();
                let content = line[1..].trim();
                let (gloss, tags) = tags::extract_tags(content);
                state.meaning = Some(Meaning::new(gloss, tags));
            }

            LineType::Example => {
                if state.entry.is_none() {
                    return Err(ParseError::ExampleBeforeTerm {
                        line: line_number,
                        raw: raw_line.to_string(),
                    });
                }
                if state.definition.is_none() {
                    return Err(ParseError::ExampleBeforePos {
                        line: line_number,
                        raw: raw_line.to_string(),
                    });
                }
                let Some(meaning) = state.meaning.as_mut() else {
                    return Err(ParseError::ExampleBeforeMeaning {
                        line: line_number,
                        raw: raw_line.to_string(),
                    });
                };
                meaning.examples.push(parse_example(line[1..].trim()));
            }

            LineType::Term => {
                state.finalize_entry(&mut entries);
                debug!("line {}: entry {:?}", line_number, line);
                state.entry = Some(Entry::new(line.to_string()));
            }
        }
    }

    // Flush whatever is still open at end of input
    state.finalize_entry(&mut entries);

    info!("Parsed {} entries", entries.len());
    Ok(entries)
}
