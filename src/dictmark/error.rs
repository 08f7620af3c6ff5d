//! Custom error types for the dictmark-parser crate.

use thiserror::Error;

/// The primary error type for all parsing operations in this crate.
///
/// Every variant is an ordering violation: a line type appeared before the
/// structure it must nest under was open. Each carries the 1-based physical
/// line number and the original, untrimmed line text so callers can point
/// the author at the exact spot in the source.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A part-of-speech line (`<...>`) appeared before any headword.
    #[error("POS (<...>) found before term at line {line}: {raw:?}")]
    PosBeforeTerm { line: usize, raw: String },

    /// A meaning line (`- ...`) appeared before any headword.
    #[error("Meaning (-) found before term at line {line}: {raw:?}")]
    MeaningBeforeTerm { line: usize, raw: String },

    /// A meaning line (`- ...`) appeared with an open entry but no open
    /// part-of-speech block.
    #[error("Meaning (-) found before POS (<...>) at line {line}: {raw:?}")]
    MeaningBeforePos { line: usize, raw: String },

    /// An example line (`> ...`) appeared before any headword.
    #[error("Example (>) found before term at line {line}: {raw:?}")]
    ExampleBeforeTerm { line: usize, raw: String },

    /// An example line (`> ...`) appeared with no open part-of-speech block.
    #[error("Example (>) found before POS (<...>) at line {line}: {raw:?}")]
    ExampleBeforePos { line: usize, raw: String },

    /// An example line (`> ...`) appeared with no open meaning.
    #[error("Example (>) found before meaning (-) at line {line}: {raw:?}")]
    ExampleBeforeMeaning { line: usize, raw: String },
}

impl ParseError {
    /// The 1-based physical line number of the offending line.
    pub fn line(&self) -> usize {
        match self {
            Self::PosBeforeTerm { line, .. }
            | Self::MeaningBeforeTerm { line, .. }
            | Self::MeaningBeforePos { line, .. }
            | Self::ExampleBeforeTerm { line, .. }
            | Self::ExampleBeforePos { line, .. }
            | Self::ExampleBeforeMeaning { line, .. } => *line,
        }
    }

    /// The offending line exactly as it appeared in the input, untrimmed.
    pub fn raw_line(&self) -> &str {
        match self {
            Self::PosBeforeTerm { raw, .. }
            | Self::MeaningBeforeTerm { raw, .. }
            | Self::MeaningBeforePos { raw, .. }
            | Self::ExampleBeforeTerm { raw, .. }
            | Self::ExampleBeforePos { raw, .. }
            | Self::ExampleBeforeMeaning { raw, .. } => raw,
        }
    }
}

/// A convenience `Result` type alias using the crate's `ParseError` type.
pub type Result<T> = std::result::Result<T, ParseError>;
