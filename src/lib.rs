//! # dictmark-parser
//!
//! A parser for a plain-text, line-oriented dictionary markup: headwords,
//! part-of-speech blocks in angle brackets, glosses with inline `[tag]`
//! annotations, and `>`-prefixed usage examples.
//!
//! The parser is a pure library call: it consumes an in-memory text blob
//! and returns typed entries, or a structured error carrying the offending
//! line number and text. File I/O is left to the caller.
pub mod dictmark;

// Re-export the main types for convenience
pub use dictmark::{
    error::{ParseError, Result},
    models::{Definition, Entry, Example, Meaning, TagMap},
    parse,
};
