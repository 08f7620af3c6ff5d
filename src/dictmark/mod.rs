//! Core dictionary markup parsing module

pub mod error;
pub mod models;

mod line;
mod parser;
mod tags;

pub use error::{ParseError, Result};
pub use models::{Definition, Entry, Example, Meaning, TagMap};
pub use parser::parse;
