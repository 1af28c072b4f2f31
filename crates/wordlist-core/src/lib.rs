//! Shared types for Chinese word list extraction.
//!
//! This crate holds the plain data model used by the search engine and the
//! command-line tool. It performs no I/O.
//!
//! - [`enums`] -- Character type, response type, language and table layout
//! - [`character`] -- Input text and Han ideograph classification
//! - [`entry`] -- Dictionary line extraction into its four fields
//! - [`match_set`] -- Per-position search results

pub mod character;
pub mod entry;
pub mod enums;
pub mod match_set;

pub use character::InputText;
pub use entry::{DictionaryEntry, EntryParseError};
pub use enums::{CharacterType, Language, MarkdownLayout, ParseError, ResponseType};
pub use match_set::{MatchSet, Position};
