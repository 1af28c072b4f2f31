//! Dictionary substring search for Chinese text.
//!
//! Turns unsegmented Chinese text into a word list by looking up every
//! substring of the text in a CC-CEDICT style dictionary and collecting the
//! matching lines per starting position. All matches are returned; no
//! segmentation is chosen.
//!
//! # Architecture
//!
//! - [`dictionary`] -- Line-oriented dictionary access (file or memory)
//! - [`matcher`] -- Anchored lookup of one candidate in the dictionary
//! - [`expander`] -- Candidate substrings for every starting position
//! - [`search`] -- Orchestration, deduplication and per-position aggregation
//! - [`format`] -- JSON and Markdown rendering
//! - [`handle`] -- [`WordListHandle`], the one-stop entry point

pub mod dictionary;
pub mod expander;
pub mod format;
pub mod handle;
pub mod matcher;
pub mod search;

pub use dictionary::{Dictionary, DictionaryError, FileDictionary, MemoryDictionary};
pub use handle::{WordListError, WordListHandle};
pub use search::{DedupPolicy, SearchEngine, SearchError, SearchOptions};
