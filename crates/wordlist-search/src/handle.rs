// WordListHandle: top-level integration point for word list extraction.
//
// Owns a dictionary and the search options and provides the whole
// text -> match set -> rendered word list pipeline through one value.
// Each call builds a fresh SearchEngine, so no search state outlives a call.

use std::path::PathBuf;

use wordlist_core::{CharacterType, InputText, MarkdownLayout, MatchSet, ResponseType};

use crate::dictionary::{Dictionary, DictionaryError, FileDictionary};
use crate::format::{FormatError, render};
use crate::search::{DedupPolicy, SearchEngine, SearchError, SearchOptions};

/// Error type for the handle's end-to-end operations.
#[derive(Debug, thiserror::Error)]
pub enum WordListError {
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Dictionary plus options, ready to turn Chinese text into a word list.
pub struct WordListHandle<D: Dictionary> {
    dictionary: D,
    options: SearchOptions,
    markdown_layout: MarkdownLayout,
}

impl WordListHandle<FileDictionary> {
    /// Create a handle backed by a dictionary file.
    pub fn open(path: impl Into<PathBuf>, options: SearchOptions) -> Result<Self, WordListError> {
        let dictionary = FileDictionary::open(path)?;
        log::info!("using dictionary {}", dictionary.path().display());
        Ok(Self::new(dictionary, options))
    }
}

impl<D: Dictionary> WordListHandle<D> {
    pub fn new(dictionary: D, options: SearchOptions) -> Self {
        Self {
            dictionary,
            options,
            markdown_layout: MarkdownLayout::default(),
        }
    }

    pub fn dictionary(&self) -> &D {
        &self.dictionary
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    // =========================================================================
    // Core operations
    // =========================================================================

    /// Find all dictionary matches for every position of `text`.
    pub fn search(&self, text: &str) -> Result<MatchSet, SearchError> {
        let input = InputText::new(text);
        SearchEngine::new(&self.dictionary, self.options).search(&input)
    }

    /// Render a match set using the handle's character type and layout.
    pub fn render(
        &self,
        match_set: &MatchSet,
        response_type: ResponseType,
    ) -> Result<String, FormatError> {
        render(
            match_set,
            response_type,
            self.options.character_type,
            self.markdown_layout,
        )
    }

    /// Search `text` and render the result.
    pub fn word_list(
        &self,
        text: &str,
        response_type: ResponseType,
    ) -> Result<String, WordListError> {
        let match_set = self.search(text)?;
        Ok(self.render(&match_set, response_type)?)
    }

    // =========================================================================
    // Option setters
    // =========================================================================

    pub fn set_character_type(&mut self, character_type: CharacterType) {
        self.options.character_type = character_type;
    }

    pub fn set_dedup(&mut self, dedup: DedupPolicy) {
        self.options.dedup = dedup;
    }

    /// Longest candidate looked up, in characters. `None` or `Some(0)` means
    /// unbounded.
    pub fn set_max_word_length(&mut self, max_word_length: Option<usize>) {
        self.options.max_word_length = max_word_length;
    }

    pub fn set_threads(&mut self, threads: usize) {
        self.options.threads = threads;
    }

    pub fn set_markdown_layout(&mut self, layout: MarkdownLayout) {
        self.markdown_layout = layout;
    }
}
