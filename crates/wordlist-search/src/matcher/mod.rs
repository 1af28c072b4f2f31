// Entry matcher: position-anchored dictionary lookup of one candidate

use regex::Regex;
use wordlist_core::CharacterType;

use crate::dictionary::{Dictionary, DictionaryError};

/// Error raised while looking up one candidate.
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),

    /// The lookup pattern for the candidate could not be compiled (in
    /// practice only when it exceeds the regex size limit).
    #[error("cannot build lookup pattern for {candidate:?}: {source}")]
    Pattern {
        candidate: String,
        #[source]
        source: regex::Error,
    },
}

/// Build the anchored pattern that accepts a dictionary line whose
/// traditional (first) or simplified (second) field is exactly `candidate`.
///
/// The candidate is escaped, so it is always matched literally.
pub fn build_pattern(
    character_type: CharacterType,
    candidate: &str,
) -> Result<Regex, regex::Error> {
    let escaped = regex::escape(candidate);
    let pattern = match character_type {
        CharacterType::Traditional => format!(r"^{escaped} \S+ \[.+?\] .+"),
        CharacterType::Simplified => format!(r"^\S+ {escaped} \[.+?\] .+"),
    };
    Regex::new(&pattern)
}

/// Looks up candidates in a dictionary by full linear scan.
pub struct EntryMatcher<'a> {
    dictionary: &'a dyn Dictionary,
    character_type: CharacterType,
}

impl<'a> EntryMatcher<'a> {
    pub fn new(dictionary: &'a dyn Dictionary, character_type: CharacterType) -> Self {
        Self {
            dictionary,
            character_type,
        }
    }

    pub fn character_type(&self) -> CharacterType {
        self.character_type
    }

    /// Return every dictionary line whose selected field equals `candidate`,
    /// in dictionary order.
    ///
    /// An empty candidate, or one containing whitespace, can never equal a
    /// whitespace-delimited field: it matches nothing and does not touch the
    /// dictionary.
    pub fn match_candidate(&self, candidate: &str) -> Result<Vec<String>, MatchError> {
        if candidate.is_empty() || candidate.chars().any(char::is_whitespace) {
            return Ok(Vec::new());
        }

        let pattern =
            build_pattern(self.character_type, candidate).map_err(|source| MatchError::Pattern {
                candidate: candidate.to_string(),
                source,
            })?;
        let mut matches = Vec::new();
        self.dictionary.for_each_line(&mut |line| {
            if pattern.is_match(line) {
                matches.push(line.to_string());
            }
        })?;

        log::debug!(
            "lookup {candidate:?} ({}) in {}: {} match(es)",
            self.character_type,
            self.dictionary.describe(),
            matches.len()
        );
        Ok(matches)
    }
}
