// Shared enums: CharacterType, ResponseType, Language, MarkdownLayout

use std::fmt;
use std::str::FromStr;

/// Error returned when a textual option value is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid character type '{0}' (expected traditional, trad, t, simplified, simp or s)")]
    InvalidCharacterType(String),
    #[error("invalid response type '{0}' (expected json or markdown)")]
    InvalidResponseType(String),
    #[error("invalid language '{0}' (expected en or nl)")]
    InvalidLanguage(String),
}

// ---------------------------------------------------------------------------
// Character type
// ---------------------------------------------------------------------------

/// Which written form of a dictionary line the input is matched against.
///
/// A dictionary line has the shape `TRADITIONAL SIMPLIFIED [PINYIN] /DEF/`.
/// `Traditional` matches the first field, `Simplified` the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CharacterType {
    Traditional,
    #[default]
    Simplified,
}

impl CharacterType {
    /// Zero-based index of the whitespace-delimited field this type selects.
    pub fn field_index(self) -> usize {
        match self {
            CharacterType::Traditional => 0,
            CharacterType::Simplified => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CharacterType::Traditional => "traditional",
            CharacterType::Simplified => "simplified",
        }
    }
}

impl FromStr for CharacterType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "traditional" | "trad" | "t" => Ok(CharacterType::Traditional),
            "simplified" | "simp" | "s" => Ok(CharacterType::Simplified),
            _ => Err(ParseError::InvalidCharacterType(s.to_string())),
        }
    }
}

impl fmt::Display for CharacterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Response type
// ---------------------------------------------------------------------------

/// Output rendering of a search result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResponseType {
    /// Array of arrays of raw dictionary lines, one inner array per position.
    #[default]
    Json,
    /// A table with one row per matched dictionary line.
    Markdown,
}

impl FromStr for ResponseType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(ResponseType::Json),
            "markdown" | "md" | "m" => Ok(ResponseType::Markdown),
            _ => Err(ParseError::InvalidResponseType(s.to_string())),
        }
    }
}

impl fmt::Display for ResponseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseType::Json => f.write_str("json"),
            ResponseType::Markdown => f.write_str("markdown"),
        }
    }
}

// ---------------------------------------------------------------------------
// Language
// ---------------------------------------------------------------------------

/// Translation language, which decides the dictionary file to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// CC-CEDICT (Chinese to English).
    #[default]
    English,
    /// CC-CEDICT derived Chinese to Dutch dictionary.
    Dutch,
}

impl Language {
    /// File name of the dictionary for this language.
    pub fn dictionary_file_name(self) -> &'static str {
        match self {
            Language::English => "cedict_1_0_ts_utf-8_mdbg.txt",
            Language::Dutch => "cndict_1_0_ts_utf-8_mdbg.txt",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Dutch => "nl",
        }
    }
}

impl FromStr for Language {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "nl" | "dutch" => Ok(Language::Dutch),
            _ => Err(ParseError::InvalidLanguage(s.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ---------------------------------------------------------------------------
// Markdown layout
// ---------------------------------------------------------------------------

/// Column layout of the Markdown table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MarkdownLayout {
    /// `| character | pinyin | translation |`, where the character column
    /// shows the form selected by [`CharacterType`].
    #[default]
    Compact,
    /// `| traditional | simplified | pinyin | translation |`.
    Full,
}
