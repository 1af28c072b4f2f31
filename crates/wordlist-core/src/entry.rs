// Dictionary entry extraction
//
// A dictionary line has the shape
//
//   TRADITIONAL SIMPLIFIED [PINYIN] /DEFINITION1/DEFINITION2/.../
//
// Lines are kept raw by the search engine and only split into fields when
// a table is rendered.

use std::sync::LazyLock;

use regex::Regex;

use crate::enums::CharacterType;

/// Four-field extraction pattern. The definition group is greedy so that
/// slash-separated definitions stay intact up to the final `/`.
static ENTRY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\S+)\s(\S+)\s\[(.+?)\]\s/(.+)/").unwrap());

/// A line that could not be split into its four fields.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntryParseError {
    #[error("malformed dictionary line: {line:?}")]
    Malformed { line: String },
}

/// A dictionary line split into its fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    pub traditional: String,
    pub simplified: String,
    pub pinyin: String,
    /// Everything between the first and the last `/`, e.g. `hello/hi`.
    pub definition: String,
}

impl DictionaryEntry {
    /// Split a raw dictionary line into its fields.
    pub fn parse(line: &str) -> Result<Self, EntryParseError> {
        let caps = ENTRY_PATTERN
            .captures(line)
            .ok_or_else(|| EntryParseError::Malformed {
                line: line.to_string(),
            })?;
        Ok(Self {
            traditional: caps[1].to_string(),
            simplified: caps[2].to_string(),
            pinyin: caps[3].to_string(),
            definition: caps[4].to_string(),
        })
    }

    /// The form selected by the character type.
    pub fn headword(&self, character_type: CharacterType) -> &str {
        match character_type {
            CharacterType::Traditional => &self.traditional,
            CharacterType::Simplified => &self.simplified,
        }
    }

    /// Individual definitions, in dictionary order.
    pub fn definitions(&self) -> impl Iterator<Item = &str> {
        self.definition.split('/').filter(|d| !d.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_four_fields() {
        let entry =
            DictionaryEntry::parse("荷蘭 荷兰 [He2 lan2] /Holland/the Netherlands/").unwrap();
        assert_eq!(entry.traditional, "荷蘭");
        assert_eq!(entry.simplified, "荷兰");
        assert_eq!(entry.pinyin, "He2 lan2");
        assert_eq!(entry.definition, "Holland/the Netherlands");
    }

    #[test]
    fn definition_keeps_internal_slashes() {
        let entry = DictionaryEntry::parse("你好 你好 [ni3 hao3] /hello/hi/").unwrap();
        assert_eq!(entry.definition, "hello/hi");
        assert_eq!(entry.definitions().collect::<Vec<_>>(), vec!["hello", "hi"]);
    }

    #[test]
    fn headword_follows_character_type() {
        let entry = DictionaryEntry::parse("這 这 [zhe4] /this/").unwrap();
        assert_eq!(entry.headword(CharacterType::Traditional), "這");
        assert_eq!(entry.headword(CharacterType::Simplified), "这");
    }

    #[test]
    fn malformed_line_is_an_error() {
        for line in ["# CC-CEDICT", "你 你 ni3 /you/", "你 你 [ni3] you", ""] {
            assert_eq!(
                DictionaryEntry::parse(line),
                Err(EntryParseError::Malformed {
                    line: line.to_string()
                })
            );
        }
    }
}
