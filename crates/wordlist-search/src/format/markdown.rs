// Markdown table rendering
//
// One row per matched dictionary line, in position order. Positions are not
// delimited in the table.

use std::fmt::Write;

use wordlist_core::{CharacterType, DictionaryEntry, MarkdownLayout, MatchSet};

use super::FormatError;

/// Render a match set as a Markdown table.
///
/// An empty match set (empty input) renders as an empty string. Otherwise
/// the header is always present, followed by one row per line. A line that
/// cannot be split into its four fields fails the whole rendering.
pub fn render_markdown(
    match_set: &MatchSet,
    character_type: CharacterType,
    layout: MarkdownLayout,
) -> Result<String, FormatError> {
    if match_set.is_empty() {
        return Ok(String::new());
    }

    let mut out = String::new();
    match layout {
        MarkdownLayout::Compact => {
            out.push_str("| character | pinyin | translation |\n");
            out.push_str("| --- | --- | --- |");
        }
        MarkdownLayout::Full => {
            out.push_str("| traditional | simplified | pinyin | translation |\n");
            out.push_str("| --- | --- | --- | --- |");
        }
    }

    for line in match_set.lines() {
        let entry = DictionaryEntry::parse(line)?;
        let pinyin = escape_cell(&entry.pinyin);
        let translation = escape_cell(&entry.definition);
        // Writing to a String cannot fail.
        let _ = match layout {
            MarkdownLayout::Compact => write!(
                out,
                "\n| {} | {pinyin} | {translation} |",
                escape_cell(entry.headword(character_type)),
            ),
            MarkdownLayout::Full => write!(
                out,
                "\n| {} | {} | {pinyin} | {translation} |",
                escape_cell(&entry.traditional),
                escape_cell(&entry.simplified),
            ),
        };
    }

    Ok(out)
}

/// Escape characters that would break a table cell.
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}
