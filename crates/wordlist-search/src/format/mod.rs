// Result formatting: JSON and Markdown renderings of a match set

mod json;
mod markdown;

pub use json::render_json;
pub use markdown::render_markdown;

use wordlist_core::{CharacterType, EntryParseError, MarkdownLayout, MatchSet, ResponseType};

/// Error raised while rendering a match set.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// A matched line does not have the four-field dictionary shape.
    #[error(transparent)]
    MalformedLine(#[from] EntryParseError),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Render a match set in the requested response type.
///
/// `character_type` and `layout` only affect Markdown output.
pub fn render(
    match_set: &MatchSet,
    response_type: ResponseType,
    character_type: CharacterType,
    layout: MarkdownLayout,
) -> Result<String, FormatError> {
    match response_type {
        ResponseType::Json => render_json(match_set),
        ResponseType::Markdown => render_markdown(match_set, character_type, layout),
    }
}
