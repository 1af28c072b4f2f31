// JSON rendering

use wordlist_core::MatchSet;

use super::FormatError;

/// Render as a compact JSON array with one array of raw dictionary lines per
/// input position. Positions without matches are kept as `[]`.
pub fn render_json(match_set: &MatchSet) -> Result<String, FormatError> {
    Ok(serde_json::to_string(match_set)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn empty_match_set() {
        assert_eq!(render_json(&MatchSet::default()).unwrap(), "[]");
    }

    #[test]
    fn empty_positions_are_kept() {
        let set = MatchSet::with_positions(3);
        assert_eq!(render_json(&set).unwrap(), "[[],[],[]]");
    }

    #[test]
    fn lines_are_emitted_raw() {
        let set = MatchSet::from(vec![
            vec!["你好 你好 [ni3 hao3] /hello/hi/".to_string()],
            vec![],
        ]);
        let value: Value = serde_json::from_str(&render_json(&set).unwrap()).unwrap();
        assert_eq!(value, json!([["你好 你好 [ni3 hao3] /hello/hi/"], []]));
    }
}
