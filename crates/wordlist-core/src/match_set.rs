// Per-position search results

use serde::Serialize;

/// Zero-based character offset into the input text.
pub type Position = usize;

/// Dictionary lines found for every starting position of the input.
///
/// Dense by construction: slot `p` exists for every position
/// `0..input_len`, even when nothing matched there. Lines within a slot are
/// in discovery order (increasing candidate length, then dictionary order).
///
/// Serializes as a JSON array of arrays of raw dictionary lines.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct MatchSet {
    slots: Vec<Vec<String>>,
}

impl MatchSet {
    /// Create a match set with `positions` empty slots.
    pub fn with_positions(positions: usize) -> Self {
        Self {
            slots: vec![Vec::new(); positions],
        }
    }

    /// Number of positions (equal to the input length in characters).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Lines recorded for a position, or `None` if out of range.
    pub fn get(&self, pos: Position) -> Option<&[String]> {
        self.slots.get(pos).map(Vec::as_slice)
    }

    /// Append a line to a position's slot unless that slot already holds it.
    ///
    /// Returns `true` if the line was added.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of range.
    pub fn push_unique(&mut self, pos: Position, line: String) -> bool {
        let slot = &mut self.slots[pos];
        if slot.contains(&line) {
            return false;
        }
        slot.push(line);
        true
    }

    /// Iterate over `(position, lines)` in ascending position order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &[String])> {
        self.slots
            .iter()
            .enumerate()
            .map(|(pos, lines)| (pos, lines.as_slice()))
    }

    /// All lines across all positions, in position order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().flatten().map(String::as_str)
    }

    /// Total number of lines across all positions.
    pub fn total_matches(&self) -> usize {
        self.slots.iter().map(Vec::len).sum()
    }

    pub fn into_inner(self) -> Vec<Vec<String>> {
        self.slots
    }
}

impl From<Vec<Vec<String>>> for MatchSet {
    fn from(slots: Vec<Vec<String>>) -> Self {
        Self { slots }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_position_has_a_slot() {
        let set = MatchSet::with_positions(3);
        assert_eq!(set.len(), 3);
        assert_eq!(set.total_matches(), 0);
        assert!(set.iter().all(|(_, lines)| lines.is_empty()));
        assert_eq!(set.get(3), None);
    }

    #[test]
    fn push_unique_keeps_first_occurrence() {
        let mut set = MatchSet::with_positions(2);
        assert!(set.push_unique(0, "a".to_string()));
        assert!(set.push_unique(0, "b".to_string()));
        assert!(!set.push_unique(0, "a".to_string()));
        assert!(set.push_unique(1, "a".to_string()));
        assert_eq!(set.get(0), Some(&["a".to_string(), "b".to_string()][..]));
        assert_eq!(set.total_matches(), 3);
        assert_eq!(set.lines().collect::<Vec<_>>(), vec!["a", "b", "a"]);
    }

    #[test]
    fn serializes_as_nested_arrays() {
        let set = MatchSet::from(vec![vec!["x".to_string()], vec![]]);
        assert_eq!(serde_json::to_string(&set).unwrap(), r#"[["x"],[]]"#);
        assert_eq!(serde_json::to_string(&MatchSet::default()).unwrap(), "[]");
    }
}
