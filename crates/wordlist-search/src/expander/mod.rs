// Candidate expander ("smart search" expansion)
//
// For every starting position of the input, produce the substrings that
// start there, shortest first. Candidates are grown incrementally: each new
// character extends every live prefix by one and opens a new position.

use wordlist_core::InputText;

/// Candidates for every position, indexed by position.
///
/// `expand(text)[p][len - 1]` is the substring of `len` characters starting
/// at position `p`.
pub fn expand(text: &InputText) -> Vec<Vec<String>> {
    expand_bounded(text, None)
}

/// Like [`expand`], but stop growing a position's candidates once they reach
/// `max_len` characters.
///
/// `None` and `Some(0)` both mean unbounded.
pub fn expand_bounded(text: &InputText, max_len: Option<usize>) -> Vec<Vec<String>> {
    let max_len = max_len.filter(|&m| m > 0).unwrap_or(usize::MAX);
    let mut candidates: Vec<Vec<String>> = Vec::with_capacity(text.len());

    for &c in text.chars() {
        // Positions that already reached max_len form a prefix of the list,
        // so only the tail is still live.
        let live_from = candidates
            .iter()
            .position(|list| list.len() < max_len)
            .unwrap_or(candidates.len());

        for list in &mut candidates[live_from..] {
            if let Some(longest) = list.last() {
                let mut next = String::with_capacity(longest.len() + c.len_utf8());
                next.push_str(longest);
                next.push(c);
                list.push(next);
            }
        }

        candidates.push(vec![c.to_string()]);
    }

    candidates
}
