// Input text and Han character classification

// ---------------------------------------------------------------------------
// Han ideograph classification
// ---------------------------------------------------------------------------

/// Returns `true` if `c` is a CJK unified or compatibility ideograph.
///
/// Covers the basic block, extensions A through F, and the compatibility
/// blocks. Used to warn about input that the dictionary cannot match.
pub fn is_han_ideograph(c: char) -> bool {
    let cp = c as u32;
    (0x4E00..=0x9FFF).contains(&cp)         // CJK Unified Ideographs
        || (0x3400..=0x4DBF).contains(&cp)  // Extension A
        || (0x20000..=0x2A6DF).contains(&cp) // Extension B
        || (0x2A700..=0x2EBEF).contains(&cp) // Extensions C-F
        || (0xF900..=0xFAFF).contains(&cp)  // Compatibility Ideographs
        || (0x2F800..=0x2FA1F).contains(&cp) // Compatibility Supplement
        || cp == 0x3007 // 〇 IDEOGRAPHIC NUMBER ZERO
}

// ---------------------------------------------------------------------------
// InputText
// ---------------------------------------------------------------------------

/// Immutable input text, indexed by character.
///
/// Each element is one Unicode scalar value. Chinese characters are single
/// scalar values, so a position here is one character of the input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputText {
    chars: Vec<char>,
}

impl InputText {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
        }
    }

    /// Number of characters (and therefore of positions).
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Substring of `len` characters starting at `pos`.
    ///
    /// Returns `None` when the range runs past the end of the text.
    pub fn substring(&self, pos: usize, len: usize) -> Option<String> {
        let end = pos.checked_add(len)?;
        self.chars.get(pos..end).map(|s| s.iter().collect())
    }

    /// Characters of the input that are not Han ideographs, in order,
    /// without repeats.
    pub fn non_han_chars(&self) -> Vec<char> {
        let mut out = Vec::new();
        for &c in &self.chars {
            if !is_han_ideograph(c) && !out.contains(&c) {
                out.push(c);
            }
        }
        out
    }
}

impl From<&str> for InputText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
