// In-memory dictionary

use super::{Dictionary, DictionaryError, trim_line_end};

/// A dictionary held in memory. Scans never fail.
#[derive(Debug, Clone, Default)]
pub struct MemoryDictionary {
    lines: Vec<String>,
}

impl MemoryDictionary {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Build from dictionary file contents, one entry per line.
    pub fn from_text(text: &str) -> Self {
        Self::new(text.lines().map(trim_line_end))
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Dictionary for MemoryDictionary {
    fn for_each_line(&self, f: &mut dyn FnMut(&str)) -> Result<(), DictionaryError> {
        for line in &self.lines {
            f(line);
        }
        Ok(())
    }

    fn describe(&self) -> String {
        format!("<memory: {} lines>", self.lines.len())
    }
}
