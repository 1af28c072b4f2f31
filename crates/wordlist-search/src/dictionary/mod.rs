// Dictionary store: read-only, line-oriented dictionary access

mod file;
mod memory;

pub use file::FileDictionary;
pub use memory::MemoryDictionary;

use std::path::PathBuf;

/// Error raised while reading a dictionary.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    /// The dictionary file is missing or cannot be opened.
    #[error("dictionary unavailable: {}: {source}", path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dictionary file was opened but reading it failed (including
    /// invalid UTF-8).
    #[error("failed to read dictionary {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Trait for line-oriented dictionaries.
///
/// Each line is one entry in `TRADITIONAL SIMPLIFIED [PINYIN] /DEF/.../`
/// form. Entries are not indexed: every lookup visits every line in order.
///
/// Implementations must allow several scans to run at once from different
/// threads.
pub trait Dictionary: Sync {
    /// Call `f` with every line, in order, without its line terminator.
    fn for_each_line(&self, f: &mut dyn FnMut(&str)) -> Result<(), DictionaryError>;

    /// Short human-readable description used in log messages.
    fn describe(&self) -> String;
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn for_each_line(&self, f: &mut dyn FnMut(&str)) -> Result<(), DictionaryError> {
        (**self).for_each_line(f)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Strip a trailing `\n` or `\r\n`.
pub(crate) fn trim_line_end(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
