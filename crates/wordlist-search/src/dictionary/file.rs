// File-backed dictionary

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use super::{Dictionary, DictionaryError, trim_line_end};

const UTF8_BOM: char = '\u{FEFF}';

/// A dictionary read from a UTF-8 text file.
///
/// Every scan opens its own file handle, so concurrent scans share no
/// reader state.
#[derive(Debug, Clone)]
pub struct FileDictionary {
    path: PathBuf,
}

impl FileDictionary {
    /// Open a dictionary file, checking that it can be read.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, DictionaryError> {
        let path = path.into();
        File::open(&path).map_err(|source| DictionaryError::Unavailable {
            path: path.clone(),
            source,
        })?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Dictionary for FileDictionary {
    fn for_each_line(&self, f: &mut dyn FnMut(&str)) -> Result<(), DictionaryError> {
        let file = File::open(&self.path).map_err(|source| DictionaryError::Unavailable {
            path: self.path.clone(),
            source,
        })?;
        let mut reader = BufReader::new(file);
        let mut buf = String::new();
        let mut first = true;

        loop {
            buf.clear();
            let n = reader
                .read_line(&mut buf)
                .map_err(|source| DictionaryError::Read {
                    path: self.path.clone(),
                    source,
                })?;
            if n == 0 {
                break;
            }
            let mut line = trim_line_end(&buf);
            if first {
                line = line.strip_prefix(UTF8_BOM).unwrap_or(line);
                first = false;
            }
            f(line);
        }

        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests/data")
            .join(name)
    }

    fn collect(dict: &FileDictionary) -> Vec<String> {
        let mut lines = Vec::new();
        dict.for_each_line(&mut |line| lines.push(line.to_string()))
            .unwrap();
        lines
    }

    #[test]
    fn missing_file_is_unavailable() {
        let err = FileDictionary::open(fixture("does_not_exist.txt")).unwrap_err();
        assert!(matches!(err, DictionaryError::Unavailable { .. }));
        assert!(err.to_string().contains("does_not_exist.txt"));
    }

    #[test]
    fn reads_lines_in_order_without_terminators() {
        let dict = FileDictionary::open(fixture("cedict_sample.txt")).unwrap();
        let lines = collect(&dict);
        assert!(lines.len() > 10);
        assert!(lines[0].starts_with('#'));
        assert!(lines.iter().all(|l| !l.ends_with('\n') && !l.ends_with('\r')));
        assert!(lines.contains(&"你好 你好 [ni3 hao3] /hello/hi/".to_string()));
    }

    #[test]
    fn strips_bom_and_crlf() {
        let dict = FileDictionary::open(fixture("bom_crlf.txt")).unwrap();
        assert_eq!(
            collect(&dict),
            vec![
                "一 一 [yi1] /one/".to_string(),
                "二 二 [er4] /two/".to_string(),
            ]
        );
    }

    #[test]
    fn invalid_utf8_is_a_read_error() {
        let dict = FileDictionary::open(fixture("invalid_utf8.txt")).unwrap();
        let err = dict.for_each_line(&mut |_| {}).unwrap_err();
        assert!(matches!(err, DictionaryError::Read { .. }));
        assert!(err.to_string().contains("invalid_utf8.txt"));
    }

    #[test]
    fn rescans_see_same_content() {
        let dict = FileDictionary::open(fixture("cedict_sample.txt")).unwrap();
        assert_eq!(collect(&dict), collect(&dict));
        assert_eq!(dict.describe(), dict.path().display().to_string());
    }
}
