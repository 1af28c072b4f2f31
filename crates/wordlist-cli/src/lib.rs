// wordlist-cli: shared utilities for the command-line tool.

use std::path::{Path, PathBuf};
use std::process;

use wordlist_core::Language;

/// Environment variable naming a dictionary directory or file.
pub const DICT_PATH_ENV: &str = "CHINESE2WORDLIST_DICT_PATH";

/// Dictionary directory name below the home and system locations, and
/// below the current directory.
const DICT_SUBDIR: &str = "dictionary";

/// Locate the dictionary file for `language`.
///
/// Search order:
/// 1. `dict_path` argument (if provided): a file is used as is, a directory
///    is searched for the language's file name
/// 2. `CHINESE2WORDLIST_DICT_PATH` environment variable (same rules)
/// 3. `~/.chinese2wordlist/dictionary`
/// 4. `/usr/local/share/chinese2wordlist`, `/usr/share/chinese2wordlist`
/// 5. `./dictionary`
pub fn find_dictionary(dict_path: Option<&Path>, language: Language) -> Result<PathBuf, String> {
    let env_path = std::env::var_os(DICT_PATH_ENV).map(PathBuf::from);
    let search_paths = build_search_paths(dict_path, env_path.as_deref());
    let file_name = language.dictionary_file_name();

    for path in &search_paths {
        if path.is_file() {
            return Ok(path.clone());
        }
        let candidate = path.join(file_name);
        if candidate.is_file() {
            return Ok(candidate);
        }
    }

    Err(format!(
        "could not find {} in any of the search paths:\n{}",
        file_name,
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Build the list of files and directories to search for the dictionary.
fn build_search_paths(dict_path: Option<&Path>, env_path: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // An explicit path is authoritative.
    if let Some(p) = dict_path {
        paths.push(p.to_path_buf());
        return paths;
    }

    if let Some(p) = env_path {
        paths.push(p.to_path_buf());
    }

    if let Some(home) = home_dir() {
        paths.push(home.join(".chinese2wordlist").join(DICT_SUBDIR));
    }

    paths.push(PathBuf::from("/usr/local/share/chinese2wordlist"));
    paths.push(PathBuf::from("/usr/share/chinese2wordlist"));

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(DICT_SUBDIR));
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}

/// Input length, in characters, above which unbounded expansion is reported.
pub const LONG_INPUT_CHARS: usize = 300;

/// Warning for input long enough that unbounded candidate expansion gets
/// expensive: about n²/2 candidates averaging n/2 characters each.
///
/// Returns `None` when the text is short or the word length is capped.
pub fn long_input_warning(input_chars: usize, max_word_length: Option<usize>) -> Option<String> {
    if input_chars <= LONG_INPUT_CHARS || max_word_length.is_some_and(|m| m > 0) {
        return None;
    }
    Some(format!(
        "input has {input_chars} characters; every substring will be looked up, \
         which is slow and memory hungry (use --max-word-length to cap word length)"
    ))
}

/// Log level filter for a `-v` count: warn, info, then debug.
pub fn log_level(verbosity: u8) -> log::LevelFilter {
    match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    }
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}
