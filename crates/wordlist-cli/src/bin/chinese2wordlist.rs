// chinese2wordlist: Turn Chinese text into a dictionary word list.
//
// Looks up every substring of the input text in a CC-CEDICT style
// dictionary and prints the matching entries per starting position.
//
// Usage:
//   chinese2wordlist [OPTIONS] <CHARACTER_TYPE> [TEXT]
//
// Example:
//   chinese2wordlist traditional 我是荷蘭人 --response-type markdown

use std::io::{self, Read, Write};
use std::path::PathBuf;

use clap::Parser;
use wordlist_core::{CharacterType, InputText, Language, MarkdownLayout, ResponseType};
use wordlist_search::search::DEFAULT_THREADS;
use wordlist_search::{DedupPolicy, SearchOptions, WordListHandle};

/// Convert Chinese text to a word list
#[derive(Parser, Debug)]
#[command(name = "chinese2wordlist", version)]
#[command(about = "Convert Chinese text to a word list using a CC-CEDICT style dictionary")]
struct Args {
    /// Character type of the input: traditional (trad, t) or simplified (simp, s)
    #[arg(value_name = "CHARACTER_TYPE")]
    character_type: CharacterType,

    /// Chinese text. Read from stdin when omitted.
    #[arg(value_name = "TEXT")]
    text: Option<String>,

    /// Output format: json or markdown (m)
    #[arg(short, long, default_value = "json")]
    response_type: ResponseType,

    /// Translation language, selects the dictionary file: en or nl
    #[arg(short, long, default_value = "en")]
    language: Language,

    /// Dictionary file, or directory containing the dictionary file
    #[arg(short, long, value_name = "PATH")]
    dict_path: Option<PathBuf>,

    /// Repeated candidates: first (only the first position gets matches),
    /// shared (every position gets matches, one scan), off (scan every time)
    #[arg(long, default_value = "first")]
    dedup: DedupPolicy,

    /// Longest word to look up, in characters (0 = no limit)
    #[arg(long, value_name = "N", default_value_t = 0)]
    max_word_length: usize,

    /// Number of lookup workers
    #[arg(short = 'j', long, default_value_t = DEFAULT_THREADS)]
    threads: usize,

    /// Show both traditional and simplified columns in Markdown output
    #[arg(long)]
    both_forms: bool,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(wordlist_cli::log_level(args.verbose))
        .parse_default_env()
        .init();

    let text = match args.text {
        Some(t) => t,
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .unwrap_or_else(|e| wordlist_cli::fatal(&format!("failed to read stdin: {e}")));
            input.trim().to_string()
        }
    };

    let non_han = InputText::new(&text).non_han_chars();
    if !non_han.is_empty() {
        log::warn!(
            "input contains non-Chinese characters that are unlikely to match: {}",
            non_han.iter().collect::<String>()
        );
    }

    let max_word_length = (args.max_word_length > 0).then_some(args.max_word_length);
    if let Some(msg) = wordlist_cli::long_input_warning(text.chars().count(), max_word_length) {
        log::warn!("{msg}");
    }

    let dict_file = wordlist_cli::find_dictionary(args.dict_path.as_deref(), args.language)
        .unwrap_or_else(|e| wordlist_cli::fatal(&e));

    let options = SearchOptions {
        character_type: args.character_type,
        dedup: args.dedup,
        max_word_length,
        threads: args.threads,
    };

    let mut handle = WordListHandle::open(dict_file, options)
        .unwrap_or_else(|e| wordlist_cli::fatal(&e.to_string()));
    if args.both_forms {
        handle.set_markdown_layout(MarkdownLayout::Full);
    }

    let output = handle
        .word_list(&text, args.response_type)
        .unwrap_or_else(|e| wordlist_cli::fatal(&e.to_string()));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    if let Err(e) = writeln!(out, "{output}").and_then(|_| out.flush()) {
        wordlist_cli::fatal(&format!("failed to write output: {e}"));
    }
}
