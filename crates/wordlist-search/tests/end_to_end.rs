//! End-to-end tests: search the sample dictionary file and compare the JSON
//! output against golden files.
//!
//! Run: cargo test -p wordlist-search --test end_to_end

use std::path::PathBuf;

use serde_json::Value;
use wordlist_core::{CharacterType, DictionaryEntry, MarkdownLayout, ResponseType};
use wordlist_search::{DedupPolicy, FileDictionary, SearchOptions, WordListError, WordListHandle};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn data_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}

/// Load a golden JSON file from `tests/data/golden`.
fn load_golden(filename: &str) -> Value {
    let path = data_path("golden").join(filename);
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read golden file {}: {}", path.display(), e));
    serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("failed to parse golden file {}: {}", path.display(), e))
}

fn open_handle(
    character_type: CharacterType,
    dedup: DedupPolicy,
) -> WordListHandle<FileDictionary> {
    let options = SearchOptions {
        character_type,
        dedup,
        ..SearchOptions::default()
    };
    WordListHandle::open(data_path("cedict_sample.txt"), options)
        .unwrap_or_else(|e| panic!("failed to open sample dictionary: {e}"))
}

fn json_output(handle: &WordListHandle<FileDictionary>, text: &str) -> Value {
    let out = handle
        .word_list(text, ResponseType::Json)
        .unwrap_or_else(|e| panic!("word list for {text:?} failed: {e}"));
    serde_json::from_str(&out).unwrap_or_else(|e| panic!("invalid JSON {out:?}: {e}"))
}

// ---------------------------------------------------------------------------
// Golden comparisons
// ---------------------------------------------------------------------------

#[test]
fn traditional_sentence_matches_golden() {
    let handle = open_handle(CharacterType::Traditional, DedupPolicy::FirstOccurrence);
    assert_eq!(json_output(&handle, "我是荷蘭人"), load_golden("dutch_person.json"));
}

#[test]
fn simplified_sentence_finds_same_entries() {
    let handle = open_handle(CharacterType::Simplified, DedupPolicy::FirstOccurrence);
    assert_eq!(json_output(&handle, "我是荷兰人"), load_golden("dutch_person.json"));
}

#[test]
fn compound_words_are_found_at_their_start() {
    let handle = open_handle(CharacterType::Simplified, DedupPolicy::FirstOccurrence);
    assert_eq!(json_output(&handle, "中国人学生"), load_golden("chinese_student.json"));
}

#[test]
fn repeated_candidate_goes_to_first_position_only() {
    let handle = open_handle(CharacterType::Simplified, DedupPolicy::FirstOccurrence);
    assert_eq!(
        json_output(&handle, "你好好"),
        load_golden("repeated_first_occurrence.json")
    );
}

#[test]
fn shared_policy_repeats_matches() {
    for dedup in [DedupPolicy::Shared, DedupPolicy::Off] {
        let handle = open_handle(CharacterType::Simplified, dedup);
        assert_eq!(json_output(&handle, "你好好"), load_golden("repeated_shared.json"));
    }
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

#[test]
fn text_without_matches_has_one_empty_array_per_position() {
    let handle = open_handle(CharacterType::Simplified, DedupPolicy::FirstOccurrence);
    let out = handle.word_list("abc", ResponseType::Json).unwrap();
    assert_eq!(out, "[[],[],[]]");
}

#[test]
fn empty_text_gives_empty_output() {
    let handle = open_handle(CharacterType::Traditional, DedupPolicy::FirstOccurrence);
    assert_eq!(handle.word_list("", ResponseType::Json).unwrap(), "[]");
    assert_eq!(handle.word_list("", ResponseType::Markdown).unwrap(), "");
}

#[test]
fn wrong_form_does_not_match() {
    // 荷兰 is simplified; in traditional mode only 荷 matches.
    let handle = open_handle(CharacterType::Traditional, DedupPolicy::FirstOccurrence);
    let expected: Value = serde_json::json!([["荷 荷 [he2] /lotus/"], []]);
    assert_eq!(json_output(&handle, "荷兰"), expected);
}

#[test]
fn searches_are_repeatable() {
    let handle = open_handle(CharacterType::Simplified, DedupPolicy::FirstOccurrence);
    let first = handle.search("中国人是学生").unwrap();
    let second = handle.search("中国人是学生").unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), 6);
}

#[test]
fn parallel_and_sequential_results_match() {
    let mut handle = open_handle(CharacterType::Traditional, DedupPolicy::FirstOccurrence);
    let text = "我是荷蘭人你好中國人學生";
    handle.set_threads(1);
    let sequential = handle.search(text).unwrap();
    handle.set_threads(4);
    let parallel = handle.search(text).unwrap();
    assert_eq!(sequential, parallel);
}

#[test]
fn every_matched_line_parses() {
    let handle = open_handle(CharacterType::Simplified, DedupPolicy::Shared);
    let set = handle.search("你好我是中国人学生").unwrap();
    assert!(set.total_matches() > 0);
    for line in set.lines() {
        let entry = DictionaryEntry::parse(line).unwrap();
        assert!(line.starts_with(&entry.traditional));
    }
}

// ---------------------------------------------------------------------------
// Markdown
// ---------------------------------------------------------------------------

#[test]
fn markdown_table_rows_follow_positions() {
    let handle = open_handle(CharacterType::Simplified, DedupPolicy::FirstOccurrence);
    let md = handle.word_list("你好", ResponseType::Markdown).unwrap();
    let rows: Vec<&str> = md.lines().collect();
    assert_eq!(
        rows,
        vec![
            "| character | pinyin | translation |",
            "| --- | --- | --- |",
            "| 你 | ni3 | you (informal) |",
            "| 你好 | ni3 hao3 | hello/hi |",
            "| 好 | hao3 | good/well |",
            "| 好 | hao4 | to be fond of |",
        ]
    );
}

#[test]
fn markdown_full_layout() {
    let mut handle = open_handle(CharacterType::Traditional, DedupPolicy::FirstOccurrence);
    handle.set_markdown_layout(MarkdownLayout::Full);
    let md = handle.word_list("學生", ResponseType::Markdown).unwrap();
    assert!(md.starts_with("| traditional | simplified | pinyin | translation |"));
    assert!(md.contains("| 學生 | 学生 | xue2 sheng5 | student/schoolchild |"));
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[test]
fn missing_dictionary_is_reported() {
    let result = WordListHandle::open(data_path("missing.txt"), SearchOptions::default());
    let err = result.err().expect("opening a missing dictionary must fail");
    assert!(matches!(err, WordListError::Dictionary(_)));
    assert!(err.to_string().contains("missing.txt"));
}
