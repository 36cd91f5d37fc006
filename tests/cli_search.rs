//! End-to-end CLI tests against a fixture corpus.
//!
//! These run the built binary against a small JSON corpus and assert on the
//! rendered output for each search outcome.

use std::fs;
use std::path::PathBuf;
use std::process::Command;

const FIXTURE_JSON: &str = r#"{
    "Genesis": {
        "1": {
            "1": "In the beginning God created the heaven and the earth.",
            "2": "And the earth was without form, and void."
        }
    },
    "John": {
        "3": {
            "16": "For God so loved the world, that he gave his only begotten Son.",
            "17": "For God (so) sent his Son into the world."
        }
    },
    "1 John": {
        "4": {
            "8": "He that loveth not knoweth not God; for God is love."
        }
    }
}"#;

/// Write the fixture corpus into a per-process temp directory.
fn fixture_corpus() -> PathBuf {
    let dir = std::env::temp_dir()
        .join("versemark_test_fixtures")
        .join(format!("test_{}", std::process::id()));
    fs::create_dir_all(&dir).expect("Failed to create fixture dir");

    let path = dir.join("corpus.json");
    fs::write(&path, FIXTURE_JSON).expect("Failed to write fixture corpus");
    path
}

/// Run versemark with the given args against the fixture corpus.
fn run(args: &[&str]) -> (String, String, bool) {
    let corpus = fixture_corpus();
    // Flags go first: everything after the first query word is captured
    // verbatim as part of the query.
    let mut cmd_args = vec!["--corpus", corpus.to_str().unwrap(), "--no-color"];
    cmd_args.extend(args);

    run_raw(&cmd_args)
}

fn run_raw(args: &[&str]) -> (String, String, bool) {
    let output = Command::new(env!("CARGO_BIN_EXE_versemark"))
        .args(args)
        .output()
        .expect("Failed to run versemark");

    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.success(),
    )
}

#[test]
fn test_passage_lookup() {
    let (stdout, _, ok) = run(&["John", "3:16"]);
    assert!(ok);
    assert_eq!(
        stdout.trim(),
        "John 3:16 - For God so loved the world, that he gave his only begotten Son."
    );
}

#[test]
fn test_passage_lookup_canonical_casing() {
    let (stdout, _, ok) = run(&["john", "3:16"]);
    assert!(ok);
    assert!(stdout.starts_with("John 3:16"));
}

#[test]
fn test_passage_lookup_numbered_book() {
    let (stdout, _, ok) = run(&["1", "John", "4:8"]);
    assert!(ok);
    assert_eq!(
        stdout.trim(),
        "1 John 4:8 - He that loveth not knoweth not God; for God is love."
    );
}

#[test]
fn test_keyword_search_in_corpus_order() {
    let (stdout, _, ok) = run(&["world"]);
    assert!(ok);
    let lines: Vec<&str> = stdout.lines().filter(|l| !l.is_empty()).collect();
    assert!(lines[0].starts_with("John 3:16 - "));
    assert!(lines[1].starts_with("John 3:17 - "));
    assert_eq!(lines[2], "2 verse(s) found");
}

#[test]
fn test_keyword_search_case_insensitive() {
    let (lower, _, _) = run(&["love"]);
    let (upper, _, _) = run(&["LOVE"]);
    assert_eq!(lower, upper);
    assert!(lower.contains("John 3:16"));
    assert!(lower.contains("1 John 4:8"));
}

#[test]
fn test_keyword_search_special_characters() {
    let (stdout, _, ok) = run(&["God", "(so)"]);
    assert!(ok);
    let lines: Vec<&str> = stdout.lines().filter(|l| !l.is_empty()).collect();
    assert!(lines[0].starts_with("John 3:17 - "));
    assert_eq!(lines[1], "1 verse(s) found");
}

#[test]
fn test_empty_query_message() {
    let (stdout, _, ok) = run(&[]);
    assert!(ok);
    assert_eq!(stdout.trim(), "Please enter a word, phrase, or reference.");
}

#[test]
fn test_no_match_message() {
    let (stdout, _, ok) = run(&["xyzzy"]);
    assert!(ok);
    assert_eq!(stdout.trim(), "No verses found.");
}

#[test]
fn test_empty_corpus_not_ready_message() {
    let dir = std::env::temp_dir()
        .join("versemark_test_fixtures")
        .join(format!("empty_{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("corpus.json");
    fs::write(&path, "{}").unwrap();

    let (stdout, _, ok) = run_raw(&["--corpus", path.to_str().unwrap(), "--no-color", "love"]);
    assert!(ok);
    assert_eq!(stdout.trim(), "Corpus is still loading. Please wait.");
}

#[test]
fn test_missing_corpus_is_an_error() {
    let (_, stderr, ok) = run_raw(&["--corpus", "/nonexistent/corpus.json", "love"]);
    assert!(!ok);
    assert!(stderr.contains("corpus"));
}

#[test]
fn test_json_output() {
    let (stdout, _, ok) = run(&["--json", "loved"]);
    assert!(ok);
    let v: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON output");
    assert_eq!(v["status"], "matches");
    assert_eq!(v["result"][0]["book"], "John");
    assert_eq!(v["result"][0]["spans"][0][0], 11);
}

#[test]
fn test_stats_subcommand() {
    let corpus = fixture_corpus();
    let (stdout, _, ok) = run_raw(&["stats", "--corpus", corpus.to_str().unwrap()]);
    assert!(ok);
    assert!(stdout.contains("Books:     3"));
    assert!(stdout.contains("Verses:    5"));
}

#[test]
fn test_books_subcommand_in_corpus_order() {
    let corpus = fixture_corpus();
    let (stdout, _, ok) = run_raw(&["books", "--corpus", corpus.to_str().unwrap()]);
    assert!(ok);

    let genesis = stdout.find("Genesis").unwrap();
    let john = stdout.find("John").unwrap();
    assert!(genesis < john);
}
