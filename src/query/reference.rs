//! Passage reference parsing.
//!
//! A query like `John 3:16` or `2 Kings 2:11` is a passage reference:
//! book name (optionally led by a 1-3 numeral), chapter, colon, verse. The
//! whole query must match; anything else falls through to the keyword
//! scanner. Parsing is purely syntactic; resolving against a corpus is a
//! separate step so both can be tested alone.

use crate::corpus::Corpus;
use regex::Regex;
use std::sync::OnceLock;

static REFERENCE_RE: OnceLock<Regex> = OnceLock::new();

/// Anchored reference pattern: optional leading numeral 1-3 with optional
/// space, a single alphabetic word, then `chapter:verse`.
fn reference_re() -> &'static Regex {
    REFERENCE_RE.get_or_init(|| {
        Regex::new(r"^((?:[1-3] ?)?[A-Za-z]+) +([0-9]+):([0-9]+)$")
            .expect("reference pattern is valid")
    })
}

/// A syntactically valid passage reference, before corpus resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    /// Book name as typed (casing and spacing preserved).
    pub book: String,
    pub chapter: String,
    pub verse: String,
}

impl Reference {
    /// Parse a trimmed query as a passage reference.
    ///
    /// Returns `None` when the query is not reference-shaped, so the caller
    /// can fall through to keyword search.
    pub fn parse(query: &str) -> Option<Reference> {
        let caps = reference_re().captures(query)?;
        Some(Reference {
            book: caps[1].to_string(),
            chapter: caps[2].to_string(),
            verse: caps[3].to_string(),
        })
    }

    /// Resolve this reference against a corpus.
    ///
    /// Book comparison is case-insensitive (first corpus-order key wins);
    /// chapter and verse keys must match exactly. On a hit, returns the
    /// book's canonical corpus casing and the unmodified verse text.
    pub fn resolve<'a>(&self, corpus: &'a Corpus) -> Option<(&'a str, &'a str)> {
        let book = corpus.find_book(&self.book)?;
        let text = book.chapter(&self.chapter)?.verse(&self.verse)?;
        Some((book.name(), text))
    }
}
