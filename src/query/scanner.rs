//! Keyword scanning and the search entry point.
//!
//! `search` is the single entry point: it trims the query, reports the
//! empty-query and not-ready states, tries the passage reference parser, and
//! otherwise runs a linear case-insensitive substring scan over every verse
//! in corpus order.
//!
//! The scan matcher is built from the query with all regex metacharacters
//! escaped, so queries like `God (so)` match their literal text and can
//! never fail to compile. Matches are recorded as byte spans into the
//! original verse text; casing is preserved and marking happens at render
//! time via [`VerseMatch::wrap`].

use crate::corpus::Corpus;
use crate::query::reference::Reference;
use anyhow::{Context, Result};
use regex::RegexBuilder;
use serde::Serialize;

/// One matched verse: its address, original text, and matched byte spans.
///
/// Passage lookups carry no spans; keyword matches carry one span per
/// non-overlapping occurrence, in ascending order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerseMatch {
    pub book: String,
    pub chapter: String,
    pub verse: String,
    pub text: String,
    pub spans: Vec<(usize, usize)>,
}

impl VerseMatch {
    /// The `Book Chapter:Verse` label for this match.
    pub fn reference(&self) -> String {
        format!("{} {}:{}", self.book, self.chapter, self.verse)
    }

    /// The verse text with every matched span wrapped in the given
    /// delimiters, e.g. `wrap("<mark>", "</mark>")`.
    pub fn wrap(&self, open: &str, close: &str) -> String {
        let mut out =
            String::with_capacity(self.text.len() + self.spans.len() * (open.len() + close.len()));
        let mut last = 0;
        for &(start, end) in &self.spans {
            out.push_str(&self.text[last..start]);
            out.push_str(open);
            out.push_str(&self.text[start..end]);
            out.push_str(close);
            last = end;
        }
        out.push_str(&self.text[last..]);
        out
    }
}

/// Outcome of one search invocation.
///
/// The three message variants are user states, not errors: they are rendered
/// as prompts and never propagated as failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "result", rename_all = "snake_case")]
pub enum SearchOutcome {
    /// Query was blank after trimming; nothing was scanned.
    EmptyQuery,
    /// Corpus has no verses yet; nothing was scanned.
    CorpusNotReady,
    /// The query was a passage reference present in the corpus.
    Passage(VerseMatch),
    /// Keyword scan results, in corpus order. Never empty.
    Matches(Vec<VerseMatch>),
    /// Neither a known reference nor a substring of any verse.
    NoMatch,
}

/// Run one search over the corpus.
///
/// Reference lookup is attempted first; a miss falls through silently to the
/// keyword scan. Pure with respect to the corpus: repeated calls with the
/// same inputs return the same outcome.
pub fn search(corpus: &Corpus, raw_query: &str) -> Result<SearchOutcome> {
    let query = raw_query.trim();

    if query.is_empty() {
        return Ok(SearchOutcome::EmptyQuery);
    }
    if corpus.is_empty() {
        return Ok(SearchOutcome::CorpusNotReady);
    }

    if let Some(reference) = Reference::parse(query) {
        if let Some((book, text)) = reference.resolve(corpus) {
            return Ok(SearchOutcome::Passage(VerseMatch {
                book: book.to_string(),
                chapter: reference.chapter,
                verse: reference.verse,
                text: text.to_string(),
                spans: Vec::new(),
            }));
        }
    }

    let matcher = RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
        .context("Failed to build keyword matcher")?;

    let mut matches = Vec::new();
    for v in corpus.verses() {
        let spans: Vec<(usize, usize)> =
            matcher.find_iter(v.text).map(|m| (m.start(), m.end())).collect();
        if !spans.is_empty() {
            matches.push(VerseMatch {
                book: v.book.to_string(),
                chapter: v.chapter.to_string(),
                verse: v.verse.to_string(),
                text: v.text.to_string(),
                spans,
            });
        }
    }

    if matches.is_empty() {
        Ok(SearchOutcome::NoMatch)
    } else {
        Ok(SearchOutcome::Matches(matches))
    }
}
