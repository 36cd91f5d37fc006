//! # versemark - Bible verse search
//!
//! versemark is a terminal-first search tool for an in-memory Bible corpus.
//! A query is first interpreted as a passage reference (`John 3:16`,
//! `2 Kings 2:11`); if it is not one, every verse is scanned for the query
//! as a case-insensitive substring, with each occurrence highlighted.
//!
//! ## Architecture
//!
//! - [`corpus`] - Ordered book/chapter/verse containers and JSON loading
//! - [`query`] - Reference parsing and the keyword scanner
//! - [`output`] - Result rendering (terminal colors or JSON)
//!
//! ## Quick Start
//!
//! ```
//! use versemark::corpus::Corpus;
//! use versemark::query::{search, SearchOutcome};
//!
//! let mut corpus = Corpus::new();
//! corpus.push_verse("John", "3", "16", "For God so loved the world...");
//!
//! match search(&corpus, "loved").unwrap() {
//!     SearchOutcome::Matches(matches) => {
//!         for m in &matches {
//!             println!("{} - {}", m.reference(), m.wrap("<mark>", "</mark>"));
//!         }
//!     }
//!     other => println!("{:?}", other),
//! }
//! ```
//!
//! The corpus is loaded once before the first search and is read-only
//! afterwards; searching is a synchronous single pass with no shared state,
//! so both components are pure functions of (query, corpus).

pub mod corpus;
pub mod output;
pub mod query;
