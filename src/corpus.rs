//! In-memory verse corpus.
//!
//! The corpus is a three-level ordered mapping: book name -> chapter number
//! -> verse number -> verse text. Each level is a dedicated container backed
//! by a `Vec`, so iteration order is exactly insertion order as loaded and
//! no level can grow extraneous keys. Chapter and verse numbers are kept as
//! strings (they are JSON object keys on disk) and compared verbatim.
//!
//! The corpus is populated once, before the first search, and is read-only
//! afterwards. Search code receives it by shared reference.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

/// A single verse: its number within the chapter, and its text.
#[derive(Debug, Clone)]
pub struct Verse {
    pub number: String,
    pub text: String,
}

/// A chapter: an ordered list of verses keyed by verse number.
#[derive(Debug, Clone)]
pub struct Chapter {
    number: String,
    verses: Vec<Verse>,
}

impl Chapter {
    /// Chapter number as loaded (e.g. "3").
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Look up a verse by its exact number key.
    pub fn verse(&self, number: &str) -> Option<&str> {
        self.verses
            .iter()
            .find(|v| v.number == number)
            .map(|v| v.text.as_str())
    }

    /// Verses in insertion order.
    pub fn verses(&self) -> impl Iterator<Item = &Verse> {
        self.verses.iter()
    }

    pub fn verse_count(&self) -> usize {
        self.verses.len()
    }
}

/// A book: an ordered list of chapters keyed by chapter number.
#[derive(Debug, Clone)]
pub struct Book {
    name: String,
    chapters: Vec<Chapter>,
}

impl Book {
    /// Canonical book name as loaded (e.g. "2 Kings").
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up a chapter by its exact number key.
    pub fn chapter(&self, number: &str) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.number == number)
    }

    /// Chapters in insertion order.
    pub fn chapters(&self) -> impl Iterator<Item = &Chapter> {
        self.chapters.iter()
    }

    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }

    pub fn verse_count(&self) -> usize {
        self.chapters.iter().map(|c| c.verses.len()).sum()
    }
}

/// A borrowed view of one verse with its full address, yielded during scans.
#[derive(Debug, Clone, Copy)]
pub struct VerseRef<'a> {
    pub book: &'a str,
    pub chapter: &'a str,
    pub verse: &'a str,
    pub text: &'a str,
}

/// The full loaded corpus.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    books: Vec<Book>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a corpus from a JSON file shaped `{book: {chapter: {verse: text}}}`.
    ///
    /// Object order in the file becomes corpus iteration order.
    pub fn load(path: &Path) -> Result<Corpus> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read corpus file: {}", path.display()))?;
        Self::from_json_str(&content)
            .with_context(|| format!("Failed to parse corpus file: {}", path.display()))
    }

    /// Parse a corpus from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Corpus> {
        let root: serde_json::Value =
            serde_json::from_str(json).context("Corpus is not valid JSON")?;

        let Some(books) = root.as_object() else {
            bail!("Corpus root must be a JSON object of books");
        };

        let mut corpus = Corpus::new();
        for (book, chapters) in books {
            let Some(chapters) = chapters.as_object() else {
                bail!("Book {:?} must be an object of chapters", book);
            };
            for (chapter, verses) in chapters {
                let Some(verses) = verses.as_object() else {
                    bail!("Chapter {:?} of {:?} must be an object of verses", chapter, book);
                };
                for (verse, text) in verses {
                    let Some(text) = text.as_str() else {
                        bail!("Verse {} {}:{} must be a string", book, chapter, verse);
                    };
                    corpus.push_verse(book, chapter, verse, text);
                }
            }
        }

        Ok(corpus)
    }

    /// Insert one verse, creating book and chapter entries as needed.
    ///
    /// New keys are appended at the end of their level. Re-inserting an
    /// existing verse key overwrites its text in place.
    pub fn push_verse(&mut self, book: &str, chapter: &str, verse: &str, text: &str) {
        let book = match self.books.iter_mut().find(|b| b.name == book) {
            Some(b) => b,
            None => {
                self.books.push(Book {
                    name: book.to_string(),
                    chapters: Vec::new(),
                });
                self.books.last_mut().unwrap()
            }
        };

        let chapter = match book.chapters.iter_mut().find(|c| c.number == chapter) {
            Some(c) => c,
            None => {
                book.chapters.push(Chapter {
                    number: chapter.to_string(),
                    verses: Vec::new(),
                });
                book.chapters.last_mut().unwrap()
            }
        };

        match chapter.verses.iter_mut().find(|v| v.number == verse) {
            Some(v) => v.text = text.to_string(),
            None => chapter.verses.push(Verse {
                number: verse.to_string(),
                text: text.to_string(),
            }),
        }
    }

    /// True when no verses have been loaded (the "not ready" state).
    pub fn is_empty(&self) -> bool {
        self.verse_count() == 0
    }

    /// Case-insensitive book lookup; the first matching key in corpus order wins.
    pub fn find_book(&self, name: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.name.eq_ignore_ascii_case(name))
    }

    /// Books in insertion order.
    pub fn books(&self) -> impl Iterator<Item = &Book> {
        self.books.iter()
    }

    /// Every verse in corpus order (book -> chapter -> verse).
    pub fn verses(&self) -> impl Iterator<Item = VerseRef<'_>> {
        self.books.iter().flat_map(|b| {
            b.chapters.iter().flat_map(move |c| {
                c.verses.iter().map(move |v| VerseRef {
                    book: &b.name,
                    chapter: &c.number,
                    verse: &v.number,
                    text: &v.text,
                })
            })
        })
    }

    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    pub fn chapter_count(&self) -> usize {
        self.books.iter().map(|b| b.chapters.len()).sum()
    }

    pub fn verse_count(&self) -> usize {
        self.books.iter().map(|b| b.verse_count()).sum()
    }
}
