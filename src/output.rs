//! Output formatting for search outcomes.

use crate::query::scanner::{SearchOutcome, VerseMatch};
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// User-state messages. Kept in one place so the CLI and tests agree.
pub const MSG_EMPTY_QUERY: &str = "Please enter a word, phrase, or reference.";
pub const MSG_CORPUS_NOT_READY: &str = "Corpus is still loading. Please wait.";
pub const MSG_NO_MATCH: &str = "No verses found.";

/// Print a search outcome in terminal format.
///
/// Passage lookups print the single verse unhighlighted; keyword matches
/// print one `Book Chapter:Verse - text` entry per verse with every matched
/// span highlighted, followed by a match count. User states print their
/// message and nothing else.
pub fn print_outcome(outcome: &SearchOutcome, color: bool) -> io::Result<()> {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    match outcome {
        SearchOutcome::EmptyQuery => writeln!(stdout, "{}", MSG_EMPTY_QUERY),
        SearchOutcome::CorpusNotReady => writeln!(stdout, "{}", MSG_CORPUS_NOT_READY),
        SearchOutcome::NoMatch => writeln!(stdout, "{}", MSG_NO_MATCH),
        SearchOutcome::Passage(m) => print_verse(&mut stdout, m),
        SearchOutcome::Matches(matches) => {
            for m in matches {
                print_verse(&mut stdout, m)?;
            }
            writeln!(stdout)?;
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
            writeln!(stdout, "{} verse(s) found", matches.len())?;
            stdout.reset()
        }
    }
}

/// Print one `Book Chapter:Verse - text` entry, highlighting matched spans.
fn print_verse(stdout: &mut StandardStream, m: &VerseMatch) -> io::Result<()> {
    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
    write!(stdout, "{}", m.reference())?;
    stdout.reset()?;
    write!(stdout, " - ")?;

    let mut last = 0;
    for &(start, end) in &m.spans {
        if start > last {
            write!(stdout, "{}", &m.text[last..start])?;
        }
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
        write!(stdout, "{}", &m.text[start..end])?;
        stdout.reset()?;
        last = end;
    }
    if last < m.text.len() {
        write!(stdout, "{}", &m.text[last..])?;
    }
    writeln!(stdout)?;

    Ok(())
}

/// Print a search outcome as a single JSON document (for `--json`).
pub fn print_json(outcome: &SearchOutcome) -> io::Result<()> {
    let json = serde_json::to_string_pretty(outcome)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", json)
}
