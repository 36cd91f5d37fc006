mod corpus;
mod output;
mod query;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use corpus::Corpus;
use std::path::PathBuf;

const APP_NAME: &str = "versemark";
const CORPUS_FILE: &str = "corpus.json";

#[derive(Parser)]
#[command(name = "versemark")]
#[command(about = "Terminal-first Bible verse search with passage lookup and highlighting")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Search query (when no subcommand is given)
    #[arg(trailing_var_arg = true)]
    query: Vec<String>,

    /// Path to the corpus JSON file (defaults to the app data directory)
    #[arg(short, long)]
    corpus: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Emit the outcome as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List books in corpus order with chapter and verse counts
    Books {
        /// Path to the corpus JSON file
        #[arg(short, long)]
        corpus: Option<PathBuf>,
    },
    /// Show corpus statistics
    Stats {
        /// Path to the corpus JSON file
        #[arg(short, long)]
        corpus: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Books { corpus }) => {
            let corpus = load_corpus(corpus)?;
            list_books(&corpus);
        }
        Some(Commands::Stats { corpus }) => {
            let corpus = load_corpus(corpus)?;
            show_stats(&corpus);
        }
        None => {
            let corpus = load_corpus(cli.corpus)?;
            let query_str = cli.query.join(" ");
            let outcome = query::search(&corpus, &query_str)?;

            if cli.json {
                output::print_json(&outcome)?;
            } else {
                output::print_outcome(&outcome, !cli.no_color)?;
            }
        }
    }

    Ok(())
}

/// Load the corpus from the given path, or from the default location in the
/// platform app data directory.
fn load_corpus(path: Option<PathBuf>) -> Result<Corpus> {
    let path = match path {
        Some(p) => p,
        None => default_corpus_path()?,
    };
    Corpus::load(&path)
}

/// Default corpus location: `<app data dir>/versemark/corpus.json`.
fn default_corpus_path() -> Result<PathBuf> {
    let base = if cfg!(target_os = "macos") {
        dirs::home_dir().map(|h| h.join("Library").join("Application Support"))
    } else if cfg!(target_os = "windows") {
        dirs::data_local_dir()
    } else {
        // Linux/Unix: XDG_DATA_HOME or ~/.local/share
        dirs::data_dir()
    };

    let base = base.context("Could not determine app data directory")?;
    Ok(base.join(APP_NAME).join(CORPUS_FILE))
}

/// List books in corpus order
fn list_books(corpus: &Corpus) {
    if corpus.is_empty() {
        println!("Corpus is empty.");
        return;
    }

    for book in corpus.books() {
        println!(
            "  {:24} {} chapter(s), {} verse(s)",
            book.name(),
            book.chapter_count(),
            book.verse_count()
        );
    }
}

/// Display corpus statistics
fn show_stats(corpus: &Corpus) {
    println!("Corpus Statistics");
    println!("=================");
    println!();
    println!("Books:     {}", corpus.book_count());
    println!("Chapters:  {}", corpus.chapter_count());
    println!("Verses:    {}", corpus.verse_count());
}
