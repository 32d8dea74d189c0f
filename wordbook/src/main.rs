use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgGroup, Parser};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use dictionary::{Dictionary, DictionaryConfig, LookupError};

use bookmarks::{BookmarkStore, StoreError};
use utilities::{confirm, input};

mod audio;
mod bookmarks;
mod display;
mod utilities;

/// Command-line dictionary with local bookmarks.
#[derive(Parser, Debug)]
#[command(version, about)]
#[command(group(
    ArgGroup::new("action")
        .required(true)
        .args(["word", "bookmarked_words", "bookmarked_meanings", "delete"])
))]
struct Args {
    /// Look up a word, then optionally pronounce and bookmark it
    #[arg(short = 'w', long = "word", value_name = "WORD")]
    word: Option<String>,

    /// List the words bookmarked in the given directory
    #[arg(long = "bw", value_name = "DIR")]
    bookmarked_words: Option<PathBuf>,

    /// List the bookmarks in the given directory with their full meanings
    #[arg(long = "bm", value_name = "DIR")]
    bookmarked_meanings: Option<PathBuf>,

    /// Delete a bookmarked word; the directory defaults to `.`
    #[arg(short = 'd', long = "delete", num_args = 1..=2, value_names = ["WORD", "DIR"])]
    delete: Option<Vec<String>>,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Lookup(#[from] LookupError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("could not initialize the HTTP client")]
    Http(#[from] reqwest::Error),
    #[error("failed to read from the terminal")]
    Prompt(#[from] io::Error),
}

impl CliError {
    fn exit_code(&self) -> u8 {
        match self {
            CliError::Lookup(LookupError::NotFound { .. }) => 1,
            CliError::Lookup(LookupError::Client { .. })
            | CliError::Lookup(LookupError::Deserialize(_)) => 2,
            CliError::Lookup(LookupError::Server { .. }) => 3,
            CliError::Lookup(LookupError::Timeout(_)) => 5,
            CliError::Lookup(LookupError::Connection(_)) => 6,
            CliError::Store(StoreError::NotFound { .. }) => 4,
            CliError::Store(StoreError::Parse { .. }) | CliError::Store(StoreError::Encode(_)) => 5,
            CliError::Store(StoreError::Schema { .. }) => 8,
            CliError::Store(StoreError::Io { .. }) | CliError::Store(StoreError::Config(_)) => 7,
            CliError::Http(_) => 6,
            CliError::Prompt(_) => 7,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            report(&error);
            ExitCode::from(error.exit_code())
        }
    }
}

async fn run(args: Args) -> Result<(), CliError> {
    if let Some(word) = args.word {
        lookup(&word).await
    } else if let Some(dir) = args.bookmarked_words {
        let store = BookmarkStore::new()?;
        let words = store.words(&dir)?;
        display::render_word_list(&words);
        Ok(())
    } else if let Some(dir) = args.bookmarked_meanings {
        let store = BookmarkStore::new()?;
        for result in store.details(&dir)? {
            display::render(&result);
        }
        Ok(())
    } else if let Some(parts) = args.delete {
        let mut parts = parts.into_iter();
        // clap enforces at least one value
        let word = parts.next().unwrap_or_default();
        let dir = parts
            .next()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        delete(&dir, &word)
    } else {
        unreachable!("clap requires exactly one action");
    }
}

async fn lookup(word: &str) -> Result<(), CliError> {
    let dict = Dictionary::new(DictionaryConfig::default())?;
    let result = dict.lookup(word).await?;
    display::render(&result);

    if confirm("Hear the pronunciation? (Y/n): ")? {
        if let Err(error) = audio::pronounce(&result).await {
            eprintln!("Could not play the pronunciation: {error}");
        }
    }
    if confirm("Bookmark this word? (Y/n): ")? {
        let dir = bookmark_dir()?;
        let store = BookmarkStore::new()?;
        store.append(&dir, &result)?;
        println!("Bookmarked \"{word}\".");
    }
    Ok(())
}

fn bookmark_dir() -> io::Result<PathBuf> {
    let answer = input("Directory to bookmark in (default '.'): ")?;
    let answer = answer.trim();
    if answer.is_empty() {
        Ok(PathBuf::from("."))
    } else {
        Ok(PathBuf::from(answer))
    }
}

fn delete(dir: &Path, word: &str) -> Result<(), CliError> {
    let store = BookmarkStore::new()?;
    if store.delete(dir, word)? {
        println!("Removed \"{word}\" from bookmarks.");
    } else {
        println!("\"{word}\" is not bookmarked.");
    }
    Ok(())
}

fn report(error: &CliError) {
    eprintln!("error: {error}");
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        eprintln!("  caused by: {cause}");
        source = cause.source();
    }
}
