use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use dictionary::LookupResult;
use jsonschema::JSONSchema;
use serde_json::Value;
use thiserror::Error;

const BOOKMARK_FILE: &str = "bookmarks.json";
const BOOKMARK_SCHEMA: &str = include_str!("../schema/bookmark.schema.json");

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no bookmark file at {}", path.display())]
    NotFound { path: PathBuf },
    #[error("the bookmark file {} is not valid JSON", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("the bookmark file does not match the bookmark schema: {detail}")]
    Schema { detail: String },
    #[error("failed to encode bookmarks as JSON")]
    Encode(#[source] serde_json::Error),
    #[error("failed to access {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("the bookmark schema resource is invalid: {0}")]
    Config(String),
}

/// Bookmarks live in a single `bookmarks.json` per directory: a JSON array
/// whose elements are whole lookup results. Every mutation reads the entire
/// file, changes the in-memory list and rewrites the file. There is no
/// locking and no atomic rename; the tool assumes exclusive single-process
/// access to the file.
pub struct BookmarkStore {
    schema: JSONSchema,
}

impl BookmarkStore {
    pub fn new() -> Result<Self, StoreError> {
        let document: Value = serde_json::from_str(BOOKMARK_SCHEMA)
            .map_err(|error| StoreError::Config(error.to_string()))?;
        let schema = JSONSchema::compile(&document)
            .map_err(|error| StoreError::Config(error.to_string()))?;
        Ok(Self { schema })
    }

    /// Appends a lookup result, creating the file on first use.
    pub fn append(&self, dir: &Path, result: &LookupResult) -> Result<(), StoreError> {
        let path = dir.join(BOOKMARK_FILE);
        let mut bookmarks = match fs::read_to_string(&path) {
            Ok(text) => parse(&path, &text)?,
            Err(error) if error.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(source) => return Err(StoreError::Io { path, source }),
        };
        bookmarks.push(serde_json::to_value(result).map_err(StoreError::Encode)?);
        tracing::debug!(path = %path.display(), count = bookmarks.len(), "appending bookmark");
        write(&path, &bookmarks)
    }

    /// The bookmarked words, in file order.
    pub fn words(&self, dir: &Path) -> Result<Vec<String>, StoreError> {
        let results = self.details(dir)?;
        Ok(results
            .iter()
            .filter_map(|entries| entries.first().map(|entry| entry.word.clone()))
            .collect())
    }

    /// Full lookup results for replay, validated before anything is returned.
    pub fn details(&self, dir: &Path) -> Result<Vec<LookupResult>, StoreError> {
        let path = dir.join(BOOKMARK_FILE);
        let raw = load(&path)?;
        let mut results = Vec::with_capacity(raw.len());
        for value in raw {
            self.validate(&value)?;
            let entries = serde_json::from_value(value)
                .map_err(|error| StoreError::Schema {
                    detail: error.to_string(),
                })?;
            results.push(entries);
        }
        Ok(results)
    }

    /// Removes the first bookmark whose first entry's word equals `word`
    /// (case-sensitive). Returns whether a match was found; no match leaves
    /// the file untouched and is a normal outcome, not an error.
    pub fn delete(&self, dir: &Path, word: &str) -> Result<bool, StoreError> {
        let path = dir.join(BOOKMARK_FILE);
        let mut bookmarks = load(&path)?;
        let position = bookmarks
            .iter()
            .position(|result| first_word(result) == Some(word));
        match position {
            Some(index) => {
                bookmarks.remove(index);
                tracing::debug!(path = %path.display(), word, "deleting bookmark");
                write(&path, &bookmarks)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Checks one parsed bookmark element against the fixed schema.
    pub fn validate(&self, document: &Value) -> Result<(), StoreError> {
        if let Err(errors) = self.schema.validate(document) {
            let detail = errors
                .map(|error| error.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(StoreError::Schema { detail });
        }
        Ok(())
    }
}

fn load(path: &Path) -> Result<Vec<Value>, StoreError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            return Err(StoreError::NotFound {
                path: path.to_owned(),
            })
        }
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_owned(),
                source,
            })
        }
    };
    parse(path, &text)
}

fn parse(path: &Path, text: &str) -> Result<Vec<Value>, StoreError> {
    serde_json::from_str(text).map_err(|source| StoreError::Parse {
        path: path.to_owned(),
        source,
    })
}

fn write(path: &Path, bookmarks: &[Value]) -> Result<(), StoreError> {
    let text = serde_json::to_string_pretty(bookmarks).map_err(StoreError::Encode)?;
    fs::write(path, text).map_err(|source| StoreError::Io {
        path: path.to_owned(),
        source,
    })
}

fn first_word(result: &Value) -> Option<&str> {
    result.get(0)?.get("word")?.as_str()
}
