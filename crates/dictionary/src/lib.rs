use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;
use url::Url;

mod api;
mod entry;

pub use entry::{Definition, Entry, LookupResult, Meaning, Phonetic};

const DEFAULT_ENDPOINT: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("no definition found for \"{word}\"")]
    NotFound { word: String },
    #[error("the dictionary service rejected the request ({status})")]
    Client { status: StatusCode },
    #[error("the dictionary service is unavailable ({status}), try again later")]
    Server { status: StatusCode },
    #[error("the dictionary request timed out")]
    Timeout(#[source] reqwest::Error),
    #[error("could not reach the dictionary service")]
    Connection(#[source] reqwest::Error),
    #[error("could not decode the dictionary response")]
    Deserialize(#[source] reqwest::Error),
}

#[derive(Debug, Clone)]
pub struct DictionaryConfig {
    pub endpoint: Url,
    pub timeout: Duration,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL"),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

pub struct Dictionary {
    client: reqwest::Client,
    endpoint: Url,
}

impl Dictionary {
    pub fn new(config: DictionaryConfig) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint,
        })
    }

    /// One GET to `{endpoint}/{word}`, no retries.
    pub async fn lookup(&self, word: &str) -> Result<LookupResult, LookupError> {
        api::lookup(&self.client, &self.endpoint, word).await
    }
}
