use reqwest::StatusCode;
use url::Url;

use crate::{LookupError, LookupResult};

pub(crate) async fn lookup(
    client: &reqwest::Client,
    endpoint: &Url,
    word: &str,
) -> Result<LookupResult, LookupError> {
    let url = word_url(endpoint, word);
    tracing::debug!(%url, "requesting definition");
    let response = client.get(url).send().await.map_err(|error| {
        if error.is_timeout() {
            LookupError::Timeout(error)
        } else {
            LookupError::Connection(error)
        }
    })?;

    if let Some(error) = status_error(response.status(), word) {
        return Err(error);
    }

    let entries = response
        .json::<LookupResult>()
        .await
        .map_err(LookupError::Deserialize)?;
    if entries.is_empty() {
        return Err(LookupError::NotFound {
            word: word.to_string(),
        });
    }
    Ok(entries)
}

fn word_url(endpoint: &Url, word: &str) -> Url {
    let mut url = endpoint.clone();
    // http(s) URLs always accept path segments; the push percent-escapes.
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().push(word);
    }
    url
}

fn status_error(status: StatusCode, word: &str) -> Option<LookupError> {
    if status.is_success() {
        None
    } else if status == StatusCode::NOT_FOUND {
        Some(LookupError::NotFound {
            word: word.to_string(),
        })
    } else if status.is_server_error() {
        Some(LookupError::Server { status })
    } else {
        Some(LookupError::Client { status })
    }
}
