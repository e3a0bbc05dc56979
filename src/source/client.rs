//! Production fetch implementation using reqwest.

use std::time::Duration;

use super::{Fetch, FetchedBody, SourceError};

/// Default request deadline for remote sources.
///
/// The core imposes no timeout of its own; this bound lives in the
/// client so embedding callers can pick a different one.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Production fetcher wrapping `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    inner: reqwest::Client,
}

impl ReqwestFetcher {
    /// Creates a fetcher with the default request deadline.
    ///
    /// # Errors
    ///
    /// Returns the underlying builder error if the TLS backend cannot be
    /// initialized.
    pub fn new() -> Result<Self, reqwest::Error> {
        let inner = reqwest::Client::builder()
            .timeout(DEFAULT_FETCH_TIMEOUT)
            .user_agent(concat!("mt-addrlist/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { inner })
    }

    /// Creates a fetcher from an existing reqwest client.
    ///
    /// Useful when the caller needs custom configuration (deadline, TLS,
    /// proxy).
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { inner: client }
    }
}

impl Fetch for ReqwestFetcher {
    async fn fetch_text(&self, url: &url::Url) -> Result<FetchedBody, SourceError> {
        let response = self
            .inner
            .get(url.as_str())
            .send()
            .await
            .map_err(|e| classify(url, e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| classify(url, e))?;

        Ok(FetchedBody { status, body })
    }
}

fn classify(url: &url::Url, error: reqwest::Error) -> SourceError {
    if error.is_timeout() {
        SourceError::Timeout {
            url: url.to_string(),
        }
    } else {
        SourceError::Connection {
            url: url.to_string(),
            source: Box::new(error),
        }
    }
}
