//! Address collection from the three source kinds.
//!
//! Files and remote bodies share one line-normalization pass; static
//! addresses are taken verbatim. Each operation returns addresses in
//! source order; ordering and dedup across sources belong to the
//! aggregation step, not here.

use std::path::Path;

use tracing::{debug, warn};

use super::{Fetch, SourceError};

/// Normalizes line-oriented address data.
///
/// Per line: trim; drop empty lines and `#`-leading comment lines;
/// truncate at the first inline `#` and re-trim; drop if nothing remains.
/// The order of surviving lines is preserved.
#[must_use]
pub fn normalize_lines(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|line| {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                return None;
            }
            let line = match line.find('#') {
                Some(idx) => line[..idx].trim_end(),
                None => line,
            };
            if line.is_empty() {
                None
            } else {
                Some(line.to_string())
            }
        })
        .collect()
}

/// Collects raw addresses from static entries, files, and URLs.
#[derive(Debug)]
pub struct SourceCollector<F> {
    fetcher: F,
}

impl<F: Fetch> SourceCollector<F> {
    /// Creates a collector around the given fetcher.
    pub const fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Returns the configured static addresses verbatim, in order.
    #[must_use]
    pub fn from_static(&self, addresses: &[String]) -> Vec<String> {
        addresses.to_vec()
    }

    /// Reads and normalizes addresses from a local file.
    ///
    /// The file handle is scoped to the read and released on every exit
    /// path.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::File`] when the file cannot be read.
    pub async fn from_file(&self, path: &str) -> Result<Vec<String>, SourceError> {
        let text = tokio::fs::read_to_string(Path::new(path))
            .await
            .map_err(|e| SourceError::File {
                path: Path::new(path).to_path_buf(),
                source: e,
            })?;

        let addresses = normalize_lines(&text);
        debug!(path, count = addresses.len(), "collected file source");
        Ok(addresses)
    }

    /// Fetches and normalizes addresses from a remote URL.
    ///
    /// A single GET, no retries. Only transport failures are errors; a
    /// non-2xx status still gets its body line-scanned, with a warning so
    /// operators notice a 404'd list URL.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] when the URL is unparseable or the fetch
    /// fails at the transport level.
    pub async fn from_url(&self, url: &str) -> Result<Vec<String>, SourceError> {
        let parsed = url::Url::parse(url).map_err(|e| SourceError::InvalidUrl {
            url: url.to_string(),
            source: e,
        })?;

        let fetched = self.fetcher.fetch_text(&parsed).await?;
        if !fetched.status.is_success() {
            warn!(url, status = %fetched.status, "source returned an error status; scanning body anyway");
        }

        let addresses = normalize_lines(&fetched.body);
        debug!(url, count = addresses.len(), "collected url source");
        Ok(addresses)
    }
}
