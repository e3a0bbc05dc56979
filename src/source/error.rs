//! Error types for source collection.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for unavailable sources.
///
/// A source failure aborts the whole list it belongs to; no partial
/// address sequence is ever produced.
#[derive(Debug, Error)]
pub enum SourceError {
    /// A local file could not be opened or read.
    #[error("cannot read address file '{}': {source}", path.display())]
    File {
        /// Path of the unreadable file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A configured URL is not parseable.
    #[error("invalid source URL '{url}': {source}")]
    InvalidUrl {
        /// The offending URL string
        url: String,
        /// Underlying parse error
        #[source]
        source: url::ParseError,
    },

    /// A remote fetch failed at the transport level.
    #[error("fetch from '{url}' failed: {source}")]
    Connection {
        /// The URL that failed
        url: String,
        /// Underlying transport error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A remote fetch exceeded the client's deadline.
    #[error("fetch from '{url}' timed out")]
    Timeout {
        /// The URL that timed out
        url: String,
    },
}
