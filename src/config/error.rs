//! Error types for configuration parsing and validation.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for the duration grammar and timeout resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationError {
    /// The duration string was empty.
    #[error("duration string is empty")]
    Empty,

    /// The string does not match the `NdNhNmNs` grammar.
    #[error("duration '{value}' does not match the NdNhNmNs grammar")]
    Malformed {
        /// The offending input
        value: String,
    },

    /// A component (or the cumulative total) exceeds the representable
    /// range of seconds.
    #[error("duration '{value}' is too large")]
    TooLarge {
        /// The offending input
        value: String,
    },

    /// All present components evaluate to zero.
    #[error("duration '{value}' evaluates to zero")]
    Zero {
        /// The offending input
        value: String,
    },

    /// Neither the list nor the defaults provide a timeout.
    #[error("no timeout configured at list or defaults level")]
    NotConfigured,
}

/// Error type for configuration operations.
///
/// Covers errors from reading, decoding, and validating the catalog.
/// All of these are detected eagerly at load time; generation is never
/// attempted against an invalid configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to decode the YAML configuration.
    #[error("Failed to parse YAML config: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Failed to write a configuration file (for the init command).
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The catalog defines no lists at all.
    #[error("no lists defined in configuration")]
    NoLists,

    /// A list has none of urls, files, or addresses.
    #[error("list '{name}' has no sources configured (urls, files, or addresses)")]
    NoSources {
        /// The offending list name
        name: String,
    },

    /// A list name contains characters unsafe for RouterOS identifiers.
    #[error(
        "list name '{name}' is not a valid script identifier \
         (expected [A-Za-z][A-Za-z0-9_]*)"
    )]
    UnsafeListName {
        /// The offending list name
        name: String,
    },

    /// A comment prefix would break the generated script's quoting.
    #[error(
        "comment prefix for {scope} contains unsupported characters \
         (double quotes, backslashes, or line breaks)"
    )]
    UnsafeCommentPrefix {
        /// Where the prefix was configured ("defaults" or "list '<name>'")
        scope: String,
    },

    /// A timeout string failed the duration grammar.
    #[error("invalid timeout for {scope}: {source}")]
    InvalidTimeout {
        /// Where the timeout was configured ("defaults" or "list '<name>'")
        scope: String,
        /// Underlying grammar error
        #[source]
        source: DurationError,
    },

    /// A list relies on the defaults timeout, but none is configured.
    #[error("list '{name}' has no timeout and no defaults timeout is set")]
    MissingTimeout {
        /// The offending list name
        name: String,
    },
}
