//! Error types for script generation.

use thiserror::Error;

use crate::config::DurationError;
use crate::source::SourceError;

/// Error type for per-list generation.
///
/// Every variant names the offending list so batch callers can report
/// failures per list.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The requested list name is not in the catalog.
    #[error("list '{name}' not found")]
    NotFound {
        /// The requested name
        name: String,
    },

    /// No timeout could be resolved for the list.
    ///
    /// Load-time validation makes this unreachable for catalogs built
    /// through `ValidatedConfig`; it exists so resolution stays explicit
    /// rather than silently defaulting.
    #[error("cannot resolve timeout for list '{name}': {source}")]
    Timeout {
        /// The offending list
        name: String,
        /// Underlying resolution error
        #[source]
        source: DurationError,
    },

    /// A source for the list was unavailable; the whole list is aborted.
    #[error("list '{name}': {source}")]
    Source {
        /// The offending list
        name: String,
        /// Underlying source error
        #[source]
        source: SourceError,
    },

    /// Template rendering failed.
    ///
    /// Not a designed user-facing path: the template is fixed and the
    /// inputs are well-formed, so any occurrence is an internal invariant
    /// violation.
    #[error("internal render error for list '{name}': {reason}")]
    Render {
        /// The offending list
        name: String,
        /// Engine error description
        reason: String,
    },
}
