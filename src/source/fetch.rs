//! HTTP fetch abstraction for remote sources.

use super::SourceError;

/// A fetched response body with its status.
///
/// Only transport-level failures are errors; an HTTP error status still
/// carries a body that gets line-scanned like any other. The status is
/// kept so callers can flag suspicious responses.
#[derive(Debug, Clone)]
pub struct FetchedBody {
    /// HTTP status code of the response
    pub status: http::StatusCode,
    /// Response body decoded as text
    pub body: String,
}

/// Trait for fetching remote source bodies.
///
/// # Design
///
/// Abstracting the HTTP client enables dependency injection for tests
/// (mock fetchers with canned bodies) and keeps the core free of any
/// built-in request deadline; the production client owns the timeout.
pub trait Fetch: Send + Sync {
    /// Issues a single GET to the URL and buffers the body as text.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] on transport failure (connection refused,
    /// DNS failure, client deadline exceeded). No retries are performed.
    fn fetch_text(
        &self,
        url: &url::Url,
    ) -> impl std::future::Future<Output = Result<FetchedBody, SourceError>> + Send;
}
