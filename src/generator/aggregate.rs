//! Multi-source aggregation into resolved entries.

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::config::ListSpec;
use crate::source::{Fetch, SourceCollector, SourceError};

/// One resolved (address, comment, timeout) triple ready for rendering.
///
/// Built fresh per generation call and discarded after rendering; entries
/// carry no identity beyond the call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedEntry {
    /// The address string, post-trim
    pub address: String,
    /// Comment attached to the entry
    pub comment: String,
    /// Timeout string in `NdNhNmNs` form
    pub timeout: String,
}

/// Aggregates all sources of one list into an ordered, deduplicated
/// entry sequence.
///
/// The three-tier ordering is a fixed contract: URLs in configured order,
/// then files, then static addresses. Addresses are trimmed, empties
/// skipped, and only the first occurrence of each exact post-trim string
/// survives across the whole combined sequence.
///
/// # Errors
///
/// Returns the first [`SourceError`] encountered, aborting the entire
/// list; no partial entry sequence is ever produced.
pub async fn aggregate_list<F: Fetch>(
    collector: &SourceCollector<F>,
    spec: &ListSpec,
    comment: &str,
    timeout: &str,
) -> Result<Vec<ResolvedEntry>, SourceError> {
    let mut seen = HashSet::new();
    let mut entries = Vec::new();

    let mut push = |address: &str| {
        let address = address.trim();
        if address.is_empty() || !seen.insert(address.to_string()) {
            return;
        }
        entries.push(ResolvedEntry {
            address: address.to_string(),
            comment: comment.to_string(),
            timeout: timeout.to_string(),
        });
    };

    for url in &spec.urls {
        for address in collector.from_url(url).await? {
            push(&address);
        }
    }

    for file in &spec.files {
        for address in collector.from_file(file).await? {
            push(&address);
        }
    }

    for address in collector.from_static(&spec.addresses) {
        push(&address);
    }

    debug!(count = entries.len(), "aggregated list entries");
    Ok(entries)
}
