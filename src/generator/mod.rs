//! Script generation: aggregation, rendering, and orchestration.
//!
//! This module provides:
//! - Multi-source aggregation ([`aggregate_list`], [`ResolvedEntry`])
//! - RouterOS script rendering ([`render_script`])
//! - The per-list and batch entry points ([`Generator`], [`BatchReport`])

mod aggregate;
mod error;
mod render;

#[cfg(test)]
mod generator_tests;

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, error};

use crate::config::ValidatedConfig;
use crate::source::{Fetch, SourceCollector};

pub use aggregate::{ResolvedEntry, aggregate_list};
pub use error::GenerateError;
pub use render::render_script;

/// Outcome of a batch generation over the whole catalog.
///
/// Carries both the successful scripts and the per-list failures so the
/// caller chooses the policy: all-or-nothing via [`BatchReport::into_strict`],
/// or best-effort by consuming `scripts` and `failures` directly. Both
/// maps iterate in lexicographic list-name order.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Rendered scripts for the lists that succeeded
    pub scripts: BTreeMap<String, String>,
    /// Errors for the lists that failed
    pub failures: BTreeMap<String, GenerateError>,
}

impl BatchReport {
    /// Returns true when every list rendered successfully.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Concatenates the successful scripts in lexicographic name order,
    /// separated by a blank line.
    #[must_use]
    pub fn concatenated(&self) -> String {
        self.scripts
            .values()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// All-or-nothing view: the full script map, or the first failure in
    /// lexicographic name order.
    ///
    /// # Errors
    ///
    /// Returns the first per-list failure when any list failed.
    pub fn into_strict(self) -> Result<BTreeMap<String, String>, GenerateError> {
        match self.failures.into_iter().next() {
            None => Ok(self.scripts),
            Some((_, error)) => Err(error),
        }
    }
}

/// Orchestrates duration resolution, aggregation, and rendering.
///
/// Holds an immutable catalog snapshot; concurrent calls share it
/// read-only and build private entry buffers, so a `Generator` can serve
/// any number of in-flight generations without locking.
#[derive(Debug)]
pub struct Generator<F> {
    config: Arc<ValidatedConfig>,
    collector: SourceCollector<F>,
}

impl<F: Fetch> Generator<F> {
    /// Creates a generator over the given catalog and fetcher.
    pub const fn new(config: Arc<ValidatedConfig>, fetcher: F) -> Self {
        Self {
            config,
            collector: SourceCollector::new(fetcher),
        }
    }

    /// Returns the catalog this generator serves.
    #[must_use]
    pub fn config(&self) -> &ValidatedConfig {
        &self.config
    }

    /// Generates the script for one named list.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::NotFound`] for unknown names, or the
    /// error of the first failing source. Per-list generation is
    /// all-or-nothing.
    pub async fn generate_list(&self, name: &str) -> Result<String, GenerateError> {
        let spec = self
            .config
            .list(name)
            .ok_or_else(|| GenerateError::NotFound {
                name: name.to_string(),
            })?;

        let timeout = spec
            .effective_timeout(self.config.default_timeout.as_deref())
            .map_err(|e| GenerateError::Timeout {
                name: name.to_string(),
                source: e,
            })?;
        let comment = spec.effective_comment_prefix(&self.config.default_comment_prefix);

        let entries = aggregate_list(&self.collector, spec, comment, timeout)
            .await
            .map_err(|e| GenerateError::Source {
                name: name.to_string(),
                source: e,
            })?;

        debug!(list = name, entries = entries.len(), "rendering script");
        render_script(name, &entries).map_err(|reason| {
            error!(list = name, %reason, "template render failed");
            GenerateError::Render {
                name: name.to_string(),
                reason,
            }
        })
    }

    /// Generates scripts for every list in the catalog, in lexicographic
    /// name order.
    ///
    /// Failures do not abort the batch; each is recorded per list in the
    /// returned [`BatchReport`].
    pub async fn generate_all(&self) -> BatchReport {
        let mut report = BatchReport::default();

        for name in self.config.lists.keys() {
            match self.generate_list(name).await {
                Ok(script) => {
                    report.scripts.insert(name.clone(), script);
                }
                Err(e) => {
                    report.failures.insert(name.clone(), e);
                }
            }
        }

        report
    }
}
