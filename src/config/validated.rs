//! Validated catalog built from the raw YAML structure.
//!
//! All semantic validation happens during construction: a
//! [`ValidatedConfig`] in hand means generation can only fail on source
//! I/O, never on the configuration itself.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use super::duration::{parse_duration, resolve_timeout};
use super::error::ConfigError;
use super::yaml::{YamlConfig, default_config_template};

/// List names are spliced verbatim into RouterOS global identifiers
/// (`:global <name>AddIP`), so only identifier-safe characters pass.
static LIST_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_]*$").expect("list name regex is valid"));

/// Comment prefixes land inside the double-quoted `"$2"` argument of the
/// generated script, so quoting metacharacters are rejected at load.
fn check_comment_prefix(prefix: Option<&str>, scope: &str) -> Result<(), ConfigError> {
    let Some(prefix) = prefix else {
        return Ok(());
    };
    if prefix.contains(['"', '\\', '\n', '\r']) {
        return Err(ConfigError::UnsafeCommentPrefix {
            scope: scope.to_string(),
        });
    }
    Ok(())
}

/// One validated address list.
///
/// Source ordering is part of the contract: URLs first, then files, then
/// static addresses, each group in configured order.
#[derive(Debug, Clone)]
pub struct ListSpec {
    /// Entry timeout override in `NdNhNmNs` form, already grammar-checked
    pub timeout: Option<String>,

    /// Comment override for this list's entries
    pub comment_prefix: Option<String>,

    /// Remote URLs fetched for addresses
    pub urls: Vec<String>,

    /// Local files read for addresses
    pub files: Vec<String>,

    /// Static addresses
    pub addresses: Vec<String>,
}

impl ListSpec {
    /// Returns the effective timeout string for this list.
    ///
    /// # Errors
    ///
    /// Returns an error when neither this list nor the defaults carry a
    /// timeout. Load-time validation rules this out for specs obtained
    /// from [`ValidatedConfig`].
    pub fn effective_timeout<'a>(
        &'a self,
        default_timeout: Option<&'a str>,
    ) -> Result<&'a str, super::DurationError> {
        resolve_timeout(self.timeout.as_deref(), default_timeout)
    }

    /// Returns the effective comment for this list's entries.
    ///
    /// List-level prefix wins over the defaults-level one; an empty
    /// comment is allowed when neither is configured.
    #[must_use]
    pub fn effective_comment_prefix<'a>(&'a self, default_prefix: &'a str) -> &'a str {
        self.comment_prefix
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(default_prefix)
    }
}

/// Fully validated configuration, immutable for the life of the process.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] (or [`ValidatedConfig::load`] to read
/// from disk first). Construction rejects:
///
/// - an empty `lists` mapping
/// - a list with none of urls, files, or addresses
/// - a list name unsafe for script identifiers
/// - a malformed timeout at either level
/// - a list left without any timeout to resolve to
/// - a comment prefix that would break script quoting
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Fallback entry timeout, grammar-checked
    pub default_timeout: Option<String>,

    /// Fallback entry comment (empty when unconfigured)
    pub default_comment_prefix: String,

    /// The catalog, keyed by list name; `BTreeMap` gives the lexicographic
    /// iteration order batch generation relies on
    pub lists: BTreeMap<String, ListSpec>,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ lists: {}, default_timeout: {}, default_comment: {:?} }}",
            self.lists.len(),
            self.default_timeout.as_deref().unwrap_or("none"),
            self.default_comment_prefix,
        )
    }
}

impl ValidatedConfig {
    /// Validates a raw YAML structure into a usable catalog.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] describing the first violation found.
    /// Validation is all-or-nothing: no partial catalog is ever produced.
    pub fn from_raw(raw: YamlConfig) -> Result<Self, ConfigError> {
        if raw.lists.is_empty() {
            return Err(ConfigError::NoLists);
        }

        check_comment_prefix(raw.config.comment_prefix.as_deref(), "defaults")?;

        let default_timeout = raw.config.timeout.filter(|s| !s.is_empty());
        if let Some(ref timeout) = default_timeout {
            parse_duration(timeout).map_err(|e| ConfigError::InvalidTimeout {
                scope: "defaults".to_string(),
                source: e,
            })?;
        }

        let mut lists = BTreeMap::new();
        for (name, section) in raw.lists {
            if !LIST_NAME_RE.is_match(&name) {
                return Err(ConfigError::UnsafeListName { name });
            }

            if section.urls.is_empty() && section.files.is_empty() && section.addresses.is_empty() {
                return Err(ConfigError::NoSources { name });
            }

            check_comment_prefix(section.comment_prefix.as_deref(), &format!("list '{name}'"))?;

            let timeout = section.timeout.filter(|s| !s.is_empty());
            if let Some(ref timeout) = timeout {
                parse_duration(timeout).map_err(|e| ConfigError::InvalidTimeout {
                    scope: format!("list '{name}'"),
                    source: e,
                })?;
            } else if default_timeout.is_none() {
                // Strict policy: no silent built-in timeout.
                return Err(ConfigError::MissingTimeout { name });
            }

            lists.insert(
                name,
                ListSpec {
                    timeout,
                    comment_prefix: section.comment_prefix,
                    urls: section.urls,
                    files: section.files,
                    addresses: section.addresses,
                },
            );
        }

        Ok(Self {
            default_timeout,
            default_comment_prefix: raw.config.comment_prefix.unwrap_or_default(),
            lists,
        })
    }

    /// Loads and validates configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or decoded, or if the
    /// decoded structure fails validation.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::from_raw(YamlConfig::load(path)?)
    }

    /// Looks up a list by name.
    #[must_use]
    pub fn list(&self, name: &str) -> Option<&ListSpec> {
        self.lists.get(name)
    }
}

/// Writes a commented configuration template to the given path.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    std::fs::write(path, default_config_template()).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
