//! YAML configuration file decoding.
//!
//! Defines the raw on-disk structure with serde. Decoding is a plain
//! field mapping; all semantic checks live in [`super::validated`].

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from the YAML file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct YamlConfig {
    /// Process-wide fallback values
    #[serde(default)]
    pub config: DefaultsSection,

    /// Named address lists, keyed by list name
    #[serde(default)]
    pub lists: BTreeMap<String, ListSection>,
}

/// Defaults applied when a list omits a value.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefaultsSection {
    /// Fallback entry timeout in `NdNhNmNs` form
    pub timeout: Option<String>,

    /// Fallback comment attached to every entry
    #[serde(rename = "commentPrefix")]
    pub comment_prefix: Option<String>,
}

/// One named address list.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListSection {
    /// Entry timeout override in `NdNhNmNs` form
    pub timeout: Option<String>,

    /// Comment override for this list's entries
    #[serde(rename = "commentPrefix")]
    pub comment_prefix: Option<String>,

    /// Remote URLs fetched for addresses, in order
    #[serde(default)]
    pub urls: Vec<String>,

    /// Local files read for addresses, in order
    #[serde(default)]
    pub files: Vec<String>,

    /// Static addresses, verbatim, in order
    #[serde(default)]
    pub addresses: Vec<String>,
}

impl YamlConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or decoded.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# mt-addrlist configuration file

config:
  # Fallback entry timeout (NdNhNmNs form) for lists without their own.
  timeout: 4h
  # Fallback comment attached to every entry. Double quotes, backslashes,
  # and line breaks are rejected (the comment is quoted in the script).
  commentPrefix: "managed by mt-addrlist"

lists:
  # List names become RouterOS identifiers: letters, digits, underscore,
  # starting with a letter.
  blocklist:
    # Per-list overrides (optional):
    # timeout: 1d
    # commentPrefix: "blocklist entry"

    # Remote sources, fetched in order. Lines starting with '#' and inline
    # '# ...' comments are stripped.
    urls:
      - https://example.com/blocklist.txt

    # Local files, read in order, same line format as urls.
    # files:
    #   - /etc/mt-addrlist/extra.txt

    # Static addresses, appended last.
    addresses:
      - 192.0.2.0/24
"#
    .to_string()
}
