//! Configuration layer for mt-addrlist.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - YAML configuration file decoding ([`YamlConfig`])
//! - Validated catalog construction ([`ValidatedConfig`])
//! - The duration grammar ([`parse_duration`], [`resolve_timeout`])
//! - Configuration file generation ([`write_default_config`])
//!
//! # Validation
//!
//! Everything that can be rejected eagerly is rejected at load time:
//! empty catalogs, lists without sources, unsafe list names, and malformed
//! or unresolvable timeouts. Generation never runs against an invalid
//! catalog, and the validated catalog is immutable afterwards, so
//! concurrent generations share it read-only.

mod cli;
mod duration;
mod error;
mod validated;
mod yaml;

#[cfg(test)]
mod duration_tests;

pub use cli::{Cli, Command};
pub use duration::{parse_duration, resolve_timeout};
pub use error::{ConfigError, DurationError};
pub use validated::{ListSpec, ValidatedConfig, write_default_config};
pub use yaml::{YamlConfig, default_config_template};
