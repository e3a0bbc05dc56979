//! Source layer: retrieving raw address data.
//!
//! This module provides:
//! - The fetch abstraction for remote sources ([`Fetch`], [`FetchedBody`])
//! - The production reqwest implementation ([`ReqwestFetcher`])
//! - Collection and line normalization for all three source kinds
//!   ([`SourceCollector`], [`normalize_lines`])

mod client;
mod collector;
mod error;
mod fetch;

#[cfg(test)]
mod collector_tests;

pub use client::{DEFAULT_FETCH_TIMEOUT, ReqwestFetcher};
pub use collector::{SourceCollector, normalize_lines};
pub use error::SourceError;
pub use fetch::{Fetch, FetchedBody};
