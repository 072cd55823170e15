//! Error types for levelgauge-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
///
/// The grading heuristics themselves never fail: every score is clamped into
/// [0.0, 1.0] and every zero-denominator case short-circuits to a documented
/// default. Configuration loading is the only fallible surface of this crate.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;
