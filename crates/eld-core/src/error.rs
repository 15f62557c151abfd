//! Planner error type.
//!
//! Sub-crates define their own error enums (`RouteError`, `OutputError`) and
//! wrap `EldError` as one variant where a simulation failure can surface.

use thiserror::Error;

/// The top-level error type for `eld-core` and `eld-sim`.
#[derive(Debug, Error, PartialEq)]
pub enum EldError {
    #[error("invalid {what} distance {value}: must be finite and non-negative")]
    InvalidDistance { what: &'static str, value: f64 },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for all `eld-*` crates.
pub type EldResult<T> = Result<T, EldError>;
