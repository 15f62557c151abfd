//! Route-side error type.

use thiserror::Error;

use eld_core::EldError;

/// Errors produced by `eld-route`.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("route geometry has no points")]
    EmptyGeometry,

    #[error("distance along route must be a number, got {0}")]
    InvalidDistance(f64),

    #[error("invalid location: {0}")]
    Location(#[from] EldError),

    #[error("route provider failed: {0}")]
    Provider(String),
}

pub type RouteResult<T> = Result<T, RouteError>;
