//! Routing-subsystem error type.

use thiserror::Error;

/// Errors produced by `wf-route`.
///
/// All variants are recoverable from the caller's point of view: a failed
/// resolution reverts the requesting toggle and leaves the rest of the
/// overlay untouched.
#[derive(Debug, Error)]
pub enum RoutingError {
    /// The service answered but reported zero routes.
    #[error("routing service returned no routes")]
    NoRouteFound,

    /// Transport or HTTP failure talking to the service.
    #[error("routing service unavailable: {0}")]
    ServiceUnavailable(#[from] reqwest::Error),

    /// The service answered with a body that cannot be used.
    #[error("malformed routing response: {0}")]
    BadResponse(String),
}

pub type RoutingResult<T> = Result<T, RoutingError>;
