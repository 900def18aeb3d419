//! Location-subsystem error type.

use thiserror::Error;

/// Errors produced by geolocation sampling.
///
/// All variants are recoverable: the watch keeps running after reporting
/// one, and consumers treat a missing fix as "location unavailable" rather
/// than a fault.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LocationError {
    /// The user or platform denied access to positioning.
    #[error("location permission denied")]
    PermissionDenied,

    /// No fix arrived within the bounded wait.
    #[error("location acquisition timed out")]
    Timeout,

    /// Any other platform failure.
    #[error("location unavailable: {0}")]
    Unavailable(String),
}

pub type LocationResult<T> = Result<T, LocationError>;
