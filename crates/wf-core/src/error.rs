//! Core error type.
//!
//! Sub-crates define their own error enums and either convert `CoreError`
//! via `From` impls or wrap it as one variant; both patterns appear in this
//! workspace.

use thiserror::Error;

/// Errors produced by the geodesic engine.
///
/// Both variants are programmer errors: route geometry reaching this crate
/// is expected to be validated, non-empty coordinate data.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("invalid coordinate ({lon}, {lat})")]
    InvalidCoordinate { lon: f64, lat: f64 },

    #[error("empty coordinate sequence")]
    EmptyPath,
}

/// Shorthand result type for geodesic operations.
pub type CoreResult<T> = Result<T, CoreError>;
