//! `wf-route` — dynamic route resolution against an external routing service.
//!
//! # Crate layout
//!
//! | Module      | Contents                                               |
//! |-------------|--------------------------------------------------------|
//! | [`service`] | `RoutingService` trait, `RoutingProfile`               |
//! | [`osrm`]    | `OsrmService` — blocking OSRM `route/v1` client        |
//! | [`error`]   | `RoutingError`, `RoutingResult<T>`                     |
//!
//! Resolution is a plain blocking call behind the [`RoutingService`] trait;
//! the selection controller runs each call on a worker thread and receives
//! the outcome as an event, so nothing here needs to know about channels or
//! staleness tokens.

pub mod error;
pub mod osrm;
pub mod service;

#[cfg(test)]
mod tests;

pub use error::{RoutingError, RoutingResult};
pub use osrm::{OsrmService, PUBLIC_OSRM_URL};
pub use service::{RoutingProfile, RoutingService};
