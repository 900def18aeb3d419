//! `wf-core` — foundational types for the wayfind route-overlay toolkit.
//!
//! This crate is a dependency of every other `wf-*` crate.  It intentionally
//! has no `wf-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                             |
//! |--------------|------------------------------------------------------|
//! | [`geo`]      | `GeoPoint`, haversine distance, `GeoBounds`          |
//! | [`path`]     | polyline length and the 50 %-length midpoint         |
//! | [`estimate`] | `TravelMode`, `TravelEstimate`, label formatting     |
//! | [`ids`]      | `SlotId`                                             |
//! | [`error`]    | `CoreError`, `CoreResult`                            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                               |
//! |---------|------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.  |

pub mod error;
pub mod estimate;
pub mod geo;
pub mod ids;
pub mod path;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use estimate::{ModeMinutes, TravelEstimate, TravelMode};
pub use geo::{EARTH_RADIUS_M, GeoBounds, GeoPoint};
pub use ids::SlotId;
pub use path::{path_length_m, path_midpoint};
