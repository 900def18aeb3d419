//! Camera vocabulary shared with the map rendering collaborator.
//!
//! Defaults are the transition parameters the overlay was designed around:
//! fit with 80 px padding capped at zoom 18 over 800 ms, and flights at
//! speed 0.8 with curve 1.5.

use wf_core::GeoPoint;

/// A complete camera position.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CameraPose {
    pub center: GeoPoint,
    pub zoom: f64,
    pub pitch: f64,
}

/// Animation parameters for a [`fly_to`](crate::MapCanvas::fly_to)
/// transition.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FlightPlan {
    pub speed: f64,
    pub curve: f64,
}

impl Default for FlightPlan {
    fn default() -> Self {
        Self { speed: 0.8, curve: 1.5 }
    }
}

/// Parameters for a bounds-fit camera move.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FitOptions {
    pub padding_px: u32,
    pub max_zoom: f64,
    pub duration_ms: u32,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            padding_px: 80,
            max_zoom: 18.0,
            duration_ms: 800,
        }
    }
}

/// Read-back of the current viewport.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    pub center: GeoPoint,
    pub zoom: f64,
}
