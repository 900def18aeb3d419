//! The map rendering collaborator seam.

use wf_core::{GeoBounds, GeoPoint};

use crate::{CameraPose, FitOptions, FlightPlan, Viewport};

/// Stroke style for a route line.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LineStyle {
    pub color: &'static str,
    pub width_px: f32,
}

impl LineStyle {
    /// The standard route stroke: 5 px wide, rounded joins assumed.
    pub fn route(color: &'static str) -> Self {
        Self { color, width_px: 5.0 }
    }
}

/// Fill-plus-outline style for an area polygon.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PolygonStyle {
    pub fill_color: &'static str,
    pub fill_opacity: f32,
    pub line_color: &'static str,
    pub line_width_px: f32,
}

/// Drawing and camera primitives the embedding map renderer provides.
///
/// Identifiers are caller-chosen strings.  Drawing or placing an `id` that
/// already exists replaces it; removing an `id` that does not exist is a
/// no-op.  Implementations are driven from the single event-loop thread
/// only, so no interior synchronization is required.
pub trait MapCanvas {
    fn draw_line(&mut self, id: &str, path: &[GeoPoint], style: LineStyle);

    fn remove_line(&mut self, id: &str);

    /// Place an HTML-bearing label marker at `at`.
    fn place_label(&mut self, id: &str, at: GeoPoint, html: &str);

    fn remove_label(&mut self, id: &str);

    /// Place a point-of-interest or live-position marker at `at`.
    fn place_marker(&mut self, id: &str, at: GeoPoint);

    fn remove_marker(&mut self, id: &str);

    /// Draw a filled, outlined area; `name` adds a centred text label.
    fn draw_polygon(&mut self, id: &str, ring: &[GeoPoint], style: PolygonStyle, name: Option<&str>);

    /// Animated transition to a full camera pose.
    fn fly_to(&mut self, pose: CameraPose, flight: FlightPlan);

    /// Animated transition framing `bounds`.
    fn fit_bounds(&mut self, bounds: GeoBounds, fit: FitOptions);

    /// Current camera centre and zoom.
    fn viewport(&self) -> Viewport;
}
