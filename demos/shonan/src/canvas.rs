//! Console canvas — prints every drawing primitive instead of rendering.

use wf_core::{GeoBounds, GeoPoint};
use wf_overlay::{CameraPose, FitOptions, FlightPlan, LineStyle, MapCanvas, PolygonStyle, Viewport};

/// Stand-in for a real map renderer: each primitive becomes one stdout
/// line, and the camera state is tracked so `viewport` answers sensibly.
pub struct TraceCanvas {
    center: GeoPoint,
    zoom: f64,
}

impl TraceCanvas {
    pub fn new(initial: CameraPose) -> Self {
        Self {
            center: initial.center,
            zoom: initial.zoom,
        }
    }
}

impl MapCanvas for TraceCanvas {
    fn draw_line(&mut self, id: &str, path: &[GeoPoint], style: LineStyle) {
        println!(
            "[map] line {id}: {} points, {} at {}px",
            path.len(),
            style.color,
            style.width_px
        );
    }

    fn remove_line(&mut self, id: &str) {
        println!("[map] line {id} removed");
    }

    fn place_label(&mut self, id: &str, at: GeoPoint, html: &str) {
        println!("[map] label {id} at {at}: {html}");
    }

    fn remove_label(&mut self, id: &str) {
        println!("[map] label {id} removed");
    }

    fn place_marker(&mut self, id: &str, at: GeoPoint) {
        println!("[map] marker {id} at {at}");
    }

    fn remove_marker(&mut self, id: &str) {
        println!("[map] marker {id} removed");
    }

    fn draw_polygon(&mut self, id: &str, ring: &[GeoPoint], _style: PolygonStyle, name: Option<&str>) {
        println!(
            "[map] area {id} ({}) with {} vertices",
            name.unwrap_or("unnamed"),
            ring.len()
        );
    }

    fn fly_to(&mut self, pose: CameraPose, flight: FlightPlan) {
        self.center = pose.center;
        self.zoom = pose.zoom;
        println!(
            "[map] fly to {} zoom {} pitch {} (speed {}, curve {})",
            pose.center, pose.zoom, pose.pitch, flight.speed, flight.curve
        );
    }

    fn fit_bounds(&mut self, bounds: GeoBounds, fit: FitOptions) {
        self.center = bounds.center();
        self.zoom = self.zoom.min(fit.max_zoom);
        println!(
            "[map] fit [{:.5},{:.5}]..[{:.5},{:.5}] pad {}px max-zoom {} over {}ms",
            bounds.min_lon,
            bounds.min_lat,
            bounds.max_lon,
            bounds.max_lat,
            fit.padding_px,
            fit.max_zoom,
            fit.duration_ms
        );
    }

    fn viewport(&self) -> Viewport {
        Viewport {
            center: self.center,
            zoom: self.zoom,
        }
    }
}
