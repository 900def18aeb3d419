//! `Overlay` — create and destroy the artifacts of the active route.

use wf_core::{CoreResult, GeoBounds, GeoPoint, SlotId, TravelEstimate, path_length_m, path_midpoint};

use crate::{CameraPose, FitOptions, FlightPlan, LineStyle, MapCanvas};

/// Owns the canvas and the artifacts of the currently displayed route.
///
/// At most one route's artifacts exist at a time.  The selection controller
/// guarantees any other slot is deactivated before a new one is activated;
/// the overlay itself only replaces artifacts in place when the same slot
/// is re-activated with fresh geometry.
pub struct Overlay<C: MapCanvas> {
    canvas: C,
    /// Default framing restored when the last location-dependent route clears.
    home_pose: CameraPose,
    active: Option<Artifact>,
}

/// Rendered representation of one active slot.
struct Artifact {
    slot: SlotId,
    line_id: String,
    label_id: String,
}

impl<C: MapCanvas> Overlay<C> {
    pub fn new(canvas: C, home_pose: CameraPose) -> Self {
        Self {
            canvas,
            home_pose,
            active: None,
        }
    }

    /// The slot whose artifacts are currently on the canvas, if any.
    pub fn active_slot(&self) -> Option<SlotId> {
        self.active.as_ref().map(|a| a.slot)
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    /// Scene drawing (markers, area polygons) goes straight to the canvas.
    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    /// Draw `slot`'s line in `color`, compute its travel estimate, and place
    /// the estimate label at the path midpoint.  With `frame_path` the
    /// camera is additionally fitted to the whole path (dynamic routes).
    ///
    /// Returns the estimate so the caller can surface it to observers.
    ///
    /// # Errors
    ///
    /// Path-math errors from wf-core; nothing is drawn when they occur.
    pub fn activate(
        &mut self,
        slot: SlotId,
        color: &'static str,
        path: &[GeoPoint],
        frame_path: bool,
    ) -> CoreResult<TravelEstimate> {
        let length = path_length_m(path)?;
        let estimate = TravelEstimate::for_distance(length);
        let midpoint = path_midpoint(path)?;

        // Re-activating the same slot replaces its artifacts.
        self.deactivate(slot);

        let line_id = format!("route-line-{}", slot.0);
        let label_id = format!("route-popup-{}", slot.0);
        self.canvas.draw_line(&line_id, path, LineStyle::route(color));
        self.canvas.place_label(&label_id, midpoint, &label_html(&estimate));

        if frame_path {
            if let Some(bounds) = GeoBounds::from_points(path) {
                self.canvas.fit_bounds(bounds, FitOptions::default());
            }
        }

        self.active = Some(Artifact { slot, line_id, label_id });
        Ok(estimate)
    }

    /// Remove `slot`'s artifacts.  Safe to call when that slot (or nothing
    /// at all) is active.
    pub fn deactivate(&mut self, slot: SlotId) {
        if let Some(artifact) = self.active.take_if(|a| a.slot == slot) {
            self.canvas.remove_line(&artifact.line_id);
            self.canvas.remove_label(&artifact.label_id);
        }
    }

    /// Fly the camera back to the default framing.
    pub fn reset_camera(&mut self) {
        self.canvas.fly_to(self.home_pose, FlightPlan::default());
    }
}

/// Bold one-line label, the styling the overlay has always used.
fn label_html(estimate: &TravelEstimate) -> String {
    format!(
        r#"<div style="font-size:14px;font-weight:bold;">{}</div>"#,
        estimate.label()
    )
}
