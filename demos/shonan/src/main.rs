//! shonan — demo guide map for the Michi-no-Eki Shonan venue.
//!
//! Drives the full route-overlay stack without a real map renderer: canvas
//! operations print to stdout, the "GPS" replays a jittered fixed position,
//! and routing uses a dog-leg corridor stub unless `--online` selects the
//! public OSRM endpoint.
//!
//! The scripted walkthrough toggles through the surveyed routes, switches
//! to a live route (exclusivity displaces the previous one), and toggles it
//! off again (camera returns to the venue pose).

mod canvas;
mod location;
mod scene;

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use crossbeam_channel::{Sender, unbounded};

use wf_core::{GeoPoint, SlotId, TravelEstimate};
use wf_location::{
    LocationError, LocationListener, LocationSample, LocationTracker, WatchOptions,
};
use wf_overlay::{MapCanvas, Overlay};
use wf_route::{OsrmService, RoutingProfile, RoutingResult, RoutingService};
use wf_select::{Event, SelectionController, SelectionObserver};

use canvas::TraceCanvas;
use location::JitteredSource;

/// Pause between scripted user actions.
const STEP_PAUSE: Duration = Duration::from_millis(600);

// ── Offline routing stand-in ──────────────────────────────────────────────────

/// Dog-leg corridor between origin and destination, for runs without
/// network access.
struct CorridorService;

impl RoutingService for CorridorService {
    fn route(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
        _profile: RoutingProfile,
    ) -> RoutingResult<Vec<GeoPoint>> {
        let elbow = GeoPoint::new(origin.lon, destination.lat);
        Ok(vec![origin, elbow, destination])
    }
}

// ── Channel adapters ──────────────────────────────────────────────────────────

/// Forwards watch callbacks into the controller's event channel.
struct EventForwarder(Sender<Event>);

impl LocationListener for EventForwarder {
    fn on_sample(&mut self, sample: LocationSample) {
        let _ = self.0.send(Event::Location(sample));
    }

    fn on_error(&mut self, error: LocationError) {
        let _ = self.0.send(Event::LocationFailed(error));
    }
}

/// Prints toggle-panel changes the way the page would apply them.
struct ConsolePanel;

impl SelectionObserver for ConsolePanel {
    fn on_toggle_cleared(&mut self, slot: SlotId) {
        println!("[panel] toggle {} unchecked", slot.0);
    }

    fn on_route_shown(&mut self, slot: SlotId, estimate: &TravelEstimate) {
        println!("[panel] route {} shown — {}", slot.0, estimate.label());
    }

    fn on_route_hidden(&mut self, slot: SlotId) {
        println!("[panel] route {} hidden", slot.0);
    }

    fn on_warning(&mut self, message: &str) {
        println!("[panel] warning: {message}");
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let online = std::env::args().any(|arg| arg == "--online");
    let service: Arc<dyn RoutingService> = if online {
        println!("routing via {}", wf_route::PUBLIC_OSRM_URL);
        Arc::new(OsrmService::new()?)
    } else {
        println!("routing via offline corridor stub (pass --online for OSRM)");
        Arc::new(CorridorService)
    };

    let (tx, rx) = unbounded();

    // Scene setup: parking areas, then the fly-in from the wide default
    // view to the venue.
    let mut overlay = Overlay::new(TraceCanvas::new(scene::DEFAULT_POSE), scene::VENUE_POSE);
    scene::draw_parking_lots(overlay.canvas_mut());
    overlay.reset_camera();

    let mut controller = SelectionController::new(
        scene::route_catalog(),
        overlay,
        service,
        RoutingProfile::Foot,
        tx.clone(),
        ConsolePanel,
    );

    let mut tracker = LocationTracker::new(WatchOptions::default());
    tracker.start(
        JitteredSource::near(scene::DEMO_START),
        EventForwarder(tx.clone()),
    );

    // The driver thread plays the visitor; the loop below owns all map
    // state and applies every event in arrival order.
    let driver = thread::spawn(move || {
        let script = [
            Event::ToggleOn(SlotId(0)),  // surveyed route between the buildings
            Event::ToggleOn(SlotId(1)),  // displaces route 0
            Event::ToggleOn(SlotId(2)),  // live route to the tent building
            Event::ToggleOn(SlotId(3)),  // live route to the tsubasa building
            Event::ToggleOff(SlotId(3)), // camera returns to the venue pose
        ];
        for event in script {
            thread::sleep(STEP_PAUSE);
            let _ = tx.send(event);
        }
        thread::sleep(STEP_PAUSE);
        let _ = tx.send(Event::Shutdown);
    });

    controller.run(&rx)?;

    driver.join().ok();
    tracker.stop();

    let viewport = controller.overlay().canvas().viewport();
    println!(
        "walkthrough complete — camera at {} zoom {}",
        viewport.center, viewport.zoom
    );
    Ok(())
}
