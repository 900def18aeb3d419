//! The `SelectionController` — state machine over toggles, fixes, and
//! resolver completions.

use std::sync::Arc;
use std::thread;

use crossbeam_channel::{Receiver, Sender};

use wf_catalog::{RouteCatalog, RouteSlot};
use wf_core::{GeoPoint, SlotId};
use wf_location::LocationSample;
use wf_overlay::{MapCanvas, Overlay};
use wf_route::{RoutingError, RoutingProfile, RoutingService};

use crate::{Event, RouteToken, SelectResult, SelectionObserver, SelectionState};

/// Canvas id of the live-position dot.
const CURRENT_LOCATION_MARKER: &str = "current-location";

/// Enforces at-most-one-active-route and orchestrates catalog, resolver,
/// and overlay on every event.
///
/// The controller is the sole writer of the selection state, the catalog's
/// resolution entries, and (through [`Overlay`]) the canvas.  It runs on
/// one thread; resolver workers it spawns communicate back exclusively via
/// the event channel.
pub struct SelectionController<C: MapCanvas, O: SelectionObserver> {
    catalog: RouteCatalog,
    overlay: Overlay<C>,
    service: Arc<dyn RoutingService>,
    profile: RoutingProfile,
    observer: O,

    /// Producer half of the event channel, cloned into resolver workers.
    events: Sender<Event>,

    state: SelectionState,
    /// Newest fix from the location watch; `None` until the first sample.
    last_fix: Option<LocationSample>,
    next_token: u64,
}

impl<C: MapCanvas, O: SelectionObserver> SelectionController<C, O> {
    pub fn new(
        catalog: RouteCatalog,
        overlay: Overlay<C>,
        service: Arc<dyn RoutingService>,
        profile: RoutingProfile,
        events: Sender<Event>,
        observer: O,
    ) -> Self {
        Self {
            catalog,
            overlay,
            service,
            profile,
            observer,
            events,
            state: SelectionState::Idle,
            last_fix: None,
            next_token: 0,
        }
    }

    // ── Read access ───────────────────────────────────────────────────────

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn last_fix(&self) -> Option<LocationSample> {
        self.last_fix
    }

    pub fn catalog(&self) -> &RouteCatalog {
        &self.catalog
    }

    pub fn overlay(&self) -> &Overlay<C> {
        &self.overlay
    }

    /// Scene drawing outside the route lifecycle (area polygons, initial
    /// camera move) goes through here.
    pub fn overlay_mut(&mut self) -> &mut Overlay<C> {
        &mut self.overlay
    }

    // ── Event loop ────────────────────────────────────────────────────────

    /// Drain events until [`Event::Shutdown`] arrives or every sender is
    /// gone.
    pub fn run(&mut self, events: &Receiver<Event>) -> SelectResult<()> {
        while let Ok(event) = events.recv() {
            if matches!(event, Event::Shutdown) {
                break;
            }
            self.handle(event)?;
        }
        Ok(())
    }

    /// Apply a single event.
    pub fn handle(&mut self, event: Event) -> SelectResult<()> {
        match event {
            Event::ToggleOn(slot) => self.toggle_on(slot),
            Event::ToggleOff(slot) => {
                self.toggle_off(slot);
                Ok(())
            }
            Event::Location(sample) => {
                self.location(sample);
                Ok(())
            }
            Event::LocationFailed(err) => {
                log::warn!("location sampling failed: {err}");
                Ok(())
            }
            Event::RouteResolved { slot, token, result } => {
                self.route_resolved(slot, token, result)
            }
            Event::Shutdown => Ok(()),
        }
    }

    // ── Toggle handling ───────────────────────────────────────────────────

    fn toggle_on(&mut self, slot: SlotId) -> SelectResult<()> {
        match self.state {
            // Single-flight: a slot already resolving keeps its request.
            SelectionState::Resolving { slot: current, .. } if current == slot => return Ok(()),
            SelectionState::Active(current) if current == slot => return Ok(()),
            _ => {}
        }

        // Validate the incoming slot before touching the current one.
        let incoming_dynamic = self.catalog.get(slot)?.is_dynamic();
        self.displace_current(incoming_dynamic);

        let destination = match self.catalog.get(slot)? {
            RouteSlot::Fixed(coords) => {
                let color = self.catalog.color_of(slot);
                let estimate = self.overlay.activate(slot, color, coords, false)?;
                self.state = SelectionState::Active(slot);
                self.observer.on_route_shown(slot, &estimate);
                return Ok(());
            }
            RouteSlot::ToDestination { destination, .. } => *destination,
        };

        // Re-resolve from the live origin on every activation; a previously
        // stored path is stale once the user has moved.
        let Some(fix) = self.last_fix else {
            log::warn!("cannot route {slot}: location unavailable");
            self.observer.on_warning("location unavailable");
            self.observer.on_toggle_cleared(slot);
            return Ok(());
        };
        self.begin_resolve(slot, fix.point, destination);
        Ok(())
    }

    fn toggle_off(&mut self, slot: SlotId) {
        match self.state {
            SelectionState::Active(current) if current == slot => {
                self.hide(slot, false);
                self.state = SelectionState::Idle;
            }
            SelectionState::Resolving { slot: current, .. } if current == slot => {
                // Abandon the request; its result will carry a stale token.
                // The default framing comes back even though nothing was
                // drawn yet — the camera may sit anywhere mid-flight.
                self.state = SelectionState::Idle;
                self.overlay.reset_camera();
            }
            // Toggles for slots that are not up are already off.
            _ => {}
        }
    }

    /// Remove whatever is currently shown or pending and clear its toggle.
    fn displace_current(&mut self, incoming_dynamic: bool) {
        match self.state {
            SelectionState::Idle => {}
            SelectionState::Active(current) => {
                self.hide(current, incoming_dynamic);
                self.observer.on_toggle_cleared(current);
            }
            SelectionState::Resolving { slot: current, .. } => {
                // The in-flight result goes stale the moment the state
                // moves on.  Resolving slots are dynamic, so displacement
                // by a non-dynamic slot restores the default framing.
                self.observer.on_toggle_cleared(current);
                if !incoming_dynamic {
                    self.overlay.reset_camera();
                }
            }
        }
        self.state = SelectionState::Idle;
    }

    /// Deactivate `slot`'s artifacts.  The default framing is restored when
    /// a location-dependent route goes away without another taking over.
    fn hide(&mut self, slot: SlotId, replaced_by_dynamic: bool) {
        self.overlay.deactivate(slot);
        let was_dynamic = self
            .catalog
            .get(slot)
            .map(RouteSlot::is_dynamic)
            .unwrap_or(false);
        if was_dynamic && !replaced_by_dynamic {
            self.overlay.reset_camera();
        }
        self.observer.on_route_hidden(slot);
    }

    // ── Resolution ────────────────────────────────────────────────────────

    /// Dispatch a resolver worker for `slot` and enter `Resolving`.
    ///
    /// The network call is never hard-cancelled; supersession is handled by
    /// the token check when its result comes back.
    fn begin_resolve(&mut self, slot: SlotId, origin: GeoPoint, destination: GeoPoint) {
        self.next_token += 1;
        let token = RouteToken(self.next_token);

        let service = Arc::clone(&self.service);
        let events = self.events.clone();
        let profile = self.profile;
        thread::spawn(move || {
            let result = service.route(origin, destination, profile);
            // The loop may already be gone on teardown; nothing to do then.
            let _ = events.send(Event::RouteResolved { slot, token, result });
        });

        self.state = SelectionState::Resolving { slot, token };
    }

    fn route_resolved(
        &mut self,
        slot: SlotId,
        token: RouteToken,
        result: Result<Vec<GeoPoint>, RoutingError>,
    ) -> SelectResult<()> {
        // Stale-response guard: only the request the state still points at
        // may act.
        if self.state != (SelectionState::Resolving { slot, token }) {
            log::debug!("discarding stale resolution for {slot}");
            return Ok(());
        }

        match result {
            Ok(path) => {
                let color = self.catalog.color_of(slot);
                let estimate = self.overlay.activate(slot, color, &path, true)?;
                self.catalog.resolve(slot, path)?;
                self.state = SelectionState::Active(slot);
                self.observer.on_route_shown(slot, &estimate);
            }
            Err(err) => {
                log::warn!("route resolution for {slot} failed: {err}");
                self.observer.on_warning(&err.to_string());
                self.observer.on_toggle_cleared(slot);
                self.state = SelectionState::Idle;
            }
        }
        Ok(())
    }

    // ── Location ──────────────────────────────────────────────────────────

    fn location(&mut self, sample: LocationSample) {
        self.last_fix = Some(sample);
        // Keep the live-position dot under the newest fix.
        self.overlay
            .canvas_mut()
            .place_marker(CURRENT_LOCATION_MARKER, sample.point);
    }
}
