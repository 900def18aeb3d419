//! Controller events — everything the selection controller reacts to.

use wf_core::{GeoPoint, SlotId};
use wf_location::{LocationError, LocationSample};
use wf_route::RoutingError;

use crate::RouteToken;

/// One unit of input for the selection controller.
///
/// Events from every producer — UI toggles, the location watch, resolver
/// workers — funnel through a single channel and are handled strictly in
/// arrival order.  That ordering is what makes the controller effectively
/// single-threaded: no handler ever runs while another is in progress.
#[derive(Debug)]
pub enum Event {
    /// The user switched a route's toggle on.
    ToggleOn(SlotId),

    /// The user switched a route's toggle off.
    ToggleOff(SlotId),

    /// A fresh fix from the live-location watch.
    Location(LocationSample),

    /// A sampling failure from the watch.  Non-fatal; the watch continues.
    LocationFailed(LocationError),

    /// A resolver worker finished.
    ///
    /// `token` names the request this answers.  The controller discards
    /// results whose token no longer matches its state — the request was
    /// superseded or abandoned while in flight.
    RouteResolved {
        slot: SlotId,
        token: RouteToken,
        result: Result<Vec<GeoPoint>, RoutingError>,
    },

    /// End the event loop (system teardown).
    Shutdown,
}
