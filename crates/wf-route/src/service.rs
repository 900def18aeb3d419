//! Routing trait and profile.
//!
//! # Pluggability
//!
//! The selection controller requests paths through the [`RoutingService`]
//! trait, so applications can swap the bundled OSRM client for another
//! provider, a cached layer, or a canned service in tests without touching
//! the controller.

use wf_core::GeoPoint;

use crate::RoutingResult;

/// Travel profile requested from the routing service.
///
/// The overlay routes pedestrians; the other profiles exist for
/// applications pointing at their own service instance.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum RoutingProfile {
    #[default]
    Foot,
    Bike,
    Car,
}

impl RoutingProfile {
    /// Profile segment of the request path.
    pub fn as_str(self) -> &'static str {
        match self {
            RoutingProfile::Foot => "foot",
            RoutingProfile::Bike => "bike",
            RoutingProfile::Car => "car",
        }
    }
}

impl std::fmt::Display for RoutingProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pluggable path-routing service.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync`: each resolution runs on its own
/// worker thread while the service instance is shared behind an `Arc`.
pub trait RoutingService: Send + Sync {
    /// Compute a routed path from `origin` to `destination`.
    ///
    /// The returned sequence is the full path geometry in travel order; it
    /// may deviate substantially from the straight line between the two
    /// endpoints.
    ///
    /// # Errors
    ///
    /// [`RoutingError::NoRouteFound`] when the service reports zero routes,
    /// [`RoutingError::ServiceUnavailable`] on transport or HTTP failure.
    ///
    /// [`RoutingError::NoRouteFound`]: crate::RoutingError::NoRouteFound
    /// [`RoutingError::ServiceUnavailable`]: crate::RoutingError::ServiceUnavailable
    fn route(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
        profile: RoutingProfile,
    ) -> RoutingResult<Vec<GeoPoint>>;
}
