//! `RouteSlot` — one selectable route, fixed or dynamically resolved.

use wf_core::GeoPoint;

/// One selectable route in the catalog.
///
/// `Fixed` slots carry geometry known at construction time and never change.
/// `ToDestination` slots route from the user's live position to a fixed
/// destination; their `path` holds the latest successful resolution and is
/// overwritten whenever the route is re-resolved from a fresh origin.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RouteSlot {
    /// Immutable geometry, drawable immediately.
    Fixed(Vec<GeoPoint>),

    /// Live-origin route to `destination`.  `path` is absent until the
    /// first successful resolution.
    ToDestination {
        destination: GeoPoint,
        path: Option<Vec<GeoPoint>>,
    },
}

impl RouteSlot {
    /// A fixed route over `coords`.
    pub fn fixed(coords: Vec<GeoPoint>) -> Self {
        RouteSlot::Fixed(coords)
    }

    /// An unresolved live-origin route to `destination`.
    pub fn to_destination(destination: GeoPoint) -> Self {
        RouteSlot::ToDestination { destination, path: None }
    }

    /// `true` for live-origin slots.
    #[inline]
    pub fn is_dynamic(&self) -> bool {
        matches!(self, RouteSlot::ToDestination { .. })
    }

    /// Routing target of a dynamic slot; `None` for fixed routes.
    pub fn destination(&self) -> Option<GeoPoint> {
        match self {
            RouteSlot::ToDestination { destination, .. } => Some(*destination),
            RouteSlot::Fixed(_) => None,
        }
    }

    /// Drawable geometry — always present for fixed slots, present for
    /// dynamic slots only after a successful resolution.
    pub fn coordinates(&self) -> Option<&[GeoPoint]> {
        match self {
            RouteSlot::Fixed(coords) => Some(coords),
            RouteSlot::ToDestination { path, .. } => path.as_deref(),
        }
    }
}
