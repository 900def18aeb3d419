//! Geographic coordinate type and great-circle math.
//!
//! `GeoPoint` stores WGS-84 longitude/latitude as `f64`.  Overlay labels are
//! placed at interpolated positions on zoom-18 maps, where single-precision
//! (~1 m at the equator) is visibly off; double precision keeps placement
//! exact at sub-metre scale.

use crate::{CoreError, CoreResult};

/// Mean Earth radius in metres, shared by all great-circle math.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A WGS-84 geographic coordinate — `(longitude, latitude)` in degrees,
/// matching the wire order of GeoJSON and the routing service.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// `true` when both components are finite numbers.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.lon.is_finite() && self.lat.is_finite()
    }

    /// Haversine great-circle distance in metres over a spherical Earth.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidCoordinate`] if either endpoint has a non-finite
    /// component.  No other validation is performed.
    pub fn distance_m(self, other: GeoPoint) -> CoreResult<f64> {
        for p in [self, other] {
            if !p.is_finite() {
                return Err(CoreError::InvalidCoordinate { lon: p.lon, lat: p.lat });
            }
        }

        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        Ok(EARTH_RADIUS_M * c)
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lon, self.lat)
    }
}

// ── GeoBounds ─────────────────────────────────────────────────────────────────

/// An axis-aligned longitude/latitude box, grown point by point.
///
/// Mirrors the bounds object map libraries accept for their fit-to-bounds
/// camera operation: seed it with one point and `extend` with the rest.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoBounds {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl GeoBounds {
    /// The degenerate box containing exactly `p`.
    pub fn around(p: GeoPoint) -> Self {
        Self {
            min_lon: p.lon,
            min_lat: p.lat,
            max_lon: p.lon,
            max_lat: p.lat,
        }
    }

    /// Grow the box to include `p`.
    pub fn extend(&mut self, p: GeoPoint) {
        self.min_lon = self.min_lon.min(p.lon);
        self.min_lat = self.min_lat.min(p.lat);
        self.max_lon = self.max_lon.max(p.lon);
        self.max_lat = self.max_lat.max(p.lat);
    }

    /// Bounds of a whole coordinate sequence, or `None` for an empty slice.
    pub fn from_points(points: &[GeoPoint]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bounds = Self::around(*first);
        for &p in rest {
            bounds.extend(p);
        }
        Some(bounds)
    }

    /// `true` when `p` lies inside or on the edge of the box.
    pub fn contains(&self, p: GeoPoint) -> bool {
        (self.min_lon..=self.max_lon).contains(&p.lon)
            && (self.min_lat..=self.max_lat).contains(&p.lat)
    }

    /// Geometric centre of the box.
    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            (self.min_lon + self.max_lon) * 0.5,
            (self.min_lat + self.max_lat) * 0.5,
        )
    }
}
