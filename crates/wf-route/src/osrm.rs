//! Blocking client for an OSRM-compatible `route/v1` endpoint.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;

use wf_core::GeoPoint;

use crate::{RoutingError, RoutingProfile, RoutingResult, RoutingService};

/// Public OSRM demo endpoint, used when no base URL is configured.
pub const PUBLIC_OSRM_URL: &str = "https://router.project-osrm.org";

/// Transport-level ceiling for one routing request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

// ── Response body ─────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RouteResponse {
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Deserialize)]
struct OsrmRoute {
    geometry: OsrmGeometry,
}

#[derive(Deserialize)]
struct OsrmGeometry {
    /// `[lon, lat]` pairs — GeoJSON order.
    coordinates: Vec<[f64; 2]>,
}

// ── OsrmService ───────────────────────────────────────────────────────────────

/// HTTP routing client requesting full path geometry as GeoJSON
/// (`overview=full&geometries=geojson`).
pub struct OsrmService {
    base_url: String,
    client: Client,
}

impl OsrmService {
    /// Client against the public demo server.
    pub fn new() -> RoutingResult<Self> {
        Self::with_base_url(PUBLIC_OSRM_URL)
    }

    /// Client against a self-hosted OSRM instance.
    pub fn with_base_url(base_url: impl Into<String>) -> RoutingResult<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            client,
        })
    }

    pub(crate) fn request_url(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
        profile: RoutingProfile,
    ) -> String {
        format!(
            "{}/route/v1/{}/{},{};{},{}?overview=full&geometries=geojson",
            self.base_url,
            profile.as_str(),
            origin.lon,
            origin.lat,
            destination.lon,
            destination.lat,
        )
    }
}

impl RoutingService for OsrmService {
    fn route(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
        profile: RoutingProfile,
    ) -> RoutingResult<Vec<GeoPoint>> {
        let url = self.request_url(origin, destination, profile);
        log::debug!("routing request: {url}");

        let body = self.client.get(&url).send()?.error_for_status()?.text()?;
        parse_route_geometry(&body)
    }
}

/// Decode a response body into the first route's path geometry.
pub(crate) fn parse_route_geometry(body: &str) -> RoutingResult<Vec<GeoPoint>> {
    let response: RouteResponse =
        serde_json::from_str(body).map_err(|e| RoutingError::BadResponse(e.to_string()))?;

    let route = response
        .routes
        .into_iter()
        .next()
        .ok_or(RoutingError::NoRouteFound)?;

    let path: Vec<GeoPoint> = route
        .geometry
        .coordinates
        .iter()
        .map(|&[lon, lat]| GeoPoint::new(lon, lat))
        .collect();

    if path.iter().any(|p| !p.is_finite()) {
        return Err(RoutingError::BadResponse(
            "non-finite coordinate in geometry".to_owned(),
        ));
    }
    Ok(path)
}
