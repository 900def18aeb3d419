//! Unit tests for the routing client.

#[cfg(test)]
mod parsing {
    use crate::RoutingError;
    use crate::osrm::parse_route_geometry;

    const TWO_POINT_BODY: &str = r#"{
        "code": "Ok",
        "routes": [
            {
                "geometry": {
                    "coordinates": [
                        [140.022, 35.857],
                        [140.02247, 35.85735]
                    ],
                    "type": "LineString"
                },
                "distance": 57.3,
                "duration": 41.2
            }
        ],
        "waypoints": []
    }"#;

    #[test]
    fn decodes_first_route_geometry() {
        let path = parse_route_geometry(TWO_POINT_BODY).unwrap();
        assert_eq!(path.len(), 2);
        assert_eq!(path[0].lon, 140.022);
        assert_eq!(path[1].lat, 35.85735);
    }

    #[test]
    fn zero_routes_is_no_route_found() {
        let body = r#"{"code": "Ok", "routes": []}"#;
        assert!(matches!(
            parse_route_geometry(body),
            Err(RoutingError::NoRouteFound)
        ));
    }

    #[test]
    fn missing_routes_key_is_no_route_found() {
        // Error replies omit the routes array entirely.
        let body = r#"{"code": "InvalidQuery", "message": "Query string malformed"}"#;
        assert!(matches!(
            parse_route_geometry(body),
            Err(RoutingError::NoRouteFound)
        ));
    }

    #[test]
    fn undecodable_body_is_bad_response() {
        assert!(matches!(
            parse_route_geometry("<html>gateway timeout</html>"),
            Err(RoutingError::BadResponse(_))
        ));
    }

    #[test]
    fn non_finite_geometry_is_bad_response() {
        let body = r#"{"routes": [{"geometry": {"coordinates": [[1e999, 35.0]]}}]}"#;
        assert!(matches!(
            parse_route_geometry(body),
            Err(RoutingError::BadResponse(_))
        ));
    }
}

#[cfg(test)]
mod requests {
    use wf_core::GeoPoint;

    use crate::{OsrmService, RoutingProfile};

    #[test]
    fn request_url_matches_route_v1_shape() {
        let service = OsrmService::with_base_url("https://osrm.example/").unwrap();
        let url = service.request_url(
            GeoPoint::new(140.022, 35.857),
            GeoPoint::new(140.02247, 35.85735),
            RoutingProfile::Foot,
        );
        assert_eq!(
            url,
            "https://osrm.example/route/v1/foot/140.022,35.857;140.02247,35.85735\
             ?overview=full&geometries=geojson"
        );
    }

    #[test]
    fn profile_segments() {
        assert_eq!(RoutingProfile::Foot.as_str(), "foot");
        assert_eq!(RoutingProfile::Bike.as_str(), "bike");
        assert_eq!(RoutingProfile::Car.as_str(), "car");
        assert_eq!(RoutingProfile::default(), RoutingProfile::Foot);
    }
}

#[cfg(test)]
mod trait_objects {
    use std::sync::Arc;

    use wf_core::GeoPoint;

    use crate::{RoutingProfile, RoutingResult, RoutingService};

    struct StraightLine;

    impl RoutingService for StraightLine {
        fn route(
            &self,
            origin: GeoPoint,
            destination: GeoPoint,
            _profile: RoutingProfile,
        ) -> RoutingResult<Vec<GeoPoint>> {
            Ok(vec![origin, destination])
        }
    }

    #[test]
    fn services_are_object_safe() {
        let service: Arc<dyn RoutingService> = Arc::new(StraightLine);
        let path = service
            .route(
                GeoPoint::new(140.0, 35.0),
                GeoPoint::new(140.1, 35.1),
                RoutingProfile::Foot,
            )
            .unwrap();
        assert_eq!(path.len(), 2);
    }
}
