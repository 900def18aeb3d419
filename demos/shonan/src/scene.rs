//! Venue data — camera poses, routes, destinations, and parking lots.
//!
//! All coordinates are the real Michi-no-Eki Shonan geometry the overlay
//! was built for: two surveyed walking routes between the buildings, two
//! live-origin destinations, and the P1–P4 parking areas.

use wf_catalog::{RouteCatalog, RouteSlot};
use wf_core::GeoPoint;
use wf_overlay::{CameraPose, MapCanvas, PolygonStyle};

// ── Camera ────────────────────────────────────────────────────────────────────

/// Wide view of Japan shown before the initial fly-in.
pub const DEFAULT_POSE: CameraPose = CameraPose {
    center: GeoPoint { lon: 137.726, lat: 36.2048 },
    zoom: 4.0,
    pitch: 0.0,
};

/// Tilted close-up over the venue.
pub const VENUE_POSE: CameraPose = CameraPose {
    center: GeoPoint { lon: 140.02295862179918, lat: 35.85767560509979 },
    zoom: 18.0,
    pitch: 60.0,
};

/// Where the demo "GPS" stands: the south-west corner of the grounds.
pub const DEMO_START: GeoPoint = GeoPoint { lon: 140.02200, lat: 35.85700 };

// ── Destinations ──────────────────────────────────────────────────────────────

/// Entrance of the tent building.
pub const TENT_ENTRANCE: GeoPoint = GeoPoint {
    lon: 140.02247036374916,
    lat: 35.857351475012855,
};

/// Entrance of the tsubasa building.
pub const TSUBASA_ENTRANCE: GeoPoint = GeoPoint {
    lon: 140.0232989863063,
    lat: 35.8576449377277,
};

// ── Routes ────────────────────────────────────────────────────────────────────

/// Slots 0 and 1 are the surveyed walking routes; 2 and 3 are resolved live
/// from the visitor's position.
pub fn route_catalog() -> RouteCatalog {
    RouteCatalog::new(vec![
        RouteSlot::fixed(vec![
            GeoPoint::new(140.02247036374916, 35.857351475012855),
            GeoPoint::new(140.02249263591895, 35.85734696883766),
            GeoPoint::new(140.0229420793391, 35.85764094599428),
            GeoPoint::new(140.02314815712387, 35.85775912092171),
        ]),
        RouteSlot::fixed(vec![
            GeoPoint::new(140.02247036374916, 35.857351475012855),
            GeoPoint::new(140.02249263591895, 35.85734696883766),
            GeoPoint::new(140.0229420793391, 35.85764094599428),
            GeoPoint::new(140.02298434465897, 35.857605347669946),
            GeoPoint::new(140.02307848872718, 35.85759777135079),
            GeoPoint::new(140.0232989863063, 35.8576449377277),
        ]),
        RouteSlot::to_destination(TENT_ENTRANCE),
        RouteSlot::to_destination(TSUBASA_ENTRANCE),
    ])
}

// ── Parking lots ──────────────────────────────────────────────────────────────

const AREA_STYLE: PolygonStyle = PolygonStyle {
    fill_color: "#4de7ff",
    fill_opacity: 0.6,
    line_color: "#4de7ff",
    line_width_px: 2.0,
};

struct ParkingLot {
    id: &'static str,
    name: &'static str,
    ring: &'static [GeoPoint],
}

const PARKING_LOTS: [ParkingLot; 4] = [
    ParkingLot {
        id: "p1-parking",
        name: "P1",
        ring: &[
            GeoPoint { lon: 140.02305617165973, lat: 35.856743052557476 },
            GeoPoint { lon: 140.02308, lat: 35.85672 },
            GeoPoint { lon: 140.02312, lat: 35.85670 },
            GeoPoint { lon: 140.02316, lat: 35.85669 },
            GeoPoint { lon: 140.02321710418968, lat: 35.856664792558526 },
            GeoPoint { lon: 140.0233284158564, lat: 35.85674033519591 },
            GeoPoint { lon: 140.0234310103444, lat: 35.856639792820964 },
            GeoPoint { lon: 140.0234886778473, lat: 35.856685987983184 },
            GeoPoint { lon: 140.0236690564004, lat: 35.85709196077594 },
            GeoPoint { lon: 140.0233879791333, lat: 35.85731145510835 },
            GeoPoint { lon: 140.02321735688187, lat: 35.85728768726051 },
            GeoPoint { lon: 140.02312138186545, lat: 35.857205580094956 },
            GeoPoint { lon: 140.0230680624119, lat: 35.857085660266144 },
            GeoPoint { lon: 140.02307072838457, lat: 35.85699707072654 },
            GeoPoint { lon: 140.02305617165973, lat: 35.856743052557476 },
        ],
    },
    ParkingLot {
        id: "p2-parking",
        name: "P2",
        ring: &[
            GeoPoint { lon: 140.0238679411788, lat: 35.85816527674272 },
            GeoPoint { lon: 140.02378092433892, lat: 35.8579013131723 },
            GeoPoint { lon: 140.02361766417113, lat: 35.85761249706043 },
            GeoPoint { lon: 140.02377346574247, lat: 35.857562793717356 },
            GeoPoint { lon: 140.02389114567345, lat: 35.85778847351408 },
            GeoPoint { lon: 140.02399390841606, lat: 35.858137738600746 },
            GeoPoint { lon: 140.0238679411788, lat: 35.85816527674272 },
        ],
    },
    ParkingLot {
        id: "p3-parking",
        name: "P3",
        ring: &[
            GeoPoint { lon: 140.0223750940883, lat: 35.8571513654375 },
            GeoPoint { lon: 140.0223337483892, lat: 35.85680908559884 },
            GeoPoint { lon: 140.02284466309908, lat: 35.85676600131863 },
            GeoPoint { lon: 140.02288305553392, lat: 35.85710349422029 },
            GeoPoint { lon: 140.0228, lat: 35.85708 },
            GeoPoint { lon: 140.0227, lat: 35.85707 },
            GeoPoint { lon: 140.0226, lat: 35.85706 },
            GeoPoint { lon: 140.0225, lat: 35.85707 },
            GeoPoint { lon: 140.02242, lat: 35.85708 },
            GeoPoint { lon: 140.0223750940883, lat: 35.8571513654375 },
        ],
    },
    ParkingLot {
        id: "p4-parking",
        name: "P4",
        ring: &[
            GeoPoint { lon: 140.02076970136977, lat: 35.85759140447969 },
            GeoPoint { lon: 140.02065134225222, lat: 35.85663574704727 },
            GeoPoint { lon: 140.02101311915393, lat: 35.856604977582506 },
            GeoPoint { lon: 140.02124537099203, lat: 35.85660135764468 },
            GeoPoint { lon: 140.02148432240244, lat: 35.85666832646754 },
            GeoPoint { lon: 140.02205825247853, lat: 35.856809503799035 },
            GeoPoint { lon: 140.02211408224733, lat: 35.85719140532485 },
            GeoPoint { lon: 140.02147315650174, lat: 35.85745022853573 },
            GeoPoint { lon: 140.0210756485027, lat: 35.85756787517369 },
        ],
    },
];

/// Draw the P1–P4 areas.  They stay on the canvas for the whole session;
/// nothing in the route lifecycle touches them.
pub fn draw_parking_lots(canvas: &mut impl MapCanvas) {
    for lot in &PARKING_LOTS {
        canvas.draw_polygon(lot.id, lot.ring, AREA_STYLE, Some(lot.name));
    }
}
