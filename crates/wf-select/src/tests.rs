//! Controller tests — the full state machine over a recording canvas, a
//! stub routing service, and hand-fed events.

#[cfg(test)]
mod controller {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;
    use std::time::Duration;

    use crossbeam_channel::{Receiver, unbounded};

    use wf_catalog::{RouteCatalog, RouteSlot};
    use wf_core::{GeoBounds, GeoPoint, SlotId};
    use wf_location::LocationSample;
    use wf_overlay::{
        CameraPose, FitOptions, FlightPlan, LineStyle, MapCanvas, Overlay, PolygonStyle, Viewport,
    };
    use wf_route::{RoutingError, RoutingProfile, RoutingResult, RoutingService};

    use crate::{Event, SelectError, SelectionController, SelectionObserver, SelectionState};

    const RECV_WAIT: Duration = Duration::from_secs(2);

    /// End-to-end scenario: origin a short walk south-west of the
    /// destination, with a detour path of roughly 290 m.
    const ORIGIN: GeoPoint = GeoPoint { lon: 140.02200, lat: 35.85700 };
    const DESTINATION: GeoPoint = GeoPoint { lon: 140.02247, lat: 35.85735 };

    fn resolved_path() -> Vec<GeoPoint> {
        vec![
            ORIGIN,
            GeoPoint::new(140.02200, 35.85830),
            GeoPoint::new(140.02247, 35.85830),
            DESTINATION,
        ]
    }

    // ── Fixtures ──────────────────────────────────────────────────────────

    #[derive(Default)]
    struct RecordingCanvas {
        ops: Vec<String>,
        labels: Vec<(String, GeoPoint, String)>,
        fits: Vec<GeoBounds>,
        flights: usize,
        markers: Vec<GeoPoint>,
    }

    impl MapCanvas for RecordingCanvas {
        fn draw_line(&mut self, id: &str, path: &[GeoPoint], style: LineStyle) {
            self.ops.push(format!("draw_line {id} {} {}", style.color, path.len()));
        }

        fn remove_line(&mut self, id: &str) {
            self.ops.push(format!("remove_line {id}"));
        }

        fn place_label(&mut self, id: &str, at: GeoPoint, html: &str) {
            self.ops.push(format!("place_label {id}"));
            self.labels.push((id.to_owned(), at, html.to_owned()));
        }

        fn remove_label(&mut self, id: &str) {
            self.ops.push(format!("remove_label {id}"));
        }

        fn place_marker(&mut self, id: &str, at: GeoPoint) {
            self.ops.push(format!("place_marker {id}"));
            self.markers.push(at);
        }

        fn remove_marker(&mut self, id: &str) {
            self.ops.push(format!("remove_marker {id}"));
        }

        fn draw_polygon(
            &mut self,
            id: &str,
            _ring: &[GeoPoint],
            _style: PolygonStyle,
            _name: Option<&str>,
        ) {
            self.ops.push(format!("draw_polygon {id}"));
        }

        fn fly_to(&mut self, _pose: CameraPose, _flight: FlightPlan) {
            self.ops.push("fly_to".to_owned());
            self.flights += 1;
        }

        fn fit_bounds(&mut self, bounds: GeoBounds, _fit: FitOptions) {
            self.ops.push("fit_bounds".to_owned());
            self.fits.push(bounds);
        }

        fn viewport(&self) -> Viewport {
            Viewport {
                center: GeoPoint::new(137.726, 36.2048),
                zoom: 4.0,
            }
        }
    }

    enum Behavior {
        Path(Vec<GeoPoint>),
        NoRoute,
    }

    struct StubService {
        behavior: Behavior,
        calls: Arc<AtomicUsize>,
    }

    impl RoutingService for StubService {
        fn route(
            &self,
            _origin: GeoPoint,
            _destination: GeoPoint,
            _profile: RoutingProfile,
        ) -> RoutingResult<Vec<GeoPoint>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.behavior {
                Behavior::Path(path) => Ok(path.clone()),
                Behavior::NoRoute => Err(RoutingError::NoRouteFound),
            }
        }
    }

    #[derive(Clone, Default)]
    struct LogObserver(Rc<RefCell<Vec<String>>>);

    impl SelectionObserver for LogObserver {
        fn on_toggle_cleared(&mut self, slot: SlotId) {
            self.0.borrow_mut().push(format!("cleared {slot}"));
        }

        fn on_route_shown(&mut self, slot: SlotId, estimate: &wf_core::TravelEstimate) {
            self.0.borrow_mut().push(format!("shown {slot} {}", estimate.label()));
        }

        fn on_route_hidden(&mut self, slot: SlotId) {
            self.0.borrow_mut().push(format!("hidden {slot}"));
        }

        fn on_warning(&mut self, message: &str) {
            self.0.borrow_mut().push(format!("warn {message}"));
        }
    }

    struct Harness {
        controller: SelectionController<RecordingCanvas, LogObserver>,
        rx: Receiver<Event>,
        log: Rc<RefCell<Vec<String>>>,
        calls: Arc<AtomicUsize>,
    }

    impl Harness {
        fn new(behavior: Behavior) -> Self {
            let catalog = RouteCatalog::new(vec![
                RouteSlot::fixed(vec![
                    GeoPoint::new(140.02247, 35.85735),
                    GeoPoint::new(140.02294, 35.85764),
                    GeoPoint::new(140.02315, 35.85776),
                ]),
                RouteSlot::fixed(vec![
                    GeoPoint::new(140.02247, 35.85735),
                    GeoPoint::new(140.02330, 35.85764),
                ]),
                RouteSlot::to_destination(DESTINATION),
            ]);

            let home = CameraPose {
                center: GeoPoint::new(140.022959, 35.857676),
                zoom: 18.0,
                pitch: 60.0,
            };

            let calls = Arc::new(AtomicUsize::new(0));
            let service = Arc::new(StubService {
                behavior,
                calls: Arc::clone(&calls),
            });

            let log = Rc::new(RefCell::new(Vec::new()));
            let (tx, rx) = unbounded();
            let controller = SelectionController::new(
                catalog,
                Overlay::new(RecordingCanvas::default(), home),
                service,
                RoutingProfile::Foot,
                tx,
                LogObserver(Rc::clone(&log)),
            );

            Self { controller, rx, log, calls }
        }

        fn handle(&mut self, event: Event) {
            self.controller.handle(event).unwrap();
        }

        /// Receive one worker completion from the channel and apply it.
        fn pump_resolved(&mut self) {
            let event = self.rx.recv_timeout(RECV_WAIT).expect("no resolver event");
            assert!(matches!(event, Event::RouteResolved { .. }));
            self.controller.handle(event).unwrap();
        }

        fn ops(&self) -> Vec<String> {
            self.controller.overlay().canvas().ops.clone()
        }

        fn log(&self) -> Vec<String> {
            self.log.borrow().clone()
        }
    }

    fn fix_at(point: GeoPoint) -> Event {
        Event::Location(LocationSample::new(point))
    }

    // ── Fixed routes ──────────────────────────────────────────────────────

    #[test]
    fn fixed_route_activates_immediately() {
        let mut h = Harness::new(Behavior::NoRoute);
        h.handle(Event::ToggleOn(SlotId(0)));

        assert_eq!(h.controller.state(), SelectionState::Active(SlotId(0)));
        assert!(h.ops().contains(&"draw_line route-line-0 #b3b3ff 3".to_owned()));
        assert!(h.log()[0].starts_with("shown SlotId(0)"));
    }

    #[test]
    fn activating_b_fully_removes_a_first() {
        let mut h = Harness::new(Behavior::NoRoute);
        h.handle(Event::ToggleOn(SlotId(0)));
        h.handle(Event::ToggleOn(SlotId(1)));

        let ops = h.ops();
        let removed_line = ops.iter().position(|o| o == "remove_line route-line-0").unwrap();
        let removed_label = ops.iter().position(|o| o == "remove_label route-popup-0").unwrap();
        let drawn_b = ops.iter().position(|o| o.starts_with("draw_line route-line-1")).unwrap();
        assert!(removed_line < drawn_b && removed_label < drawn_b);

        assert_eq!(h.controller.state(), SelectionState::Active(SlotId(1)));
        assert!(h.log().contains(&"cleared SlotId(0)".to_owned()));
    }

    #[test]
    fn toggle_off_returns_to_idle() {
        let mut h = Harness::new(Behavior::NoRoute);
        h.handle(Event::ToggleOn(SlotId(0)));
        h.handle(Event::ToggleOff(SlotId(0)));

        assert!(h.controller.state().is_idle());
        assert!(h.ops().contains(&"remove_line route-line-0".to_owned()));
        // Fixed routes never touch the camera.
        assert_eq!(h.controller.overlay().canvas().flights, 0);
    }

    #[test]
    fn toggle_off_for_an_inactive_slot_is_a_noop() {
        let mut h = Harness::new(Behavior::NoRoute);
        h.handle(Event::ToggleOn(SlotId(0)));
        h.handle(Event::ToggleOff(SlotId(1)));
        assert_eq!(h.controller.state(), SelectionState::Active(SlotId(0)));
    }

    #[test]
    fn unknown_slot_is_a_programmer_error() {
        let mut h = Harness::new(Behavior::NoRoute);
        let err = h.controller.handle(Event::ToggleOn(SlotId(9))).unwrap_err();
        assert!(matches!(err, SelectError::Catalog(_)));
    }

    // ── Dynamic routes ────────────────────────────────────────────────────

    #[test]
    fn dynamic_without_a_fix_reverts_the_toggle() {
        let mut h = Harness::new(Behavior::Path(resolved_path()));
        h.handle(Event::ToggleOn(SlotId(2)));

        assert!(h.controller.state().is_idle());
        assert_eq!(h.calls.load(Ordering::SeqCst), 0);
        let log = h.log();
        assert!(log.contains(&"warn location unavailable".to_owned()));
        assert!(log.contains(&"cleared SlotId(2)".to_owned()));
    }

    #[test]
    fn dynamic_route_resolves_labels_and_frames() {
        let mut h = Harness::new(Behavior::Path(resolved_path()));
        h.handle(fix_at(ORIGIN));
        h.handle(Event::ToggleOn(SlotId(2)));
        assert_eq!(h.controller.state().resolving_slot(), Some(SlotId(2)));

        h.pump_resolved();
        assert_eq!(h.controller.state(), SelectionState::Active(SlotId(2)));
        assert!(h.controller.catalog().is_resolved(SlotId(2)).unwrap());

        // ~290 m on foot: round(290/80) = 4 minutes, round(290/250) = 1.
        let (_, _, html) = &h.controller.overlay().canvas().labels[0];
        assert!(html.contains("Walk ~4 min"), "label was {html}");
        assert!(html.contains("Bike ~1 min"), "label was {html}");

        // The fitted bounds cover the whole path, origin and destination
        // included.
        let bounds = h.controller.overlay().canvas().fits[0];
        assert!(bounds.contains(ORIGIN));
        assert!(bounds.contains(DESTINATION));
    }

    #[test]
    fn stale_resolution_after_toggle_off_is_discarded() {
        let mut h = Harness::new(Behavior::Path(resolved_path()));
        h.handle(fix_at(ORIGIN));
        h.handle(Event::ToggleOn(SlotId(2)));
        h.handle(Event::ToggleOff(SlotId(2)));
        assert!(h.controller.state().is_idle());

        h.pump_resolved();
        assert!(h.controller.state().is_idle());
        assert!(!h.ops().iter().any(|o| o.starts_with("draw_line route-line-2")));
        assert!(!h.controller.catalog().is_resolved(SlotId(2)).unwrap());
    }

    #[test]
    fn stale_resolution_after_switching_slots_is_discarded() {
        let mut h = Harness::new(Behavior::Path(resolved_path()));
        h.handle(fix_at(ORIGIN));
        h.handle(Event::ToggleOn(SlotId(2)));
        h.handle(Event::ToggleOn(SlotId(0)));
        assert_eq!(h.controller.state(), SelectionState::Active(SlotId(0)));
        assert!(h.log().contains(&"cleared SlotId(2)".to_owned()));

        h.pump_resolved();
        assert_eq!(h.controller.state(), SelectionState::Active(SlotId(0)));
        assert!(!h.ops().iter().any(|o| o.starts_with("draw_line route-line-2")));
    }

    #[test]
    fn second_toggle_on_while_resolving_is_single_flight() {
        let mut h = Harness::new(Behavior::Path(resolved_path()));
        h.handle(fix_at(ORIGIN));
        h.handle(Event::ToggleOn(SlotId(2)));
        let pending = h.controller.state();
        h.handle(Event::ToggleOn(SlotId(2)));
        assert_eq!(h.controller.state(), pending);

        h.pump_resolved();
        assert_eq!(h.controller.state(), SelectionState::Active(SlotId(2)));
        assert_eq!(h.calls.load(Ordering::SeqCst), 1);

        // No second completion may be queued.
        thread::sleep(Duration::from_millis(100));
        assert!(h.rx.try_recv().is_err());
    }

    #[test]
    fn failed_resolution_reverts_toggle_and_warns() {
        let mut h = Harness::new(Behavior::NoRoute);
        h.handle(fix_at(ORIGIN));
        h.handle(Event::ToggleOn(SlotId(2)));
        h.pump_resolved();

        assert!(h.controller.state().is_idle());
        assert!(!h.ops().iter().any(|o| o.starts_with("draw_line route-line-2")));
        let log = h.log();
        assert!(log.contains(&"cleared SlotId(2)".to_owned()));
        assert!(log.iter().any(|l| l.starts_with("warn ")));
    }

    #[test]
    fn hiding_the_dynamic_route_restores_home_framing() {
        let mut h = Harness::new(Behavior::Path(resolved_path()));
        h.handle(fix_at(ORIGIN));
        h.handle(Event::ToggleOn(SlotId(2)));
        h.pump_resolved();
        assert_eq!(h.controller.overlay().canvas().flights, 0);

        h.handle(Event::ToggleOff(SlotId(2)));
        assert!(h.controller.state().is_idle());
        assert_eq!(h.controller.overlay().canvas().flights, 1);
    }

    // ── Location stream ───────────────────────────────────────────────────

    #[test]
    fn newest_fix_wins_and_moves_the_marker() {
        let a = GeoPoint::new(140.02200, 35.85700);
        let b = GeoPoint::new(140.02210, 35.85710);

        let mut h = Harness::new(Behavior::NoRoute);
        h.handle(fix_at(a));
        h.handle(fix_at(b));

        assert_eq!(h.controller.last_fix().unwrap().point, b);
        let markers = &h.controller.overlay().canvas().markers;
        assert_eq!(markers.len(), 2);
        assert_eq!(markers[1], b);
    }

    #[test]
    fn location_failures_are_nonfatal() {
        let mut h = Harness::new(Behavior::NoRoute);
        h.handle(Event::LocationFailed(wf_location::LocationError::Timeout));
        h.handle(Event::ToggleOn(SlotId(0)));
        assert_eq!(h.controller.state(), SelectionState::Active(SlotId(0)));
    }
}
