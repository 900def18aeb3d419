//! `wf-overlay` — visual artifact lifecycle for the active route.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                 |
//! |-------------|----------------------------------------------------------|
//! | [`canvas`]  | `MapCanvas` trait — the map rendering collaborator seam  |
//! | [`camera`]  | `CameraPose`, `FlightPlan`, `FitOptions`, `Viewport`     |
//! | [`overlay`] | `Overlay` — draw/label/frame one route, remove it again  |
//!
//! The crate never talks to a real map library; applications implement
//! [`MapCanvas`] over whichever renderer they embed and hand it to
//! [`Overlay`].

pub mod camera;
pub mod canvas;
pub mod overlay;


pub use camera::{CameraPose, FitOptions, FlightPlan, Viewport};
pub use canvas::{LineStyle, MapCanvas, PolygonStyle};
pub use overlay::Overlay;
