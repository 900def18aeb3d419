//! Replayed GPS fixes with consumer-grade jitter.

use std::thread;
use std::time::Duration;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use wf_core::GeoPoint;
use wf_location::{LocationError, LocationSource, WatchOptions};

/// Roughly ±2 m of noise in degrees — what a phone standing still reports.
const JITTER_DEG: f64 = 0.00002;

/// A "visitor" standing at one spot, reporting a slightly different fix
/// every period.
pub struct JitteredSource {
    center: GeoPoint,
    period: Duration,
    rng: SmallRng,
}

impl JitteredSource {
    pub fn near(center: GeoPoint) -> Self {
        Self {
            center,
            period: Duration::from_millis(250),
            rng: SmallRng::seed_from_u64(7),
        }
    }
}

impl LocationSource for JitteredSource {
    fn next_fix(&mut self, _options: &WatchOptions) -> Result<GeoPoint, LocationError> {
        thread::sleep(self.period);
        Ok(GeoPoint::new(
            self.center.lon + self.rng.gen_range(-JITTER_DEG..JITTER_DEG),
            self.center.lat + self.rng.gen_range(-JITTER_DEG..JITTER_DEG),
        ))
    }
}
