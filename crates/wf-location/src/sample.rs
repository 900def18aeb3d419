//! Position samples.

use std::time::{Duration, Instant};

use wf_core::GeoPoint;

/// One position fix from the geolocation collaborator.
///
/// Samples carry no history: each new fix supersedes the previous one, and
/// consumers keep at most the latest delivered sample.
#[derive(Copy, Clone, Debug)]
pub struct LocationSample {
    pub point: GeoPoint,

    /// When the fix was delivered to this process.
    pub taken_at: Instant,
}

impl LocationSample {
    /// A sample taken now.
    pub fn new(point: GeoPoint) -> Self {
        Self {
            point,
            taken_at: Instant::now(),
        }
    }

    /// Elapsed time since the fix was taken.
    pub fn age(&self) -> Duration {
        self.taken_at.elapsed()
    }
}
