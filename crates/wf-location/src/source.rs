//! Geolocation collaborator seams.

use std::time::Duration;

use wf_core::GeoPoint;

use crate::{LocationError, LocationResult, LocationSample};

/// Options applied to every fix request of a watch.
///
/// These mirror the platform geolocation watch options: high-accuracy
/// positioning, a bounded wait per fix, and how stale a cached fix may be.
#[derive(Copy, Clone, Debug)]
pub struct WatchOptions {
    /// Request the most precise positioning the platform offers.
    pub high_accuracy: bool,

    /// Bounded wait for a single fix; exceeding it yields
    /// [`LocationError::Timeout`].
    pub timeout: Duration,

    /// Oldest acceptable cached fix.  Zero forces a fresh reading.
    pub maximum_age: Duration,
}

impl Default for WatchOptions {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout: Duration::from_secs(10),
            maximum_age: Duration::ZERO,
        }
    }
}

/// Blocking source of position fixes — the platform geolocation seam.
///
/// Implementations wrap whatever positioning backend the application has
/// (a GNSS daemon, a replayed trace, a fixed test position) behind one
/// bounded-wait call.
pub trait LocationSource: Send + 'static {
    /// Block until the next fix arrives or the bounded wait elapses.
    ///
    /// # Errors
    ///
    /// [`LocationError::Timeout`] after `options.timeout` without a fix;
    /// [`LocationError::PermissionDenied`] / [`LocationError::Unavailable`]
    /// for platform failures.  All errors are recoverable — the tracker
    /// reports them and keeps watching.
    fn next_fix(&mut self, options: &WatchOptions) -> LocationResult<GeoPoint>;
}

/// Callbacks invoked by the watch thread for each fix or sampling failure.
///
/// Both methods run on the watch thread; implementations forward into the
/// application's event channel rather than doing work in place.
pub trait LocationListener: Send + 'static {
    fn on_sample(&mut self, sample: LocationSample);

    fn on_error(&mut self, error: LocationError);
}
