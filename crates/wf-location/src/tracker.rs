//! `LocationTracker` — one cancellable continuous watch.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use crate::{LocationListener, LocationSample, LocationSource, WatchOptions};

/// Owns at most one active watch subscription over a [`LocationSource`].
///
/// [`start`] spawns a watch thread that delivers every fix to the listener;
/// starting again cancels the prior subscription first.  Cancellation is
/// advisory: a fix request already in flight completes its bounded wait
/// before the thread notices the flag and exits.
///
/// [`start`]: LocationTracker::start
pub struct LocationTracker {
    options: WatchOptions,
    watch: Option<Watch>,
}

struct Watch {
    cancelled: Arc<AtomicBool>,
}

impl LocationTracker {
    pub fn new(options: WatchOptions) -> Self {
        Self {
            options,
            watch: None,
        }
    }

    /// Begin continuous sampling, replacing any active subscription.
    ///
    /// Sampling failures are passed to `listener.on_error` and the watch
    /// keeps running; only [`stop`](LocationTracker::stop) ends it.
    pub fn start<S, L>(&mut self, mut source: S, mut listener: L)
    where
        S: LocationSource,
        L: LocationListener,
    {
        self.stop();

        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancelled);
        let options = self.options;

        thread::spawn(move || {
            while !flag.load(Ordering::Relaxed) {
                match source.next_fix(&options) {
                    Ok(point) => listener.on_sample(LocationSample::new(point)),
                    Err(err) => {
                        log::debug!("location sampling error (watch continues): {err}");
                        listener.on_error(err);
                    }
                }
            }
        });

        self.watch = Some(Watch { cancelled });
    }

    /// Cancel the active subscription.  No-op when nothing is running.
    pub fn stop(&mut self) {
        if let Some(watch) = self.watch.take() {
            watch.cancelled.store(true, Ordering::Relaxed);
        }
    }

    /// `true` while a subscription is active.
    pub fn is_watching(&self) -> bool {
        self.watch.is_some()
    }
}

impl Drop for LocationTracker {
    fn drop(&mut self) {
        self.stop();
    }
}
