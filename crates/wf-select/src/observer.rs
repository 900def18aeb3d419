//! Selection observer — UI feedback callbacks.

use wf_core::{SlotId, TravelEstimate};

/// Callbacks the controller invokes as routes come and go.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// [`on_toggle_cleared`] exists because the controller may un-set a toggle
/// the user switched on: when another slot displaces it, or when its
/// resolution fails, the affected control must be unchecked
/// programmatically.
///
/// [`on_toggle_cleared`]: SelectionObserver::on_toggle_cleared
pub trait SelectionObserver {
    /// `slot`'s toggle must be unchecked (displaced, failed, or reverted).
    fn on_toggle_cleared(&mut self, _slot: SlotId) {}

    /// `slot` is now displayed; `estimate` is what its label shows.
    fn on_route_shown(&mut self, _slot: SlotId, _estimate: &TravelEstimate) {}

    /// `slot`'s artifacts were removed.
    fn on_route_hidden(&mut self, _slot: SlotId) {}

    /// A recoverable failure worth surfacing outside the log.
    fn on_warning(&mut self, _message: &str) {}
}

/// A [`SelectionObserver`] that does nothing.
pub struct NoopObserver;

impl SelectionObserver for NoopObserver {}
