//! Selection state machine data.

use wf_core::SlotId;

/// Identifier of one resolution request.
///
/// Tokens increase monotonically per controller.  A resolver result whose
/// token no longer matches the one recorded in the state answers a request
/// that has been superseded or abandoned, and must be discarded.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct RouteToken(pub u64);

/// Which slot, if any, currently owns the overlay.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum SelectionState {
    /// No route selected.
    #[default]
    Idle,

    /// `slot` is selected but waits on a resolver worker before it can be
    /// shown.
    Resolving { slot: SlotId, token: RouteToken },

    /// `slot`'s artifacts are on the canvas.
    Active(SlotId),
}

impl SelectionState {
    /// The displayed slot, when the state is `Active`.
    pub fn active_slot(&self) -> Option<SlotId> {
        match *self {
            SelectionState::Active(slot) => Some(slot),
            _ => None,
        }
    }

    /// The slot awaiting resolution, when the state is `Resolving`.
    pub fn resolving_slot(&self) -> Option<SlotId> {
        match *self {
            SelectionState::Resolving { slot, .. } => Some(slot),
            _ => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, SelectionState::Idle)
    }
}
