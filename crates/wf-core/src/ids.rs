//! Typed index wrapper for catalog slots.
//!
//! Route slots are addressed by position in the catalog, so `SlotId` is a
//! thin index newtype rather than an opaque handle.  The inner integer is
//! `pub` to allow direct indexing via `id.0 as usize`, but callers should
//! prefer the `.index()` helper for clarity.

use std::fmt;

/// Index of a route slot in the catalog.
///
/// `u16` is generous — a route-toggle panel has single-digit entries.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotId(pub u16);

impl SlotId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SlotId({})", self.0)
    }
}

impl From<SlotId> for usize {
    #[inline(always)]
    fn from(id: SlotId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for SlotId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<SlotId, Self::Error> {
        u16::try_from(n).map(SlotId)
    }
}
