//! The `RouteCatalog` — owned store of all route slots.

use wf_core::{GeoPoint, SlotId};

use crate::{CatalogError, CatalogResult, RouteSlot, palette};

/// Index-addressed store of every selectable route.
///
/// The catalog owns geometry and resolution state only.  Which slot is
/// currently displayed is selection state and lives in the controller,
/// which is also the catalog's sole writer.
pub struct RouteCatalog {
    slots: Vec<RouteSlot>,
}

impl RouteCatalog {
    pub fn new(slots: Vec<RouteSlot>) -> Self {
        Self { slots }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterate `(SlotId, &RouteSlot)` in index order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &RouteSlot)> {
        self.slots
            .iter()
            .enumerate()
            .map(|(i, slot)| (SlotId(i as u16), slot))
    }

    /// The slot at `slot`.
    ///
    /// # Errors
    ///
    /// [`CatalogError::UnknownSlot`] when the index is out of range.
    pub fn get(&self, slot: SlotId) -> CatalogResult<&RouteSlot> {
        self.slots
            .get(slot.index())
            .ok_or(CatalogError::UnknownSlot(slot))
    }

    /// Store a fresh resolution into a dynamic slot, overwriting any
    /// previous path.  Live-origin routes are re-resolved on every
    /// activation because the origin may have moved since the last one.
    ///
    /// # Errors
    ///
    /// [`CatalogError::UnknownSlot`] for an out-of-range index,
    /// [`CatalogError::NotDynamic`] when targeting a fixed slot.
    pub fn resolve(&mut self, slot: SlotId, coords: Vec<GeoPoint>) -> CatalogResult<()> {
        match self.slots.get_mut(slot.index()) {
            None => Err(CatalogError::UnknownSlot(slot)),
            Some(RouteSlot::Fixed(_)) => Err(CatalogError::NotDynamic(slot)),
            Some(RouteSlot::ToDestination { path, .. }) => {
                *path = Some(coords);
                Ok(())
            }
        }
    }

    /// `true` once `slot` has drawable geometry — always for fixed slots,
    /// for dynamic slots only after at least one successful [`resolve`].
    ///
    /// [`resolve`]: RouteCatalog::resolve
    pub fn is_resolved(&self, slot: SlotId) -> CatalogResult<bool> {
        Ok(self.get(slot)?.coordinates().is_some())
    }

    /// Palette color assigned to `slot`.
    pub fn color_of(&self, slot: SlotId) -> &'static str {
        palette::color_for(slot.index())
    }
}
