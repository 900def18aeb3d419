//! Catalog error type.

use thiserror::Error;
use wf_core::SlotId;

/// Errors produced by `wf-catalog`.  Both variants are programmer errors —
/// slot indices and slot kinds are fixed at construction time.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("{0} is out of range")]
    UnknownSlot(SlotId),

    #[error("{0} is a fixed route and cannot be resolved")]
    NotDynamic(SlotId),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
