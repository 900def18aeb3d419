//! Controller error type.

use thiserror::Error;

use wf_catalog::CatalogError;
use wf_core::CoreError;

/// Errors that escape the selection controller.
///
/// Only programmer errors land here — bad slot indices, malformed catalog
/// geometry.  Recoverable failures (routing, location) are absorbed where
/// they happen: the affected toggle reverts, a warning goes to the log and
/// the observer, and the loop keeps running.
#[derive(Debug, Error)]
pub enum SelectError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type SelectResult<T> = Result<T, SelectError>;
