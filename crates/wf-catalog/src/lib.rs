//! `wf-catalog` — the route slot store.
//!
//! # Crate layout
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`slot`]    | `RouteSlot` — fixed or live-origin route              |
//! | [`catalog`] | `RouteCatalog` — index-addressed slot store           |
//! | [`palette`] | the fixed line-color palette                          |
//! | [`error`]   | `CatalogError`, `CatalogResult<T>`                    |

pub mod catalog;
pub mod error;
pub mod palette;
pub mod slot;


pub use catalog::RouteCatalog;
pub use error::{CatalogError, CatalogResult};
pub use palette::{ROUTE_PALETTE, color_for};
pub use slot::RouteSlot;
