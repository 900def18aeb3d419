//! `wf-select` — the selection controller and its event loop.
//!
//! # One channel, one thread
//!
//! ```text
//! UI toggles        ──┐
//! location watch    ──┼──► crossbeam channel ──► SelectionController::run
//! resolver workers  ──┘      (strict arrival order, one event at a time)
//! ```
//!
//! Every mutable piece of map and route state is owned by the controller
//! and touched only while it handles one event, so exclusivity and
//! re-entrancy come from the structure rather than from locks.
//!
//! # Crate layout
//!
//! | Module         | Contents                                            |
//! |----------------|-----------------------------------------------------|
//! | [`event`]      | `Event` — everything the controller reacts to       |
//! | [`state`]      | `SelectionState`, `RouteToken`                      |
//! | [`controller`] | `SelectionController`                               |
//! | [`observer`]   | `SelectionObserver`, `NoopObserver`                 |
//! | [`error`]      | `SelectError`, `SelectResult<T>`                    |

pub mod controller;
pub mod error;
pub mod event;
pub mod observer;
pub mod state;

#[cfg(test)]
mod tests;

pub use controller::SelectionController;
pub use error::{SelectError, SelectResult};
pub use event::Event;
pub use observer::{NoopObserver, SelectionObserver};
pub use state::{RouteToken, SelectionState};
