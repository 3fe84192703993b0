//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin runtime (main.rs) and the store/filter layers:
//!
//! ```text
//! Keystroke → Event → handle_event → AppState mutation → Actions → Side effects
//!                                         ↓
//!                              compute_viewmodel → render
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Input mode state machine
//! - [`state`]: Session state and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::InputMode;
pub use state::{AppState, VisibleRow};
