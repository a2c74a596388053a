//! Client-side application state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here is plain data with no DOM access. `App` wraps the pieces in
//! `RwSignal`s and provides them through context; components read and update
//! them from event handlers and `spawn_local` tasks.

pub mod board;
pub mod collection;
pub mod dashboard;
pub mod loader;
pub mod login_modal;
pub mod notice;
pub mod projects;
pub mod section;
pub mod session;
