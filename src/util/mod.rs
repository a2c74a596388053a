//! Utility helpers shared across components and pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! `format` and `style` are pure and testable natively; `notify` owns the one
//! browser timer the UI needs.

pub mod format;
pub mod notify;
pub mod style;
