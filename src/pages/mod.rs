//! Section views, one per top-level section.
//!
//! ARCHITECTURE
//! ============
//! Each section receives its `LoadState` from `App`, picks what to show with
//! a pure helper (tested natively), and delegates entity rendering to
//! `components`.

pub mod dashboard;
pub mod projects;
pub mod tasks;
pub mod users;
