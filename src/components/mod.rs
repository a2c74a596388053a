//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the dashboard chrome and entity fragments, reading and
//! writing shared state from the context providers set up in `App`.

pub mod header;
pub mod login_modal;
pub mod nav;
pub mod project_card;
pub mod stat_card;
pub mod status_banner;
pub mod task_item;
pub mod user_row;
