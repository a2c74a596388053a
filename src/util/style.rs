//! Fixed display colors and class names for entity values.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

use crate::net::types::{Priority, ProjectStatus, Role};

pub const GREEN: &str = "#28a745";
pub const BLUE: &str = "#007bff";
pub const YELLOW: &str = "#ffc107";
pub const RED: &str = "#dc3545";
pub const GRAY: &str = "#6c757d";

pub fn project_status_color(status: &ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Active => GREEN,
        ProjectStatus::Completed => BLUE,
        ProjectStatus::OnHold => YELLOW,
        ProjectStatus::Cancelled => RED,
        ProjectStatus::Other(_) => GRAY,
    }
}

pub fn role_badge_color(role: &Role) -> &'static str {
    match role {
        Role::Admin => BLUE,
        Role::Member | Role::Other(_) => GRAY,
    }
}

/// Role with its first letter upper-cased (`admin` -> `Admin`).
pub fn role_label(role: &Role) -> String {
    let raw = role.as_str();
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `(label, color)` for a user's active flag.
pub fn activity_status(is_active: bool) -> (&'static str, &'static str) {
    if is_active { ("Active", GREEN) } else { ("Inactive", RED) }
}

/// Class list for one task item, keyed by lower-cased priority.
pub fn task_item_class(priority: &Priority) -> String {
    format!("task-item {}-priority", priority.as_str().to_lowercase())
}
