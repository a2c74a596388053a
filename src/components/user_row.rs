//! Row of the users table.

use leptos::prelude::*;

use crate::net::types::User;
use crate::util::format::{NEVER, date_or};
use crate::util::style::{activity_status, role_badge_color, role_label};

#[component]
pub fn UserRow(user: User) -> impl IntoView {
    let (status, status_color) = activity_status(user.is_active);
    let role_style = format!("background: {};", role_badge_color(&user.role));
    let last_login = date_or(user.last_login.as_deref(), NEVER);

    view! {
        <tr>
            <td>{user.full_name()}</td>
            <td>{user.email.clone()}</td>
            <td>
                <span class="role-badge" style=role_style>{role_label(&user.role)}</span>
            </td>
            <td>
                <span class="user-status" style=format!("color: {status_color};")>{status}</span>
            </td>
            <td>{last_login}</td>
            <td>
                <button class="btn btn-small" type="button">"Edit"</button>
            </td>
        </tr>
    }
}
