//! Users section: the users table.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::user_row::UserRow;
use crate::net::types::User;
use crate::state::collection::{ListBody, LoadState};
use crate::state::loader::USER_TEXTS;

pub fn users_body(state: &LoadState<Vec<User>>) -> ListBody<User> {
    ListBody::from_load(state, USER_TEXTS)
}

#[component]
pub fn UsersSection(state: LoadState<Vec<User>>) -> impl IntoView {
    let rows = match users_body(&state) {
        ListBody::Placeholder(text) => view! {
            <tr>
                <td colspan="6" class="no-data">{text}</td>
            </tr>
        }
        .into_any(),
        ListBody::Items(users) => users
            .into_iter()
            .map(|user| view! { <UserRow user=user/> })
            .collect_view()
            .into_any(),
    };

    view! {
        <h2>"Users"</h2>
        <div class="users-table">
            <table>
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Role"</th>
                        <th>"Status"</th>
                        <th>"Last Login"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
}
