//! Top bar: brand, section navigation, and the session controls.

use leptos::prelude::*;

use super::nav::SectionNav;
use crate::app::Navigator;
use crate::state::login_modal::{LoginModalState, logout};
use crate::state::notice::NoticeState;
use crate::state::session::SessionState;
use crate::util::notify::show_message;

#[component]
pub fn AppHeader(demo: bool) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let login_modal = expect_context::<RwSignal<LoginModalState>>();
    let nav = expect_context::<Navigator>();

    let on_login = move |_| login_modal.update(LoginModalState::show);
    let on_logout = move |_| {
        if let Some((text, kind)) = session.try_update(logout) {
            show_message(notices, text, kind);
            nav.reload();
        }
    };

    view! {
        <header class="header">
            <div class="header-content">
                <h1 class="logo">"TaskFlow"</h1>
                <Show when=move || demo>
                    <span class="demo-badge">"Demo data"</span>
                </Show>
                <SectionNav/>
                <div class="user-info">
                    <span class="user-name">{move || session.with(SessionState::display_name)}</span>
                    <Show
                        when=move || session.with(SessionState::is_signed_in)
                        fallback=move || view! { <button class="btn btn-primary" on:click=on_login>"Login"</button> }
                    >
                        <button class="btn btn-secondary" on:click=on_logout>"Logout"</button>
                    </Show>
                </div>
            </div>
        </header>
    }
}
