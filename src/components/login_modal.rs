//! Login dialog.
//!
//! Hidden until the header's login button opens it. Closes on the close
//! button, a click on the backdrop, Escape, or a successful login; every close
//! resets the form.

use leptos::prelude::*;

use crate::app::Navigator;
use crate::state::login_modal::LoginModalState;
use crate::state::notice::NoticeState;
use crate::state::session::{self, SessionState};
use crate::util::notify::show_message;

#[component]
pub fn LoginModal() -> impl IntoView {
    let modal = expect_context::<RwSignal<LoginModalState>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let nav = expect_context::<Navigator>();

    let close = move || modal.update(LoginModalState::hide);
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            close();
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !modal.try_update(LoginModalState::begin_submit).unwrap_or(false) {
            return;
        }
        let credentials = modal.with_untracked(LoginModalState::credentials);
        let source = nav.source();
        leptos::task::spawn_local(async move {
            let outcome = session::login(source.as_ref(), &credentials).await;
            let succeeded = outcome.is_ok();
            let notice = modal.try_update(|m| session.try_update(|s| m.finish(s, outcome))).flatten();
            if let Some((text, kind)) = notice {
                show_message(notices, text, kind);
            }
            if succeeded {
                nav.reload();
            }
        });
    };

    view! {
        <Show when=move || modal.with(|m| m.open)>
            <div class="modal show" on:click=move |_| close()>
                <div
                    class="modal-content"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=move |ev| on_keydown.run(ev)
                    tabindex="0"
                >
                    <span class="close" on:click=move |_| close()>"×"</span>
                    <h2>"Login"</h2>
                    <form id="loginForm" on:submit=on_submit>
                        <div class="form-group">
                            <label for="email">"Email:"</label>
                            <input
                                type="email"
                                id="email"
                                name="email"
                                required
                                autofocus=true
                                prop:value=move || modal.with(|m| m.email.clone())
                                on:input=move |ev| modal.update(|m| m.email = event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label for="password">"Password:"</label>
                            <input
                                type="password"
                                id="password"
                                name="password"
                                required
                                prop:value=move || modal.with(|m| m.password.clone())
                                on:input=move |ev| modal.update(|m| m.password = event_target_value(&ev))
                            />
                        </div>
                        <button type="submit" class="btn btn-primary" disabled=move || modal.with(|m| m.submitting)>
                            {move || if modal.with(|m| m.submitting) { "Logging in..." } else { "Login" }}
                        </button>
                    </form>
                </div>
            </div>
        </Show>
    }
}
