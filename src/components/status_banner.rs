//! Auto-dismissing status message.

use leptos::prelude::*;

use crate::state::notice::NoticeState;

#[component]
pub fn StatusBanner() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    view! {
        <div class=move || notices.with(NoticeState::class) role="status">
            {move || notices.with(|n| n.visible().map(|notice| notice.text.clone()).unwrap_or_default())}
        </div>
    }
}
