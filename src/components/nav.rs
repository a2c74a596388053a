//! Section navigation links.

use leptos::prelude::*;

use crate::app::Navigator;
use crate::state::section::Section;

#[component]
pub fn SectionNav() -> impl IntoView {
    let nav = expect_context::<Navigator>();

    view! {
        <nav class="nav">
            <ul class="nav-menu">
                {Section::ALL
                    .into_iter()
                    .map(|section| {
                        let class = move || {
                            if nav.sections.with(|s| s.active == section) { "nav-link active" } else { "nav-link" }
                        };
                        view! {
                            <li>
                                <a
                                    href=format!("#{}", section.id())
                                    class=class
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        nav.show_id(section.id());
                                    }
                                >
                                    {section.label()}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
