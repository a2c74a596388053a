//! Projects section: a grid of project cards.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::project_card::ProjectCard;
use crate::net::types::Project;
use crate::state::collection::{ListBody, LoadState};
use crate::state::loader::PROJECT_TEXTS;
use crate::state::projects::{ProjectProgress, ProjectsData};

pub fn projects_body(state: &LoadState<ProjectsData>) -> ListBody<(Project, Option<ProjectProgress>)> {
    ListBody::from_load(&state.clone().map(|data| data.cards()), PROJECT_TEXTS)
}

#[component]
pub fn ProjectsSection(state: LoadState<ProjectsData>) -> impl IntoView {
    let grid = match projects_body(&state) {
        ListBody::Placeholder(text) => view! { <p class="no-data">{text}</p> }.into_any(),
        ListBody::Items(cards) => cards
            .into_iter()
            .map(|(project, progress)| view! { <ProjectCard project=project progress=progress/> })
            .collect_view()
            .into_any(),
    };

    view! {
        <h2>"Projects"</h2>
        <div class="projects-grid">{grid}</div>
    }
}
