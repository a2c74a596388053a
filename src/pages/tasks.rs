//! Tasks section: the three-column task board.

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::task_item::TaskItem;
use crate::net::types::Task;
use crate::state::board::{TaskBoard, TaskBucket};
use crate::state::collection::{ListBody, LoadState};
use crate::state::loader::TASK_TEXTS;
use crate::util::format::today;

/// Body of one column. Every column shows the same placeholder while the
/// board is loading or after it failed.
pub fn column_body(state: &LoadState<TaskBoard>, bucket: TaskBucket) -> ListBody<Task> {
    match state {
        LoadState::Idle | LoadState::Loading => ListBody::Placeholder(TASK_TEXTS.loading),
        LoadState::Failed(_) => ListBody::Placeholder(TASK_TEXTS.error),
        LoadState::Loaded(board) => ListBody::from_items(board.bucket(bucket).to_vec(), TASK_TEXTS.empty),
    }
}

#[component]
pub fn TasksSection(state: LoadState<TaskBoard>) -> impl IntoView {
    let today = today();
    let columns = TaskBucket::ALL
        .into_iter()
        .map(|bucket| {
            let body = match column_body(&state, bucket) {
                ListBody::Placeholder(text) => view! { <p class="no-data">{text}</p> }.into_any(),
                ListBody::Items(tasks) => tasks
                    .into_iter()
                    .map(|task| view! { <TaskItem task=task today=today/> })
                    .collect_view()
                    .into_any(),
            };
            let count = state.loaded().map(|board| board.count(bucket));
            view! {
                <div class=format!("task-column {}", bucket.class())>
                    <h3>
                        {bucket.title()}
                        {count.map(|n| view! { <span class="task-count">{format!(" ({n})")}</span> })}
                    </h3>
                    <div class="task-list">{body}</div>
                </div>
            }
        })
        .collect_view();

    view! {
        <h2>"Tasks"</h2>
        <div class="tasks-board">{columns}</div>
    }
}
