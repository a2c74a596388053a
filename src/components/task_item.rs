//! One task on the task board.

use leptos::prelude::*;

use crate::net::types::Task;
use crate::util::format::{NO_DUE_DATE, date_or, hours_label, is_overdue};
use crate::util::style::task_item_class;

pub const NO_TASK_DESCRIPTION: &str = "No description";

#[component]
pub fn TaskItem(task: Task, today: Option<time::Date>) -> impl IntoView {
    let overdue = today.is_some_and(|day| is_overdue(&task, day));
    let class = if overdue {
        format!("{} overdue", task_item_class(&task.priority))
    } else {
        task_item_class(&task.priority)
    };
    let description = task.description.clone().unwrap_or_else(|| NO_TASK_DESCRIPTION.to_owned());
    let due = date_or(task.due_date.as_deref(), NO_DUE_DATE);
    let hours = task.estimated_hours.map(hours_label);

    view! {
        <div class=class>
            <h4>{task.title.clone()}</h4>
            <p>{description}</p>
            <div class="task-meta">
                <span>{format!("Priority: {}", task.priority.as_str())}</span>
                <span>{format!("Due: {due}")}</span>
                {hours.map(|h| view! { <span class="task-hours">{h}</span> })}
                {overdue.then(|| view! { <span class="task-overdue">"Overdue"</span> })}
            </div>
        </div>
    }
}
