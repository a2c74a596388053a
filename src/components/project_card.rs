//! Card for one project.

use leptos::prelude::*;

use crate::net::types::Project;
use crate::state::projects::ProjectProgress;
use crate::util::format::short_date;
use crate::util::style::project_status_color;

pub const NO_PROJECT_DESCRIPTION: &str = "No description available";

#[component]
pub fn ProjectCard(project: Project, progress: Option<ProjectProgress>) -> impl IntoView {
    let description = project.description.clone().unwrap_or_else(|| NO_PROJECT_DESCRIPTION.to_owned());
    let badge_style = format!("background: {};", project_status_color(&project.status));
    let created = project.created_at.as_deref().map(short_date);

    view! {
        <div class="project-card">
            <h3>{project.name.clone()}</h3>
            <p>{description}</p>
            {progress.map(|p| {
                let percent = p.percent();
                view! {
                    <div class="project-progress">
                        <div class="project-progress__bar">
                            <div class="project-progress__fill" style=format!("width: {percent}%;")></div>
                        </div>
                        <small>{format!("{} of {} tasks completed ({percent}%)", p.completed, p.task_count)}</small>
                    </div>
                }
            })}
            <div class="project-meta">
                <span class="status-badge" style=badge_style>{project.status.as_str().to_owned()}</span>
                {created.map(|date| view! { <small class="project-created">{format!("Created: {date}")}</small> })}
            </div>
        </div>
    }
}
