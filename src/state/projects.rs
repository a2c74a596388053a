//! Projects section data and per-project task progress.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use crate::net::types::{Project, Task, TaskStatus};

/// Task tally for one project.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProjectProgress {
    pub task_count: usize,
    pub completed: usize,
}

impl ProjectProgress {
    pub fn for_project(project_id: i64, tasks: &[Task]) -> Self {
        tasks
            .iter()
            .filter(|t| t.project_id == project_id)
            .fold(Self::default(), |mut acc, t| {
                acc.task_count += 1;
                if t.status == TaskStatus::Completed {
                    acc.completed += 1;
                }
                acc
            })
    }

    /// Completion rounded to the nearest whole percent; 0 without tasks.
    pub fn percent(self) -> usize {
        if self.task_count == 0 {
            return 0;
        }
        (self.completed * 100 + self.task_count / 2) / self.task_count
    }
}

/// Projects plus, when that fetch succeeded, the tasks used for progress.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectsData {
    pub projects: Vec<Project>,
    pub tasks: Option<Vec<Task>>,
}

impl ProjectsData {
    /// Projects paired with their progress, in source order.
    pub fn cards(&self) -> Vec<(Project, Option<ProjectProgress>)> {
        self.projects
            .iter()
            .map(|p| {
                let progress = self.tasks.as_deref().map(|tasks| ProjectProgress::for_project(p.id, tasks));
                (p.clone(), progress)
            })
            .collect()
    }
}
