//! Dashboard statistics and recent-activity feed.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::net::types::{ApiError, Project, Task, TaskStatus, User};

pub const RECENT_ACTIVITY_LIMIT: usize = 5;
pub const NO_RECENT_ACTIVITY: &str = "No recent activity";

/// The four dashboard counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_users: usize,
    pub total_projects: usize,
    pub total_tasks: usize,
    pub completed_tasks: usize,
}

impl DashboardStats {
    /// Counters from independently fetched collections. A failed collection
    /// counts as zero without affecting the others.
    pub fn from_results(
        users: &Result<Vec<User>, ApiError>,
        projects: &Result<Vec<Project>, ApiError>,
        tasks: &Result<Vec<Task>, ApiError>,
    ) -> Self {
        let tasks = tasks.as_deref().unwrap_or_default();
        Self {
            total_users: users.as_ref().map_or(0, Vec::len),
            total_projects: projects.as_ref().map_or(0, Vec::len),
            total_tasks: tasks.len(),
            completed_tasks: completed_count(tasks),
        }
    }
}

/// Number of tasks whose status is exactly `COMPLETED`.
pub fn completed_count(tasks: &[Task]) -> usize {
    tasks.iter().filter(|t| t.status == TaskStatus::Completed).count()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivityKind {
    ProjectCreated,
    TaskCreated,
}

impl ActivityKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::ProjectCreated => "New project",
            Self::TaskCreated => "New task",
        }
    }
}

/// One line of the recent-activity feed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityItem {
    pub kind: ActivityKind,
    pub title: String,
    pub at: String,
}

/// Newest creations across projects and tasks, newest first.
///
/// Records without a creation timestamp are skipped. Timestamps are ISO 8601
/// strings from one backend, so lexical order is chronological order.
pub fn recent_activity(projects: &[Project], tasks: &[Task], limit: usize) -> Vec<ActivityItem> {
    let project_items = projects.iter().filter_map(|p| {
        p.created_at.as_ref().map(|at| ActivityItem {
            kind: ActivityKind::ProjectCreated,
            title: p.name.clone(),
            at: at.clone(),
        })
    });
    let task_items = tasks.iter().filter_map(|t| {
        t.created_at.as_ref().map(|at| ActivityItem {
            kind: ActivityKind::TaskCreated,
            title: t.title.clone(),
            at: at.clone(),
        })
    });

    let mut items: Vec<ActivityItem> = project_items.chain(task_items).collect();
    items.sort_by(|a, b| b.at.cmp(&a.at));
    items.truncate(limit);
    items
}

/// Everything the dashboard section paints.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardData {
    pub stats: DashboardStats,
    pub recent: Vec<ActivityItem>,
}

impl DashboardData {
    pub fn from_results(
        users: &Result<Vec<User>, ApiError>,
        projects: &Result<Vec<Project>, ApiError>,
        tasks: &Result<Vec<Task>, ApiError>,
    ) -> Self {
        let recent = recent_activity(
            projects.as_deref().unwrap_or_default(),
            tasks.as_deref().unwrap_or_default(),
            RECENT_ACTIVITY_LIMIT,
        );
        Self { stats: DashboardStats::from_results(users, projects, tasks), recent }
    }
}
