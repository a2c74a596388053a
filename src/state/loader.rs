//! Per-section data loads.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` calls [`load_section`] for every ticket the section router issues and
//! stores the result in one `RwSignal<SectionData>`. Only the active section's
//! data is held; switching sections replaces it with a fresh `Loading` value.
//!
//! ERROR HANDLING
//! ==============
//! Loads never fail outward. Dashboard collections degrade to zero one by one;
//! list sections become [`LoadState::Failed`] and render their error text.

#[cfg(test)]
#[path = "loader_test.rs"]
mod loader_test;

use super::board::TaskBoard;
use super::collection::{ListTexts, LoadState};
use super::dashboard::DashboardData;
use super::projects::ProjectsData;
use super::section::Section;
use crate::net::source::DataSource;
use crate::net::types::{ApiError, User};

pub const PROJECT_TEXTS: ListTexts = ListTexts {
    loading: "Loading projects...",
    empty: "No projects found",
    error: "Error loading projects",
};

pub const USER_TEXTS: ListTexts = ListTexts {
    loading: "Loading users...",
    empty: "No users found",
    error: "Error loading users",
};

pub const TASK_TEXTS: ListTexts = ListTexts {
    loading: "Loading tasks...",
    empty: super::board::NO_TASKS,
    error: "Error loading tasks",
};

/// Data held for the visible section.
#[derive(Clone, Debug, PartialEq)]
pub enum SectionData {
    Dashboard(LoadState<DashboardData>),
    Projects(LoadState<ProjectsData>),
    Tasks(LoadState<TaskBoard>),
    Users(LoadState<Vec<User>>),
}

impl Default for SectionData {
    fn default() -> Self {
        Self::loading(Section::default())
    }
}

impl SectionData {
    /// Placeholder value while `section` is loading.
    pub fn loading(section: Section) -> Self {
        match section {
            Section::Dashboard => Self::Dashboard(LoadState::Loading),
            Section::Projects => Self::Projects(LoadState::Loading),
            Section::Tasks => Self::Tasks(LoadState::Loading),
            Section::Users => Self::Users(LoadState::Loading),
        }
    }

    pub fn section(&self) -> Section {
        match self {
            Self::Dashboard(_) => Section::Dashboard,
            Self::Projects(_) => Section::Projects,
            Self::Tasks(_) => Section::Tasks,
            Self::Users(_) => Section::Users,
        }
    }

    pub fn is_loading(&self) -> bool {
        match self {
            Self::Dashboard(s) => s.is_loading(),
            Self::Projects(s) => s.is_loading(),
            Self::Tasks(s) => s.is_loading(),
            Self::Users(s) => s.is_loading(),
        }
    }
}

fn warn_failed<T>(what: &str, result: &Result<T, ApiError>) {
    if let Err(e) = result {
        log::warn!("failed to load {what}: {e}");
    }
}

/// Fetch users, projects, and tasks concurrently and derive the dashboard.
pub async fn load_dashboard(source: &dyn DataSource) -> DashboardData {
    let (users, projects, tasks) = futures::join!(source.users(), source.projects(), source.tasks());
    warn_failed("users", &users);
    warn_failed("projects", &projects);
    warn_failed("tasks", &tasks);
    DashboardData::from_results(&users, &projects, &tasks)
}

/// Fetch projects and, alongside, the tasks used for per-project progress.
pub async fn load_projects(source: &dyn DataSource) -> LoadState<ProjectsData> {
    let (projects, tasks) = futures::join!(source.projects(), source.tasks());
    warn_failed("projects", &projects);
    warn_failed("tasks", &tasks);
    match projects {
        Ok(projects) => LoadState::Loaded(ProjectsData { projects, tasks: tasks.ok() }),
        Err(e) => LoadState::Failed(e.to_string()),
    }
}

pub async fn load_tasks(source: &dyn DataSource) -> LoadState<TaskBoard> {
    let tasks = source.tasks().await;
    warn_failed("tasks", &tasks);
    LoadState::from(tasks).map(TaskBoard::from_tasks)
}

pub async fn load_users(source: &dyn DataSource) -> LoadState<Vec<User>> {
    let users = source.users().await;
    warn_failed("users", &users);
    LoadState::from(users)
}

/// Run the load belonging to `section`.
pub async fn load_section(source: &dyn DataSource, section: Section) -> SectionData {
    match section {
        Section::Dashboard => SectionData::Dashboard(LoadState::Loaded(load_dashboard(source).await)),
        Section::Projects => SectionData::Projects(load_projects(source).await),
        Section::Tasks => SectionData::Tasks(load_tasks(source).await),
        Section::Users => SectionData::Users(load_users(source).await),
    }
}
