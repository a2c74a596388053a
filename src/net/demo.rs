//! Fixed in-memory dataset served when the client runs without a backend.
//!
//! Login mirrors the API's rules: both fields are required and the email must
//! belong to an active demo user. Any non-empty password is accepted.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "demo_test.rs"]
mod demo_test;

use super::source::DataSource;
use super::types::{
    ApiError, AuthUser, Credentials, Health, Priority, Project, ProjectStatus, Role, Task, TaskStatus, User,
};

/// Demo data source. Stateless: every call returns a fresh copy.
#[derive(Clone, Copy, Debug, Default)]
pub struct DemoSource;

#[async_trait::async_trait(?Send)]
impl DataSource for DemoSource {
    async fn login(&self, credentials: &Credentials) -> Result<AuthUser, ApiError> {
        demo_login(credentials)
    }

    async fn users(&self) -> Result<Vec<User>, ApiError> {
        Ok(demo_users())
    }

    async fn projects(&self) -> Result<Vec<Project>, ApiError> {
        Ok(demo_projects())
    }

    async fn tasks(&self) -> Result<Vec<Task>, ApiError> {
        Ok(demo_tasks())
    }

    async fn health(&self) -> Result<Health, ApiError> {
        Ok(Health { status: "demo".to_owned(), database: None })
    }
}

fn demo_login(credentials: &Credentials) -> Result<AuthUser, ApiError> {
    let email = credentials.email.trim();
    if email.is_empty() || credentials.password.is_empty() {
        return Err(ApiError::Status { status: 400, message: Some("Email and password required".to_owned()) });
    }
    demo_users()
        .into_iter()
        .find(|u| u.is_active && u.email.eq_ignore_ascii_case(email))
        .map(|u| AuthUser {
            id: u.id,
            username: u.username,
            email: u.email,
            first_name: u.first_name,
            last_name: u.last_name,
            role: u.role,
        })
        .ok_or_else(|| ApiError::Status { status: 401, message: Some("Invalid credentials".to_owned()) })
}

fn user(
    id: i64,
    username: &str,
    first: &str,
    last: &str,
    role: Role,
    is_active: bool,
    last_login: Option<&str>,
) -> User {
    User {
        id,
        username: Some(username.to_owned()),
        email: format!("{username}@taskflow.demo"),
        first_name: first.to_owned(),
        last_name: last.to_owned(),
        role,
        is_active,
        last_login: last_login.map(str::to_owned),
        created_at: Some("2024-01-08T09:00:00".to_owned()),
        avatar_url: None,
    }
}

pub fn demo_users() -> Vec<User> {
    vec![
        user(1, "admin", "Alex", "Morgan", Role::Admin, true, Some("2024-06-14T08:12:00")),
        user(2, "sarah", "Sarah", "Chen", Role::Member, true, Some("2024-06-13T16:45:00")),
        user(3, "mike", "Mike", "Johnson", Role::Member, true, None),
        user(4, "emma", "Emma", "Davis", Role::Member, false, Some("2024-03-02T11:30:00")),
    ]
}

fn project(
    id: i64,
    name: &str,
    description: Option<&str>,
    status: ProjectStatus,
    created_at: &str,
    owner_id: i64,
) -> Project {
    Project {
        id,
        name: name.to_owned(),
        description: description.map(str::to_owned),
        status,
        created_at: Some(created_at.to_owned()),
        owner_id,
        start_date: None,
        end_date: None,
    }
}

pub fn demo_projects() -> Vec<Project> {
    vec![
        project(
            1,
            "Website Redesign",
            Some("Refresh the marketing site with the new brand guidelines."),
            ProjectStatus::Active,
            "2024-02-01T10:00:00",
            1,
        ),
        project(
            2,
            "Mobile App Launch",
            Some("Ship the first public release of the iOS and Android apps."),
            ProjectStatus::OnHold,
            "2024-03-15T14:30:00",
            2,
        ),
        project(3, "Q1 Reporting", None, ProjectStatus::Completed, "2024-01-10T09:15:00", 1),
    ]
}

#[allow(clippy::too_many_arguments)]
fn task(
    id: i64,
    title: &str,
    description: Option<&str>,
    status: TaskStatus,
    priority: Priority,
    created_at: &str,
    due_date: Option<&str>,
    project_id: i64,
    assignee_id: Option<i64>,
) -> Task {
    Task {
        id,
        title: title.to_owned(),
        description: description.map(str::to_owned),
        status,
        priority,
        created_at: Some(created_at.to_owned()),
        due_date: due_date.map(str::to_owned),
        project_id,
        assignee_id,
        estimated_hours: None,
    }
}

fn with_hours(task: Task, hours: f64) -> Task {
    Task { estimated_hours: Some(hours), ..task }
}

pub fn demo_tasks() -> Vec<Task> {
    vec![
        with_hours(
            task(
                1,
                "Design new homepage",
                Some("Wireframes and high-fidelity mockups."),
                TaskStatus::Completed,
                Priority::High,
                "2024-02-02T09:00:00",
                Some("2024-02-20T17:00:00"),
                1,
                Some(2),
            ),
            16.0,
        ),
        with_hours(
            task(
                2,
                "Implement responsive layout",
                None,
                TaskStatus::InProgress,
                Priority::High,
                "2024-02-21T10:00:00",
                Some("2024-07-01T17:00:00"),
                1,
                Some(3),
            ),
            12.5,
        ),
        task(
            3,
            "Write launch copy",
            Some("Landing page and store listing text."),
            TaskStatus::Todo,
            Priority::Medium,
            "2024-03-16T11:00:00",
            None,
            2,
            Some(2),
        ),
        task(
            4,
            "Set up crash reporting",
            None,
            TaskStatus::Todo,
            Priority::Low,
            "2024-03-18T15:20:00",
            Some("2024-08-15T17:00:00"),
            2,
            None,
        ),
        task(
            5,
            "Compile Q1 metrics",
            Some("Collect numbers from every team."),
            TaskStatus::Completed,
            Priority::Medium,
            "2024-01-11T08:30:00",
            Some("2024-01-31T17:00:00"),
            3,
            Some(1),
        ),
        task(
            6,
            "Accessibility audit",
            None,
            TaskStatus::InProgress,
            Priority::Urgent,
            "2024-04-02T13:00:00",
            Some("2024-05-01T17:00:00"),
            1,
            Some(1),
        ),
    ]
}
