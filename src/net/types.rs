//! Wire DTOs for the TaskFlow REST API.
//!
//! DESIGN
//! ======
//! Records are read-only snapshots: the client never mutates them, it only
//! replaces whole collections on reload. Enumerated fields keep unknown wire
//! strings in an `Other` variant so a new backend value never breaks decoding
//! of an entire collection.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by data-source operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request did not complete (DNS, CORS, connection refused, ...).
    #[error("network request failed: {0}")]
    Network(String),

    /// The server answered with a non-success HTTP status.
    #[error("server responded with status {status}")]
    Status { status: u16, message: Option<String> },

    /// The response body could not be deserialized.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// No HTTP transport exists in this build (native/test builds).
    #[error("HTTP transport not available in this build")]
    Unavailable,
}

// =============================================================================
// ENUMERATED FIELDS
// =============================================================================

/// Lifecycle status of a project.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProjectStatus {
    Active,
    Completed,
    OnHold,
    Cancelled,
    Other(String),
}

impl ProjectStatus {
    /// Wire representation (e.g. `"ON_HOLD"`).
    pub fn as_str(&self) -> &str {
        match self {
            Self::Active => "ACTIVE",
            Self::Completed => "COMPLETED",
            Self::OnHold => "ON_HOLD",
            Self::Cancelled => "CANCELLED",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for ProjectStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "ACTIVE" => Self::Active,
            "COMPLETED" => Self::Completed,
            "ON_HOLD" => Self::OnHold,
            "CANCELLED" => Self::Cancelled,
            _ => Self::Other(raw),
        }
    }
}

impl From<ProjectStatus> for String {
    fn from(status: ProjectStatus) -> Self {
        status.as_str().to_owned()
    }
}

/// Workflow status of a task.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Completed,
    Cancelled,
    Other(String),
}

impl TaskStatus {
    /// Wire representation (e.g. `"IN_PROGRESS"`).
    pub fn as_str(&self) -> &str {
        match self {
            Self::Todo => "TODO",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for TaskStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "TODO" => Self::Todo,
            "IN_PROGRESS" => Self::InProgress,
            "COMPLETED" => Self::Completed,
            "CANCELLED" => Self::Cancelled,
            _ => Self::Other(raw),
        }
    }
}

impl From<TaskStatus> for String {
    fn from(status: TaskStatus) -> Self {
        status.as_str().to_owned()
    }
}

/// Task priority.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
    Other(String),
}

impl Priority {
    /// Wire representation (e.g. `"HIGH"`).
    pub fn as_str(&self) -> &str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Urgent => "URGENT",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for Priority {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "LOW" => Self::Low,
            "MEDIUM" => Self::Medium,
            "HIGH" => Self::High,
            "URGENT" => Self::Urgent,
            _ => Self::Other(raw),
        }
    }
}

impl From<Priority> for String {
    fn from(priority: Priority) -> Self {
        priority.as_str().to_owned()
    }
}

/// Account role.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    Member,
    Other(String),
}

impl Role {
    /// Wire representation (e.g. `"admin"`).
    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => "admin",
            Self::Member => "member",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "admin" => Self::Admin,
            "member" => Self::Member,
            _ => Self::Other(raw),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_owned()
    }
}

// =============================================================================
// ENTITIES
// =============================================================================

/// A user row as returned by `GET /api/users`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub username: Option<String>,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub is_active: bool,
    /// ISO 8601 timestamp of the last successful login.
    pub last_login: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// The identity returned by a successful `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: i64,
    #[serde(default)]
    pub username: Option<String>,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
}

impl AuthUser {
    /// Name shown in the header once signed in.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A project as returned by `GET /api/projects`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub status: ProjectStatus,
    /// ISO 8601 creation timestamp.
    pub created_at: Option<String>,
    pub owner_id: i64,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

/// A task as returned by `GET /api/tasks`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: Priority,
    /// ISO 8601 creation timestamp.
    pub created_at: Option<String>,
    /// ISO 8601 due timestamp, if scheduled.
    pub due_date: Option<String>,
    pub project_id: i64,
    pub assignee_id: Option<i64>,
    #[serde(default)]
    pub estimated_hours: Option<f64>,
}

// =============================================================================
// REQUEST / RESPONSE ENVELOPES
// =============================================================================

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub user: AuthUser,
}

/// Error body the API attaches to rejected requests.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

// A missing collection key decodes as an empty collection.

#[derive(Clone, Debug, Default, Deserialize)]
pub struct UsersResponse {
    #[serde(default)]
    pub users: Vec<User>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ProjectsResponse {
    #[serde(default)]
    pub projects: Vec<Project>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct TasksResponse {
    #[serde(default)]
    pub tasks: Vec<Task>,
}

/// Body of `GET /health`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
    #[serde(default)]
    pub database: Option<String>,
}
