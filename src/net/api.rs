//! REST data source for the TaskFlow API.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: every call returns [`ApiError::Unavailable`] since the
//! transport only exists in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become [`ApiError::Status`] carrying the server's
//! `error` text when the body has one, so the login form can show it verbatim.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::source::DataSource;
#[cfg(any(test, feature = "csr"))]
use super::types::ErrorBody;
#[cfg(feature = "csr")]
use super::types::{LoginResponse, ProjectsResponse, TasksResponse, UsersResponse};
use super::types::{ApiError, AuthUser, Credentials, Health, Project, Task, User};

pub const LOGIN_PATH: &str = "/auth/login";
pub const USERS_PATH: &str = "/api/users";
pub const PROJECTS_PATH: &str = "/api/projects";
pub const TASKS_PATH: &str = "/api/tasks";
pub const HEALTH_PATH: &str = "/health";

/// HTTP-backed data source rooted at a configured base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiSource {
    base_url: String,
}

impl ApiSource {
    pub fn new(base_url: &str) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_owned() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[cfg(any(test, feature = "csr"))]
    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    #[cfg(feature = "csr")]
    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.endpoint(path);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error(resp).await);
        }
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[cfg(feature = "csr")]
async fn status_error(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    ApiError::Status { status, message: error_message_from_body(&body) }
}

/// Extract the `error` string from a rejected response body, if any.
#[cfg(any(test, feature = "csr"))]
fn error_message_from_body(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|message| !message.trim().is_empty())
}

#[async_trait::async_trait(?Send)]
impl DataSource for ApiSource {
    #[cfg_attr(not(feature = "csr"), allow(unused_variables))]
    async fn login(&self, credentials: &Credentials) -> Result<AuthUser, ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = self.endpoint(LOGIN_PATH);
            let resp = gloo_net::http::Request::post(&url)
                .json(credentials)
                .map_err(|e| ApiError::Decode(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(status_error(resp).await);
            }
            let body: LoginResponse = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
            Ok(body.user)
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn users(&self) -> Result<Vec<User>, ApiError> {
        #[cfg(feature = "csr")]
        {
            let body: UsersResponse = self.get_json(USERS_PATH).await?;
            Ok(body.users)
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn projects(&self) -> Result<Vec<Project>, ApiError> {
        #[cfg(feature = "csr")]
        {
            let body: ProjectsResponse = self.get_json(PROJECTS_PATH).await?;
            Ok(body.projects)
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn tasks(&self) -> Result<Vec<Task>, ApiError> {
        #[cfg(feature = "csr")]
        {
            let body: TasksResponse = self.get_json(TASKS_PATH).await?;
            Ok(body.tasks)
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn health(&self) -> Result<Health, ApiError> {
        #[cfg(feature = "csr")]
        {
            self.get_json::<Health>(HEALTH_PATH).await
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Unavailable)
        }
    }
}
