//! Session state for the signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Held in an `RwSignal` provided by `App`. Nothing is persisted: a page
//! reload always starts as a guest.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::source::DataSource;
use crate::net::types::{ApiError, AuthUser, Credentials};

pub const GUEST_NAME: &str = "Guest User";
pub const LOGIN_FAILED: &str = "Login failed";
pub const LOGIN_NETWORK_ERROR: &str = "Network error. Please try again.";

#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub user: Option<AuthUser>,
}

impl SessionState {
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// Header label: the user's full name, or the guest placeholder.
    pub fn display_name(&self) -> String {
        self.user
            .as_ref()
            .map_or_else(|| GUEST_NAME.to_owned(), AuthUser::display_name)
    }

    pub fn sign_in(&mut self, user: AuthUser) {
        self.user = Some(user);
    }

    /// Clear the identity. Always succeeds; returns the previous user, if any.
    pub fn sign_out(&mut self) -> Option<AuthUser> {
        self.user.take()
    }
}

/// Authenticate against `source`.
///
/// # Errors
///
/// Returns the message to show the user: the server's own error text when it
/// sent one, otherwise a generic fallback.
pub async fn login(source: &dyn DataSource, credentials: &Credentials) -> Result<AuthUser, String> {
    match source.login(credentials).await {
        Ok(user) => {
            log::info!("login succeeded for user {}", user.id);
            Ok(user)
        }
        Err(e) => {
            log::warn!("login failed: {e}");
            Err(login_failure_message(&e))
        }
    }
}

pub fn login_failure_message(err: &ApiError) -> String {
    match err {
        ApiError::Status { message: Some(message), .. } => message.clone(),
        ApiError::Status { message: None, .. } => LOGIN_FAILED.to_owned(),
        ApiError::Network(_) | ApiError::Decode(_) | ApiError::Unavailable => LOGIN_NETWORK_ERROR.to_owned(),
    }
}
