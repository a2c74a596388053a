//! Login dialog state: hidden or shown, plus the form fields.
//!
//! A failed attempt keeps the dialog open with the fields intact; the failure
//! text goes to the notice banner.

#[cfg(test)]
#[path = "login_modal_test.rs"]
mod login_modal_test;

use super::notice::NoticeKind;
use super::session::SessionState;
use crate::net::types::{AuthUser, Credentials};

/// Toasts raised by the session actions.
pub const LOGIN_SUCCESS: &str = "Login successful!";
pub const LOGOUT_SUCCESS: &str = "Logged out successfully";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginModalState {
    pub open: bool,
    pub email: String,
    pub password: String,
    pub submitting: bool,
}

impl LoginModalState {
    pub fn show(&mut self) {
        self.open = true;
    }

    /// Close the dialog. Every hide clears the form.
    pub fn hide(&mut self) {
        *self = Self::default();
    }

    pub fn credentials(&self) -> Credentials {
        Credentials { email: self.email.trim().to_owned(), password: self.password.clone() }
    }

    /// Mark a submit in flight. Returns `false` if one already is.
    pub fn begin_submit(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        true
    }

    pub fn end_submit(&mut self) {
        self.submitting = false;
    }

    /// Apply a finished login attempt and return the notice to raise.
    ///
    /// Success signs the user in and closes the dialog. Failure leaves the
    /// session and the form as they were.
    pub fn finish(&mut self, session: &mut SessionState, outcome: Result<AuthUser, String>) -> (String, NoticeKind) {
        match outcome {
            Ok(user) => {
                session.sign_in(user);
                self.hide();
                (LOGIN_SUCCESS.to_owned(), NoticeKind::Success)
            }
            Err(message) => {
                self.end_submit();
                (message, NoticeKind::Error)
            }
        }
    }
}

/// Sign out locally and return the notice to raise.
pub fn logout(session: &mut SessionState) -> (String, NoticeKind) {
    if let Some(user) = session.sign_out() {
        log::info!("user {} signed out", user.id);
    }
    (LOGOUT_SUCCESS.to_owned(), NoticeKind::Info)
}
