use futures::executor::block_on;

use super::*;
use crate::net::source::test_helpers::{StubSource, dummy_auth_user};
use crate::net::types::ApiError;
use crate::state::session::{self, GUEST_NAME};

fn filled() -> LoginModalState {
    let mut modal = LoginModalState::default();
    modal.show();
    modal.email = "  jane@example.com ".to_owned();
    modal.password = "secret".to_owned();
    modal
}

#[test]
fn starts_hidden_and_empty() {
    let modal = LoginModalState::default();
    assert!(!modal.open);
    assert!(modal.email.is_empty());
}

#[test]
fn hide_resets_fields() {
    let mut modal = filled();
    assert!(modal.begin_submit());
    modal.hide();
    assert_eq!(modal, LoginModalState::default());
}

#[test]
fn credentials_trim_email_only() {
    let creds = filled().credentials();
    assert_eq!(creds.email, "jane@example.com");
    assert_eq!(creds.password, "secret");
}

#[test]
fn second_submit_is_rejected_while_in_flight() {
    let mut modal = filled();
    assert!(modal.begin_submit());
    assert!(!modal.begin_submit());
    modal.end_submit();
    assert!(modal.begin_submit());
}

#[test]
fn failed_submit_keeps_dialog_open() {
    let mut modal = filled();
    modal.begin_submit();
    modal.end_submit();
    assert!(modal.open);
    assert_eq!(modal.password, "secret");
}

// =============================================================
// Login and logout flow
// =============================================================

#[test]
fn successful_login_signs_in_and_hides_dialog() {
    let mut stub = StubSource::empty();
    stub.login = Ok(dummy_auth_user());
    let mut modal = filled();
    let mut session = SessionState::default();

    assert!(modal.begin_submit());
    let outcome = block_on(session::login(&stub, &modal.credentials()));
    let (text, kind) = modal.finish(&mut session, outcome);

    assert_eq!(session.display_name(), "Jane Doe");
    assert!(!modal.open);
    assert!(modal.email.is_empty());
    assert_eq!(text, "Login successful!");
    assert_eq!(kind, NoticeKind::Success);
}

#[test]
fn rejected_login_keeps_guest_and_shows_server_text() {
    let mut stub = StubSource::empty();
    stub.login = Err(ApiError::Status { status: 401, message: Some("Invalid credentials".to_owned()) });
    let mut modal = filled();
    let mut session = SessionState::default();

    modal.begin_submit();
    let outcome = block_on(session::login(&stub, &modal.credentials()));
    let (text, kind) = modal.finish(&mut session, outcome);

    assert!(!session.is_signed_in());
    assert_eq!(session.display_name(), GUEST_NAME);
    assert!(modal.open);
    assert!(!modal.submitting);
    assert_eq!(text, "Invalid credentials");
    assert_eq!(kind, NoticeKind::Error);
}

#[test]
fn logout_always_succeeds() {
    let mut session = SessionState::default();
    assert_eq!(logout(&mut session), ("Logged out successfully".to_owned(), NoticeKind::Info));

    session.sign_in(dummy_auth_user());
    logout(&mut session);
    assert!(!session.is_signed_in());
}
