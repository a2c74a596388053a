use futures::executor::block_on;

use super::*;

fn credentials(email: &str, password: &str) -> Credentials {
    Credentials { email: email.to_owned(), password: password.to_owned() }
}

// =============================================================
// Dataset
// =============================================================

#[test]
fn dataset_is_internally_consistent() {
    let users = demo_users();
    let projects = demo_projects();
    let tasks = demo_tasks();

    for p in &projects {
        assert!(users.iter().any(|u| u.id == p.owner_id), "owner of {} missing", p.name);
    }
    for t in &tasks {
        assert!(projects.iter().any(|p| p.id == t.project_id), "project of {} missing", t.title);
        if let Some(assignee) = t.assignee_id {
            assert!(users.iter().any(|u| u.id == assignee));
        }
    }
}

#[test]
fn some_demo_tasks_carry_estimated_hours() {
    let hours: Vec<f64> = demo_tasks().iter().filter_map(|t| t.estimated_hours).collect();
    assert_eq!(hours, vec![16.0, 12.5]);
}

#[test]
fn collections_are_served_without_network() {
    let source = DemoSource;
    assert_eq!(block_on(source.users()).unwrap().len(), demo_users().len());
    assert_eq!(block_on(source.projects()).unwrap().len(), demo_projects().len());
    assert_eq!(block_on(source.tasks()).unwrap().len(), demo_tasks().len());
    assert_eq!(block_on(source.health()).unwrap().status, "demo");
}

// =============================================================
// Login
// =============================================================

#[test]
fn login_accepts_active_demo_user() {
    let user = block_on(DemoSource.login(&credentials("sarah@taskflow.demo", "secret"))).unwrap();
    assert_eq!(user.display_name(), "Sarah Chen");
    assert_eq!(user.role, Role::Member);
}

#[test]
fn login_matches_email_case_insensitively() {
    let user = block_on(DemoSource.login(&credentials(" ADMIN@taskflow.demo ", "x"))).unwrap();
    assert_eq!(user.role, Role::Admin);
}

#[test]
fn login_rejects_inactive_user() {
    let err = block_on(DemoSource.login(&credentials("emma@taskflow.demo", "x"))).unwrap_err();
    assert_eq!(err, ApiError::Status { status: 401, message: Some("Invalid credentials".to_owned()) });
}

#[test]
fn login_requires_both_fields() {
    let err = block_on(DemoSource.login(&credentials("", "x"))).unwrap_err();
    assert_eq!(
        err,
        ApiError::Status { status: 400, message: Some("Email and password required".to_owned()) }
    );
    assert!(block_on(DemoSource.login(&credentials("mike@taskflow.demo", ""))).is_err());
}
