use super::*;

#[test]
fn project_status_colors() {
    assert_eq!(project_status_color(&ProjectStatus::Active), "#28a745");
    assert_eq!(project_status_color(&ProjectStatus::Completed), "#007bff");
    assert_eq!(project_status_color(&ProjectStatus::OnHold), "#ffc107");
    assert_eq!(project_status_color(&ProjectStatus::Cancelled), "#dc3545");
    assert_eq!(project_status_color(&ProjectStatus::Other("ARCHIVED".to_owned())), "#6c757d");
}

#[test]
fn only_admin_gets_the_blue_badge() {
    assert_eq!(role_badge_color(&Role::Admin), BLUE);
    assert_eq!(role_badge_color(&Role::Member), GRAY);
    assert_eq!(role_badge_color(&Role::Other("viewer".to_owned())), GRAY);
}

#[test]
fn role_label_capitalizes_first_letter() {
    assert_eq!(role_label(&Role::Admin), "Admin");
    assert_eq!(role_label(&Role::Member), "Member");
    assert_eq!(role_label(&Role::Other("project_manager".to_owned())), "Project_manager");
    assert_eq!(role_label(&Role::Other(String::new())), "");
}

#[test]
fn activity_status_label_and_color() {
    assert_eq!(activity_status(true), ("Active", "#28a745"));
    assert_eq!(activity_status(false), ("Inactive", "#dc3545"));
}

#[test]
fn task_item_class_uses_lowercase_priority() {
    assert_eq!(task_item_class(&Priority::High), "task-item high-priority");
    assert_eq!(task_item_class(&Priority::Urgent), "task-item urgent-priority");
    assert_eq!(task_item_class(&Priority::Other("Critical".to_owned())), "task-item critical-priority");
}
