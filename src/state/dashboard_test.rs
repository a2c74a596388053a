use super::*;
use crate::net::source::test_helpers::{dummy_project, dummy_task, dummy_user};
use crate::net::types::{Priority, ProjectStatus, Role};

fn offline<T>() -> Result<Vec<T>, ApiError> {
    Err(ApiError::Network("offline".to_owned()))
}

// =============================================================
// completed_count
// =============================================================

#[test]
fn completed_count_of_empty_is_zero() {
    assert_eq!(completed_count(&[]), 0);
}

#[test]
fn completed_count_only_matches_completed_status() {
    let tasks = vec![
        dummy_task(1, TaskStatus::Completed, Priority::Low),
        dummy_task(2, TaskStatus::InProgress, Priority::Low),
        dummy_task(3, TaskStatus::Completed, Priority::High),
        dummy_task(4, TaskStatus::Other("completed".to_owned()), Priority::High),
        dummy_task(5, TaskStatus::Cancelled, Priority::High),
    ];
    assert_eq!(completed_count(&tasks), 2);
}

// =============================================================
// DashboardStats
// =============================================================

#[test]
fn stats_count_each_collection() {
    let users = Ok(vec![dummy_user(1, Role::Admin, true), dummy_user(2, Role::Member, false)]);
    let projects = Ok(vec![dummy_project(1, ProjectStatus::Active, "2024-01-01T00:00:00")]);
    let tasks = Ok(vec![
        dummy_task(1, TaskStatus::Completed, Priority::Low),
        dummy_task(2, TaskStatus::Todo, Priority::Low),
        dummy_task(3, TaskStatus::Todo, Priority::Low),
    ]);
    let stats = DashboardStats::from_results(&users, &projects, &tasks);
    assert_eq!(
        stats,
        DashboardStats { total_users: 2, total_projects: 1, total_tasks: 3, completed_tasks: 1 }
    );
}

#[test]
fn stats_default_to_zero_when_everything_fails() {
    let stats = DashboardStats::from_results(&offline(), &offline(), &offline());
    assert_eq!(stats, DashboardStats::default());
}

#[test]
fn one_failing_collection_only_zeroes_itself() {
    let users = Ok(vec![dummy_user(1, Role::Member, true)]);
    let tasks = Ok(vec![dummy_task(1, TaskStatus::Completed, Priority::Low)]);
    let stats = DashboardStats::from_results(&users, &offline(), &tasks);
    assert_eq!(stats.total_users, 1);
    assert_eq!(stats.total_projects, 0);
    assert_eq!(stats.total_tasks, 1);
    assert_eq!(stats.completed_tasks, 1);
}

// =============================================================
// recent_activity
// =============================================================

#[test]
fn recent_activity_is_newest_first_across_kinds() {
    let projects = vec![
        dummy_project(1, ProjectStatus::Active, "2024-02-01T10:00:00"),
        dummy_project(2, ProjectStatus::Active, "2024-04-01T10:00:00"),
    ];
    let mut task = dummy_task(9, TaskStatus::Todo, Priority::Low);
    task.created_at = Some("2024-03-01T10:00:00".to_owned());

    let items = recent_activity(&projects, &[task], 10);
    let titles: Vec<&str> = items.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, vec!["Project 2", "Task 9", "Project 1"]);
    assert_eq!(items[1].kind, ActivityKind::TaskCreated);
}

#[test]
fn recent_activity_respects_limit_and_skips_undated() {
    let mut undated = dummy_task(1, TaskStatus::Todo, Priority::Low);
    undated.created_at = None;
    let tasks: Vec<Task> = (2..10)
        .map(|id| dummy_task(id, TaskStatus::Todo, Priority::Low))
        .chain(std::iter::once(undated))
        .collect();

    let items = recent_activity(&[], &tasks, RECENT_ACTIVITY_LIMIT);
    assert_eq!(items.len(), RECENT_ACTIVITY_LIMIT);
    assert!(items.iter().all(|i| i.title != "Task 1"));
    assert_eq!(items[0].title, "Task 9");
}

#[test]
fn dashboard_data_tolerates_failures() {
    let data = DashboardData::from_results(&offline(), &offline(), &offline());
    assert_eq!(data, DashboardData::default());
}
