use super::*;
use crate::net::source::test_helpers::{dummy_project, dummy_task};
use crate::net::types::{Priority, ProjectStatus};

fn task_in(project_id: i64, id: i64, status: TaskStatus) -> Task {
    let mut task = dummy_task(id, status, Priority::Medium);
    task.project_id = project_id;
    task
}

#[test]
fn progress_without_tasks_is_zero_percent() {
    let progress = ProjectProgress::for_project(1, &[]);
    assert_eq!(progress, ProjectProgress::default());
    assert_eq!(progress.percent(), 0);
}

#[test]
fn progress_only_counts_own_tasks() {
    let tasks = vec![
        task_in(1, 1, TaskStatus::Completed),
        task_in(1, 2, TaskStatus::Todo),
        task_in(2, 3, TaskStatus::Completed),
    ];
    let progress = ProjectProgress::for_project(1, &tasks);
    assert_eq!(progress, ProjectProgress { task_count: 2, completed: 1 });
    assert_eq!(progress.percent(), 50);
}

#[test]
fn percent_rounds_to_nearest() {
    assert_eq!(ProjectProgress { task_count: 3, completed: 1 }.percent(), 33);
    assert_eq!(ProjectProgress { task_count: 3, completed: 2 }.percent(), 67);
    assert_eq!(ProjectProgress { task_count: 4, completed: 4 }.percent(), 100);
}

#[test]
fn cards_omit_progress_when_tasks_failed() {
    let data = ProjectsData {
        projects: vec![dummy_project(1, ProjectStatus::Active, "2024-01-01T00:00:00")],
        tasks: None,
    };
    let cards = data.cards();
    assert_eq!(cards.len(), 1);
    assert!(cards[0].1.is_none());
}

#[test]
fn cards_pair_projects_with_progress_in_order() {
    let data = ProjectsData {
        projects: vec![
            dummy_project(2, ProjectStatus::OnHold, "2024-01-01T00:00:00"),
            dummy_project(1, ProjectStatus::Active, "2024-01-02T00:00:00"),
        ],
        tasks: Some(vec![task_in(1, 1, TaskStatus::Completed)]),
    };
    let cards = data.cards();
    assert_eq!(cards[0].0.id, 2);
    assert_eq!(cards[0].1, Some(ProjectProgress::default()));
    assert_eq!(cards[1].1, Some(ProjectProgress { task_count: 1, completed: 1 }));
}
