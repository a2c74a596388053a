use super::*;
use crate::state::dashboard::ActivityKind;

fn loaded(recent: Vec<ActivityItem>) -> LoadState<DashboardData> {
    LoadState::Loaded(DashboardData {
        stats: DashboardStats { total_users: 3, total_projects: 2, total_tasks: 5, completed_tasks: 1 },
        recent,
    })
}

#[test]
fn stats_are_zero_until_loaded() {
    assert_eq!(stats_for(&LoadState::Loading), DashboardStats::default());
    assert_eq!(stats_for(&LoadState::Failed("down".to_owned())), DashboardStats::default());
    assert_eq!(stats_for(&loaded(Vec::new())).total_tasks, 5);
}

#[test]
fn empty_feed_shows_no_recent_activity() {
    assert_eq!(activity_body(&loaded(Vec::new())), ListBody::Placeholder("No recent activity"));
    assert_eq!(activity_body(&LoadState::Loading), ListBody::Placeholder(LOADING_ACTIVITY));
}

#[test]
fn feed_lists_items() {
    let item = ActivityItem {
        kind: ActivityKind::TaskCreated,
        title: "Write docs".to_owned(),
        at: "2024-05-01T00:00:00".to_owned(),
    };
    assert_eq!(activity_body(&loaded(vec![item.clone()])), ListBody::Items(vec![item]));
}
