//! Dashboard section: counters and the recent-activity feed.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::stat_card::StatCard;
use crate::state::collection::{ListBody, LoadState};
use crate::state::dashboard::{ActivityItem, DashboardData, DashboardStats, NO_RECENT_ACTIVITY};
use crate::util::format::short_date;

pub const LOADING_ACTIVITY: &str = "Loading recent activity...";

/// Counters to paint; zero until the load lands.
pub fn stats_for(state: &LoadState<DashboardData>) -> DashboardStats {
    state.loaded().map(|d| d.stats).unwrap_or_default()
}

pub fn activity_body(state: &LoadState<DashboardData>) -> ListBody<ActivityItem> {
    match state {
        LoadState::Loaded(data) => ListBody::from_items(data.recent.clone(), NO_RECENT_ACTIVITY),
        LoadState::Failed(_) => ListBody::Placeholder(NO_RECENT_ACTIVITY),
        LoadState::Idle | LoadState::Loading => ListBody::Placeholder(LOADING_ACTIVITY),
    }
}

#[component]
pub fn DashboardSection(state: LoadState<DashboardData>) -> impl IntoView {
    let stats = stats_for(&state);
    let activity = match activity_body(&state) {
        ListBody::Placeholder(text) => view! { <p class="no-data">{text}</p> }.into_any(),
        ListBody::Items(items) => items
            .into_iter()
            .map(|item| {
                view! {
                    <div class="activity-item">
                        <span class="activity-kind">{item.kind.label()}</span>
                        <span class="activity-title">{item.title}</span>
                        <small class="activity-date">{short_date(&item.at)}</small>
                    </div>
                }
            })
            .collect_view()
            .into_any(),
    };

    view! {
        <h2>"Dashboard"</h2>
        <div class="stats-grid">
            <StatCard label="Total Users" value=stats.total_users/>
            <StatCard label="Total Projects" value=stats.total_projects/>
            <StatCard label="Total Tasks" value=stats.total_tasks/>
            <StatCard label="Completed Tasks" value=stats.completed_tasks/>
        </div>
        <div class="recent-activity">
            <h3>"Recent Activity"</h3>
            <div class="activity-list">{activity}</div>
        </div>
    }
}
