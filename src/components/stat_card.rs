//! One dashboard counter.

use leptos::prelude::*;

#[component]
pub fn StatCard(label: &'static str, value: usize) -> impl IntoView {
    view! {
        <div class="stat-card">
            <h3>{label}</h3>
            <div class="stat-number">{value}</div>
        </div>
    }
}
