//! Root application component and section navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns every shared signal and provides it through context:
//! `RwSignal<SessionState>`, `RwSignal<NoticeState>`,
//! `RwSignal<LoginModalState>`, and a [`Navigator`] that couples the section
//! router to the data source. Components never look anything up globally.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::sync::Arc;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_meta::{Title, provide_meta_context};

use crate::components::header::AppHeader;
use crate::components::login_modal::LoginModal;
use crate::components::status_banner::StatusBanner;
use crate::config::ClientConfig;
use crate::net::source::{DataSource, source_for};
use crate::net::types::{ApiError, Health};
use crate::pages::{dashboard::DashboardSection, projects::ProjectsSection, tasks::TasksSection, users::UsersSection};
use crate::state::loader::{self, SectionData};
use crate::state::login_modal::LoginModalState;
use crate::state::notice::{NoticeKind, NoticeState};
use crate::state::section::{LoadTicket, Section, SectionState};
use crate::state::session::SessionState;
use crate::util::notify::show_message;

pub const HEALTH_FAILED: &str = "Unable to connect to server";

/// Section router plus the data source its loads run against.
#[derive(Clone, Copy)]
pub struct Navigator {
    pub sections: RwSignal<SectionState>,
    pub data: RwSignal<SectionData>,
    source: StoredValue<Arc<dyn DataSource>>,
}

impl Navigator {
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self {
            sections: RwSignal::new(SectionState::default()),
            data: RwSignal::new(SectionData::default()),
            source: StoredValue::new(source),
        }
    }

    pub fn source(self) -> Arc<dyn DataSource> {
        self.source.get_value()
    }

    /// Make `section` visible and (re)load it.
    pub fn show(self, section: Section) {
        if let Some(ticket) = self.sections.try_update(|s| s.show(section)) {
            self.start(ticket);
        }
    }

    /// [`Self::show`] by section id; unknown ids are ignored.
    pub fn show_id(self, id: &str) {
        match self.sections.try_update(|s| s.show_id(id)).flatten() {
            Some(ticket) => self.start(ticket),
            None => log::debug!("ignoring unknown section id {id:?}"),
        }
    }

    /// Reload whatever section is visible.
    pub fn reload(self) {
        if let Some(ticket) = self.sections.try_update(SectionState::reload) {
            self.start(ticket);
        }
    }

    fn start(self, ticket: LoadTicket) {
        self.data.set(SectionData::loading(ticket.section));
        let source = self.source();
        leptos::task::spawn_local(async move {
            let data = loader::load_section(source.as_ref(), ticket.section).await;
            if self.sections.with_untracked(|s| s.is_current(ticket)) {
                self.data.set(data);
            } else {
                log::debug!("discarding stale {} load (generation {})", ticket.section.id(), ticket.generation);
            }
        });
    }
}

/// Root application component.
#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let notices = RwSignal::new(NoticeState::default());
    let login_modal = RwSignal::new(LoginModalState::default());
    let nav = Navigator::new(source_for(&config));

    provide_context(session);
    provide_context(notices);
    provide_context(login_modal);
    provide_context(nav);

    nav.show(Section::Dashboard);
    check_health(nav.source(), notices);

    let demo = config.is_demo();
    let body = move || match nav.data.get() {
        SectionData::Dashboard(state) => view! { <DashboardSection state=state/> }.into_any(),
        SectionData::Projects(state) => view! { <ProjectsSection state=state/> }.into_any(),
        SectionData::Tasks(state) => view! { <TasksSection state=state/> }.into_any(),
        SectionData::Users(state) => view! { <UsersSection state=state/> }.into_any(),
    };

    view! {
        <Title text="TaskFlow"/>
        <AppHeader demo=demo/>
        <main class="main-content">
            <section class="content-section active" id=move || nav.data.with(|d| d.section().id())>
                {body}
            </section>
        </main>
        <LoginModal/>
        <StatusBanner/>
    }
}

/// Probe the backend once and raise a notice if it could not be reached.
fn check_health(source: Arc<dyn DataSource>, notices: RwSignal<NoticeState>) {
    leptos::task::spawn_local(async move {
        let result = source.health().await;
        if let Some(text) = health_notice(&result) {
            show_message(notices, text, NoticeKind::Error);
        }
    });
}

/// Decide whether a health probe result warrants a user-facing notice.
///
/// A backend that answers at all, even with an error status such as
/// `500 {"status": "unhealthy"}`, is reachable; that case is only logged. A
/// request that never completed or a body that did not parse means the
/// client cannot talk to the server.
pub fn health_notice(result: &Result<Health, ApiError>) -> Option<&'static str> {
    match result {
        Ok(health) => {
            log::info!(
                "api health: status={} database={}",
                health.status,
                health.database.as_deref().unwrap_or("-")
            );
            None
        }
        Err(e @ ApiError::Status { .. }) => {
            log::warn!("api health check reported a problem: {e}");
            None
        }
        Err(e @ (ApiError::Network(_) | ApiError::Decode(_) | ApiError::Unavailable)) => {
            log::error!("api health check failed: {e}");
            Some(HEALTH_FAILED)
        }
    }
}
