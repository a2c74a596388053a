//! Section navigation state.
//!
//! DESIGN
//! ======
//! Every `show` bumps a generation counter and hands back a [`LoadTicket`].
//! A load started for a ticket may only paint if the ticket is still current
//! when the load finishes; later navigation makes earlier tickets stale, so a
//! slow response can no longer overwrite the section the user moved to.

#[cfg(test)]
#[path = "section_test.rs"]
mod section_test;

/// Mutually exclusive top-level views.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Dashboard,
    Projects,
    Tasks,
    Users,
}

impl Section {
    /// Navigation order.
    pub const ALL: [Section; 4] = [Section::Dashboard, Section::Projects, Section::Tasks, Section::Users];

    /// Stable identifier (also used as the anchor in nav links).
    pub fn id(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Projects => "projects",
            Self::Tasks => "tasks",
            Self::Users => "users",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id.trim_start_matches('#'))
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Projects => "Projects",
            Self::Tasks => "Tasks",
            Self::Users => "Users",
        }
    }
}

/// Handle for one section load; compare against [`SectionState::is_current`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    pub section: Section,
    pub generation: u64,
}

/// Which section is visible and which load generation owns it.
#[derive(Clone, Debug, Default)]
pub struct SectionState {
    pub active: Section,
    pub generation: u64,
}

impl SectionState {
    /// Activate `section` and issue a fresh ticket. Showing the active
    /// section again is not a no-op: it issues a new ticket so the load reruns.
    pub fn show(&mut self, section: Section) -> LoadTicket {
        self.active = section;
        self.generation += 1;
        LoadTicket { section, generation: self.generation }
    }

    /// [`Self::show`] by identifier. Unknown ids leave state untouched.
    pub fn show_id(&mut self, id: &str) -> Option<LoadTicket> {
        Section::from_id(id).map(|section| self.show(section))
    }

    /// Re-issue a ticket for the active section.
    pub fn reload(&mut self) -> LoadTicket {
        self.show(self.active)
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.generation == self.generation && ticket.section == self.active
    }
}
