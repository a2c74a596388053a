use super::*;

// =============================================================
// Section ids
// =============================================================

#[test]
fn section_ids_round_trip() {
    for section in Section::ALL {
        assert_eq!(Section::from_id(section.id()), Some(section));
    }
}

#[test]
fn from_id_accepts_anchor_form() {
    assert_eq!(Section::from_id("#tasks"), Some(Section::Tasks));
}

#[test]
fn from_id_rejects_unknown() {
    assert_eq!(Section::from_id("settings"), None);
    assert_eq!(Section::from_id(""), None);
}

// =============================================================
// SectionState
// =============================================================

#[test]
fn default_state_is_dashboard() {
    let state = SectionState::default();
    assert_eq!(state.active, Section::Dashboard);
    assert_eq!(state.generation, 0);
}

#[test]
fn show_activates_section_and_issues_current_ticket() {
    let mut state = SectionState::default();
    let ticket = state.show(Section::Projects);
    assert_eq!(state.active, Section::Projects);
    assert_eq!(ticket.section, Section::Projects);
    assert!(state.is_current(ticket));
}

#[test]
fn showing_same_section_twice_issues_new_ticket() {
    let mut state = SectionState::default();
    let first = state.show(Section::Tasks);
    let second = state.show(Section::Tasks);
    assert_ne!(first, second);
    assert!(!state.is_current(first));
    assert!(state.is_current(second));
}

#[test]
fn navigating_away_makes_previous_ticket_stale() {
    let mut state = SectionState::default();
    let projects = state.show(Section::Projects);
    let users = state.show(Section::Users);
    assert!(!state.is_current(projects));
    assert!(state.is_current(users));
}

#[test]
fn show_id_ignores_unknown_ids() {
    let mut state = SectionState::default();
    let ticket = state.show(Section::Users);
    assert!(state.show_id("reports").is_none());
    assert_eq!(state.active, Section::Users);
    assert!(state.is_current(ticket));
}

#[test]
fn reload_reissues_active_section() {
    let mut state = SectionState::default();
    let first = state.show(Section::Projects);
    let reloaded = state.reload();
    assert_eq!(reloaded.section, Section::Projects);
    assert!(!state.is_current(first));
    assert!(state.is_current(reloaded));
}
