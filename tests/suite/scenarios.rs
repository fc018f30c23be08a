//! End-to-end navigator scenarios through the public API.

use formnav_types::{Action, ActiveSection, NavigatorOptions, NavigatorState, SectionNavigator};

fn default_three() -> SectionNavigator<&'static str> {
    SectionNavigator::new(["S1", "S2", "S3"], NavigatorOptions::default())
}

#[test]
fn default_construction_opens_first_section() {
    let nav = default_three();
    assert_eq!(nav.state().active(), &ActiveSection::Section("S1"));
    assert!(!nav.state().has_visited_summary());
}

#[test]
fn submitting_every_section_reaches_summary() {
    let mut nav = default_three();

    nav.dispatch(Action::GoToNextSection);
    assert_eq!(nav.state().active_section_id(), Some(&"S2"));

    nav.dispatch(Action::GoToNextSection);
    assert_eq!(nav.state().active_section_id(), Some(&"S3"));

    nav.dispatch(Action::GoToNextSection);
    assert_eq!(nav.state().active(), &ActiveSection::Summary);
    assert!(nav.state().has_visited_summary());
}

#[test]
fn jumping_to_unknown_section_lands_on_summary() {
    let mut nav = default_three();
    nav.dispatch(Action::go_to("S9"));
    assert_eq!(nav.state().active(), &ActiveSection::Summary);
    assert!(nav.state().has_visited_summary());
}

#[test]
fn starting_mid_form_unlocks_only_earlier_sections() {
    let nav = SectionNavigator::new(["S1", "S2", "S3", "S4"], NavigatorOptions::starting_at("S3"));
    assert_eq!(nav.state().active_section_id(), Some(&"S3"));
    assert!(!nav.state().has_visited_summary());

    assert!(nav.can_edit_section(&"S1"));
    assert!(nav.can_edit_section(&"S2"));
    assert!(!nav.can_edit_section(&"S3"));
    assert!(!nav.can_edit_section(&"S4"));
}

#[test]
fn starting_on_summary_unlocks_everything() {
    let nav = SectionNavigator::new(["S1", "S2", "S3", "S4"], NavigatorOptions::starting_at_summary());
    assert_eq!(nav.state().active(), &ActiveSection::Summary);
    assert!(nav.state().has_visited_summary());
    for id in ["S1", "S2", "S3", "S4"] {
        assert!(nav.can_edit_section(&id));
    }
}

#[test]
fn reopening_after_summary_locks_later_sections() {
    let mut nav = default_three();
    for _ in 0..3 {
        nav.dispatch(Action::GoToNextSection);
    }

    nav.dispatch(Action::go_to("S1"));
    assert_eq!(nav.state().active_section_id(), Some(&"S1"));
    assert!(nav.state().has_visited_summary());
    assert!(!nav.can_edit_section(&"S2"));
}

#[test]
fn bare_state_and_free_functions_agree_with_navigator() {
    let state = NavigatorState::new(["S1", "S2", "S3"], NavigatorOptions::default());
    let next = formnav_types::transition(&state, &Action::GoToNextSection);

    let mut nav = SectionNavigator::from(state);
    nav.dispatch(Action::GoToNextSection);

    assert_eq!(nav.state(), &next);
    assert!(formnav_types::can_edit(&next, &"S1"));
    assert_eq!(nav.into_state(), next);
}

#[test]
fn empty_form_variants() {
    let plain = NavigatorState::<String>::new(Vec::new(), NavigatorOptions::default());
    assert!(plain.is_at_summary());

    let summary = NavigatorState::<String>::new(Vec::new(), NavigatorOptions::starting_at_summary());
    assert!(summary.is_at_summary());

    let blank = NavigatorState::<String>::new(Vec::new(), NavigatorOptions::starting_at(String::new()));
    assert!(blank.is_at_summary());
}
