//! Driving a navigator from serialized actions.

use formnav_types::{Action, NavigatorOptions, SectionNavigator};

fn replay(options: &str, actions: &str) -> SectionNavigator<String> {
    let options: NavigatorOptions<String> = serde_json::from_str(options).unwrap();
    let actions: Vec<Action<String>> = serde_json::from_str(actions).unwrap();

    let sections = ["sectionOne", "sectionTwo", "sectionThree", "sectionFour"]
        .map(String::from)
        .to_vec();
    let mut nav = SectionNavigator::new(sections, options);
    for action in actions {
        nav.dispatch(action);
    }
    nav
}

#[test]
fn walks_to_summary_and_resets() {
    let nav = replay(
        "{}",
        r#"[
            {"type": "goToNextSection"},
            {"type": "goToNextSection"},
            {"type": "goToNextSection"},
            {"type": "goToNextSection"},
            {"type": "goTo", "sectionId": "sectionOne"},
            {"type": "reset"}
        ]"#,
    );
    assert_eq!(nav.state().active_section_id().map(String::as_str), Some("sectionOne"));
    assert!(!nav.state().has_visited_summary());
}

#[test]
fn unknown_action_types_are_ignored() {
    let nav = replay(
        "{}",
        r#"[{"type": "goToNextSection"}, {"type": "unhandled"}]"#,
    );
    assert_eq!(nav.state().active_section_id().map(String::as_str), Some("sectionTwo"));
}

#[test]
fn null_start_opens_summary_then_go_to() {
    let nav = replay(
        r#"{"initialActiveSectionId": null}"#,
        r#"[{"type": "goTo", "sectionId": "sectionTwo"}]"#,
    );
    assert_eq!(nav.state().active_section_id().map(String::as_str), Some("sectionTwo"));
    assert!(nav.state().has_visited_summary());
}

#[test]
fn empty_string_start_means_first_section() {
    let nav = replay(r#"{"initialActiveSectionId": ""}"#, "[]");
    assert_eq!(nav.state().active_section_id().map(String::as_str), Some("sectionOne"));
    assert!(!nav.state().has_visited_summary());
}

#[test]
fn malformed_actions_in_a_batch_are_skipped() {
    let nav = replay(
        "{}",
        r#"[
            {"type": "goToNextSection"},
            {"type": "goTo"},
            {"kind": "reset"},
            {"type": "goToNextSection"}
        ]"#,
    );
    assert_eq!(nav.state().active_section_id().map(String::as_str), Some("sectionThree"));
}
