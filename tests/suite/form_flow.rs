//! Keyboard-driven walkthroughs of a three-section form.

use crossterm::event::KeyCode;

use formnav_types::SectionStatus;

use crate::common::{THREE_SECTION_FORM, active, edit, load_config, press, render, three_section_app};

#[test]
fn first_section_is_open_by_default() {
    let app = three_section_app();
    assert_eq!(active(&app), Some("sectionOne"));

    let screen = render(&app, 80, 20);
    assert!(screen.contains("Test form"));
    assert!(screen.contains("Step 1 of 3"));
    assert!(screen.contains("Enter to submit this section"));
}

#[test]
fn clicking_through_reaches_summary() {
    let mut app = three_section_app();

    press(&mut app, KeyCode::Enter);
    assert_eq!(active(&app), Some("sectionTwo"));
    press(&mut app, KeyCode::Enter);
    assert_eq!(active(&app), Some("sectionThree"));
    press(&mut app, KeyCode::Enter);
    assert_eq!(active(&app), None);

    let screen = render(&app, 80, 20);
    assert!(screen.contains("Review your answers"));
    assert!(screen.contains("3/3 complete"));
}

#[test]
fn cannot_edit_ahead_of_progress() {
    let mut app = three_section_app();
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);
    assert_eq!(active(&app), Some("sectionThree"));

    edit(&mut app, 0);
    assert_eq!(active(&app), Some("sectionOne"));

    let sections = app.form().sections().to_vec();
    assert_eq!(app.section_status(&sections[0]), SectionStatus::Active);
    assert_eq!(app.section_status(&sections[1]), SectionStatus::Locked);
    assert_eq!(app.section_status(&sections[2]), SectionStatus::Locked);

    edit(&mut app, 2);
    assert_eq!(active(&app), Some("sectionOne"));
    let screen = render(&app, 80, 20);
    assert!(screen.contains("Section three can't be edited yet."));
}

#[test]
fn editing_after_summary_returns_to_summary_on_submit() {
    let mut app = three_section_app();
    for _ in 0..3 {
        press(&mut app, KeyCode::Enter);
    }
    assert_eq!(active(&app), None);

    edit(&mut app, 0);
    assert_eq!(active(&app), Some("sectionOne"));
    assert!(app.state().has_visited_summary());

    let screen = render(&app, 80, 20);
    assert!(screen.contains("Step 1 of 3"));
    assert!(screen.contains("3/3 complete"));

    press(&mut app, KeyCode::Enter);
    assert_eq!(active(&app), None);
}

#[test]
fn everything_is_editable_from_summary() {
    let mut app = three_section_app();
    for _ in 0..3 {
        press(&mut app, KeyCode::Enter);
    }
    for section in app.form().sections() {
        assert_eq!(app.section_status(section), SectionStatus::Editable);
    }

    edit(&mut app, 1);
    assert_eq!(active(&app), Some("sectionTwo"));
}

#[test]
fn reset_key_starts_over() {
    let mut app = three_section_app();
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('r'));
    assert_eq!(active(&app), Some("sectionOne"));
    assert!(!app.state().has_visited_summary());
}

#[test]
fn configured_start_section_is_honoured() {
    let toml = THREE_SECTION_FORM.replace(
        "title = \"Test form\"",
        "title = \"Test form\"\ninitial_section = \"sectionTwo\"",
    );
    let config = load_config(&toml);
    let mut app = formnav_tui::App::new(config.form_or_demo(), config.app.ui_options());
    assert_eq!(active(&app), Some("sectionTwo"));

    edit(&mut app, 0);
    assert_eq!(active(&app), Some("sectionOne"));
}

#[test]
fn ascii_mode_renders_plain_glyphs() {
    let toml = format!("[app]\nascii_only = true\n{THREE_SECTION_FORM}");
    let config = load_config(&toml);
    let app = formnav_tui::App::new(config.form_or_demo(), config.app.ui_options());

    let screen = render(&app, 80, 20);
    assert!(screen.contains("> Section one"));
    assert!(!screen.contains("▶"));
}
