//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use std::io::Write;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::TestBackend;

use formnav_config::FormnavConfig;
use formnav_tui::{App, draw, handle_key};

/// Three sections, mirroring a typical wizard.
pub const THREE_SECTION_FORM: &str = r#"
[form]
title = "Test form"

[[form.sections]]
id = "sectionOne"
title = "Section one"

[[form.sections]]
id = "sectionTwo"
title = "Section two"

[[form.sections]]
id = "sectionThree"
title = "Section three"
"#;

/// Write `contents` to a temp file and load it as a config.
pub fn load_config(contents: &str) -> FormnavConfig {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    FormnavConfig::load_from(file.path()).expect("valid config")
}

pub fn three_section_app() -> App {
    let config = load_config(THREE_SECTION_FORM);
    App::new(config.form_or_demo(), config.app.ui_options())
}

pub fn press(app: &mut App, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

/// Active section id, `None` on the summary.
pub fn active(app: &App) -> Option<&str> {
    app.state().active_section_id().map(String::as_str)
}

/// Move the cursor to `index` and press `e`.
pub fn edit(app: &mut App, index: usize) {
    while app.cursor() > index {
        press(app, KeyCode::Up);
    }
    while app.cursor() < index {
        press(app, KeyCode::Down);
    }
    press(app, KeyCode::Char('e'));
}

/// Render one frame and return the screen as text, one line per row.
pub fn render(app: &App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
    terminal.draw(|frame| draw(frame, app)).expect("draw");
    let buffer = terminal.backend().buffer();
    buffer
        .content()
        .chunks(usize::from(width))
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
