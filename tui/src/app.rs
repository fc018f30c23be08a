//! Application state driven by the TUI.
//!
//! `App` is the host for a [`SectionNavigator`]: it renders from the
//! navigator's state, dispatches actions on key presses, and consults
//! `can_edit_section` before reopening a section.

use formnav_config::{FormConfig, SectionConfig};
use formnav_types::ui::UiOptions;
use formnav_types::{Action, NavigatorState, SectionNavigator, SectionStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    fn info(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            text: text.into(),
        }
    }

    fn warning(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Warning,
            text: text.into(),
        }
    }
}

#[derive(Debug)]
pub struct App {
    form: FormConfig,
    navigator: SectionNavigator<String>,
    /// Highlighted row in the section list.
    cursor: usize,
    ui_options: UiOptions,
    status: Option<StatusMessage>,
    should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(form: FormConfig, ui_options: UiOptions) -> Self {
        let navigator = form.build_navigator();
        let cursor = navigator.state().active_index().unwrap_or(0);
        tracing::info!(
            title = form.title(),
            sections = form.sections().len(),
            "Form loaded"
        );
        Self {
            form,
            navigator,
            cursor,
            ui_options,
            status: None,
            should_quit: false,
        }
    }

    #[must_use]
    pub fn form(&self) -> &FormConfig {
        &self.form
    }

    #[must_use]
    pub fn state(&self) -> &NavigatorState<String> {
        self.navigator.state()
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui_options
    }

    #[must_use]
    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// The section the open navigator state points at, if any.
    #[must_use]
    pub fn active_section(&self) -> Option<&SectionConfig> {
        self.state()
            .active_section_id()
            .and_then(|id| self.form.section(id))
    }

    #[must_use]
    pub fn selected_section(&self) -> Option<&SectionConfig> {
        self.form.sections().get(self.cursor)
    }

    #[must_use]
    pub fn section_status(&self, section: &SectionConfig) -> SectionStatus {
        self.navigator.section_status(&section.id().to_string())
    }

    pub fn dispatch(&mut self, action: Action<String>) {
        self.navigator.dispatch(action);
        if let Some(index) = self.navigator.state().active_index() {
            self.cursor = index;
        }
    }

    /// Submit the open section and move on.
    pub fn submit_section(&mut self) {
        if self.state().is_at_summary() {
            self.status = Some(StatusMessage::info(
                "All sections complete. Press e to edit one or r to start over.",
            ));
            return;
        }
        self.status = None;
        self.dispatch(Action::GoToNextSection);
        if self.state().is_at_summary() {
            self.status = Some(StatusMessage::info("Review your answers."));
        }
    }

    /// Reopen the highlighted section, if the navigator allows it.
    pub fn edit_selected(&mut self) {
        let Some(section) = self.selected_section() else {
            return;
        };
        let id = section.id().to_string();
        let title = section.title().to_string();

        if self.navigator.can_edit_section(&id) {
            self.status = None;
            self.dispatch(Action::go_to(id));
        } else if self.state().is_active(&id) {
            self.status = Some(StatusMessage::info(format!("{title} is already open.")));
        } else {
            tracing::debug!(section = %id, "Edit refused");
            self.status = Some(StatusMessage::warning(format!(
                "{title} can't be edited yet."
            )));
        }
    }

    pub fn reset(&mut self) {
        self.dispatch(Action::Reset);
        self.cursor = self.state().active_index().unwrap_or(0);
        self.status = Some(StatusMessage::info("Form reset."));
    }

    pub fn move_cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_down(&mut self) {
        let last = self.form.sections().len().saturating_sub(1);
        self.cursor = (self.cursor + 1).min(last);
    }
}
