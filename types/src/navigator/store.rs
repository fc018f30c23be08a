//! Owning cell for a navigator, as handed to a UI host.

use super::action::Action;
use super::edit::SectionStatus;
use super::state::{NavigatorOptions, NavigatorState};
use crate::section::{SectionId, SectionList};

/// Holds the current [`NavigatorState`] and applies actions to it.
///
/// This is the contract a UI component consumes: read [`state`], send
/// [`dispatch`], ask [`can_edit_section`] before drawing each section.
/// `dispatch` takes `&mut self`, so actions are applied one at a time and
/// every read after a dispatch sees the new state.
///
/// [`state`]: SectionNavigator::state
/// [`dispatch`]: SectionNavigator::dispatch
/// [`can_edit_section`]: SectionNavigator::can_edit_section
#[derive(Debug, Clone)]
pub struct SectionNavigator<T> {
    state: NavigatorState<T>,
}

impl<T: SectionId> SectionNavigator<T> {
    #[must_use]
    pub fn new(sections: impl Into<SectionList<T>>, options: NavigatorOptions<T>) -> Self {
        Self {
            state: NavigatorState::new(sections, options),
        }
    }

    #[must_use]
    pub fn state(&self) -> &NavigatorState<T> {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action<T>) {
        let next = self.state.transition(&action);
        if next != self.state {
            tracing::debug!(
                action = action.name(),
                active = ?next.active_section_id(),
                visited_summary = next.has_visited_summary(),
                "Navigator state changed"
            );
        }
        self.state = next;
    }

    #[must_use]
    pub fn can_edit_section(&self, section_id: &T) -> bool {
        self.state.can_edit(section_id)
    }

    #[must_use]
    pub fn section_status(&self, section_id: &T) -> SectionStatus {
        self.state.section_status(section_id)
    }

    #[must_use]
    pub fn into_state(self) -> NavigatorState<T> {
        self.state
    }
}

impl<T: SectionId> From<NavigatorState<T>> for SectionNavigator<T> {
    fn from(state: NavigatorState<T>) -> Self {
        Self { state }
    }
}
