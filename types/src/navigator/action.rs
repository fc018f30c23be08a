//! Actions and the transition function.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use super::state::{ActiveSection, NavigatorState};
use crate::section::SectionId;

/// Everything a host can ask the navigator to do.
///
/// Wire shape: `{"type": "reset"}`, `{"type": "goTo", "sectionId": ...}`,
/// `{"type": "goToNextSection"}`. Anything else (an unknown `type`, a `goTo`
/// without a usable `sectionId`, a value with no `type` at all) decodes to
/// [`Action::Unrecognized`], which leaves the state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Action<T> {
    /// Back to the starting point the navigator was built with.
    Reset,
    /// Open a specific section. Unknown ids land on the summary.
    GoTo {
        #[serde(rename = "sectionId")]
        section_id: T,
    },
    /// Submit the open section and move on.
    GoToNextSection,
    Unrecognized,
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
enum TaggedAction<T> {
    Reset,
    GoTo {
        #[serde(rename = "sectionId")]
        section_id: T,
    },
    GoToNextSection,
    #[serde(other)]
    Unrecognized,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireAction<T> {
    Tagged(TaggedAction<T>),
    Malformed(IgnoredAny),
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Action<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let action = match WireAction::deserialize(deserializer)? {
            WireAction::Tagged(TaggedAction::Reset) => Action::Reset,
            WireAction::Tagged(TaggedAction::GoTo { section_id }) => Action::GoTo { section_id },
            WireAction::Tagged(TaggedAction::GoToNextSection) => Action::GoToNextSection,
            WireAction::Tagged(TaggedAction::Unrecognized) | WireAction::Malformed(_) => {
                Action::Unrecognized
            }
        };
        Ok(action)
    }
}

impl<T> Action<T> {
    #[must_use]
    pub fn go_to(section_id: T) -> Self {
        Action::GoTo { section_id }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Action::Reset => "reset",
            Action::GoTo { .. } => "goTo",
            Action::GoToNextSection => "goToNextSection",
            Action::Unrecognized => "unrecognized",
        }
    }
}

impl<T: SectionId> NavigatorState<T> {
    /// Compute the state that follows `action`. Never fails.
    #[must_use]
    pub fn transition(&self, action: &Action<T>) -> Self {
        match action {
            Action::Reset => self.initial(),
            Action::GoTo { section_id } => self.go_to(section_id),
            Action::GoToNextSection => self.go_to_next_section(),
            Action::Unrecognized => {
                tracing::warn!("Ignoring unrecognized navigator action");
                self.clone()
            }
        }
    }

    fn go_to(&self, section_id: &T) -> Self {
        if self.sections.contains(section_id) {
            self.with_active(ActiveSection::Section(section_id.clone()), self.has_visited_summary)
        } else {
            tracing::debug!(?section_id, "goTo target is not a section; showing summary");
            self.with_active(ActiveSection::Summary, true)
        }
    }

    fn go_to_next_section(&self) -> Self {
        let current = match self.active_index() {
            Some(index) if !self.has_visited_summary => index,
            // Already finished once, or nothing known is open.
            _ => return self.with_active(ActiveSection::Summary, self.has_visited_summary),
        };

        match self.sections.get(current + 1) {
            Some(next) => self.with_active(ActiveSection::Section(next.clone()), false),
            None => self.with_active(ActiveSection::Summary, true),
        }
    }
}

/// Free-function form of [`NavigatorState::transition`].
#[must_use]
pub fn transition<T: SectionId>(state: &NavigatorState<T>, action: &Action<T>) -> NavigatorState<T> {
    state.transition(action)
}
