//! Editability rules derived from the current state.

use super::state::NavigatorState;
use crate::section::SectionId;

/// How a section should be presented for the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionStatus {
    /// Open for input right now.
    Active,
    /// Closed, but the user may reopen it.
    Editable,
    /// Closed and not reachable from here.
    Locked,
}

/// Number of sections behind the user, for progress display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

impl<T: SectionId> NavigatorState<T> {
    /// Whether `section_id` may be reopened for editing.
    ///
    /// Checks run in a fixed order:
    /// 1. the open section is never "editable" (it is already open),
    /// 2. on the summary every section is editable,
    /// 3. after the summary has been seen, nothing else is editable while a
    ///    section is open,
    /// 4. otherwise only sections before the open one are editable.
    ///
    /// Swapping 2 and 3 changes what the summary view allows.
    #[must_use]
    pub fn can_edit(&self, section_id: &T) -> bool {
        if self.is_active(section_id) {
            return false;
        }
        if self.is_at_summary() {
            return true;
        }
        if self.has_visited_summary {
            return false;
        }
        // `None` orders before any index: ids outside the list count as
        // earlier than a known open section, and an unknown open section
        // unlocks nothing.
        let target = self.sections.position(section_id);
        let active = self.active_index();
        active.is_some() && target < active
    }

    #[must_use]
    pub fn section_status(&self, section_id: &T) -> SectionStatus {
        if self.is_active(section_id) {
            SectionStatus::Active
        } else if self.can_edit(section_id) {
            SectionStatus::Editable
        } else {
            SectionStatus::Locked
        }
    }

    /// Sections behind the user. Once the summary has been seen the whole
    /// form counts as complete, even while a section is reopened.
    #[must_use]
    pub fn progress(&self) -> Progress {
        let total = self.sections.len();
        let completed = if self.is_at_summary() || self.has_visited_summary {
            total
        } else {
            self.active_index().unwrap_or(0)
        };
        Progress { completed, total }
    }
}

/// Free-function form of [`NavigatorState::can_edit`].
#[must_use]
pub fn can_edit<T: SectionId>(state: &NavigatorState<T>, section_id: &T) -> bool {
    state.can_edit(section_id)
}
