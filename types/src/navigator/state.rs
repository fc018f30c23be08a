//! Navigator state and its construction rules.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::section::{SectionId, SectionList};

/// Which section is open, or the summary view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveSection<T> {
    Section(T),
    /// No section is open; the user is looking at the summary.
    Summary,
}

impl<T> ActiveSection<T> {
    #[must_use]
    pub fn section(&self) -> Option<&T> {
        match self {
            ActiveSection::Section(id) => Some(id),
            ActiveSection::Summary => None,
        }
    }

    #[must_use]
    pub fn is_summary(&self) -> bool {
        matches!(self, ActiveSection::Summary)
    }
}

/// Requested starting point for a navigator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitialSection<T> {
    Section(T),
    /// Start on the summary view, as if the form had already been completed.
    Summary,
}

/// Construction options, kept on the state so `reset` can replay them.
///
/// Serialized as `{"initialActiveSectionId": ...}`: a `null` value selects
/// [`InitialSection::Summary`], an omitted key leaves the option unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>"))]
pub struct NavigatorOptions<T> {
    #[serde(
        rename = "initialActiveSectionId",
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_initial",
        deserialize_with = "deserialize_initial"
    )]
    pub initial_active_section: Option<InitialSection<T>>,
}

impl<T> Default for NavigatorOptions<T> {
    fn default() -> Self {
        Self {
            initial_active_section: None,
        }
    }
}

impl<T> NavigatorOptions<T> {
    #[must_use]
    pub fn starting_at(section_id: T) -> Self {
        Self {
            initial_active_section: Some(InitialSection::Section(section_id)),
        }
    }

    #[must_use]
    pub fn starting_at_summary() -> Self {
        Self {
            initial_active_section: Some(InitialSection::Summary),
        }
    }
}

#[allow(clippy::ref_option)] // signature required by serde(serialize_with)
fn serialize_initial<S, T>(value: &Option<InitialSection<T>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Serialize,
{
    match value {
        Some(InitialSection::Section(id)) => serializer.serialize_some(id),
        Some(InitialSection::Summary) | None => serializer.serialize_none(),
    }
}

fn deserialize_initial<'de, D, T>(deserializer: D) -> Result<Option<InitialSection<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let initial = match Option::<T>::deserialize(deserializer)? {
        Some(id) => InitialSection::Section(id),
        None => InitialSection::Summary,
    };
    Ok(Some(initial))
}

/// Navigation state for one multi-step form.
///
/// Values are immutable from the outside; the only way to move is
/// [`NavigatorState::transition`], which returns the next state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigatorState<T> {
    pub(super) sections: SectionList<T>,
    pub(super) active: ActiveSection<T>,
    pub(super) has_visited_summary: bool,
    pub(super) options: NavigatorOptions<T>,
}

impl<T: SectionId> NavigatorState<T> {
    /// Build the starting state.
    ///
    /// An explicit summary start marks the summary as visited. An omitted or
    /// blank starting id falls back to the first section (or the summary when
    /// there are no sections). A concrete id is taken as-is, even when it is
    /// not one of `sections`.
    #[must_use]
    pub fn new(sections: impl Into<SectionList<T>>, options: NavigatorOptions<T>) -> Self {
        let sections = sections.into();
        let first = || {
            sections
                .first()
                .cloned()
                .map_or(ActiveSection::Summary, ActiveSection::Section)
        };

        let (active, has_visited_summary) = match &options.initial_active_section {
            Some(InitialSection::Summary) => (ActiveSection::Summary, true),
            Some(InitialSection::Section(id)) if !id.is_blank() => {
                (ActiveSection::Section(id.clone()), false)
            }
            Some(InitialSection::Section(_)) | None => (first(), false),
        };

        Self {
            sections,
            active,
            has_visited_summary,
            options,
        }
    }

    /// Fresh state from the sections and options this state was built with.
    #[must_use]
    pub fn initial(&self) -> Self {
        Self::new(self.sections.clone(), self.options.clone())
    }

    #[must_use]
    pub fn sections(&self) -> &SectionList<T> {
        &self.sections
    }

    #[must_use]
    pub fn active(&self) -> &ActiveSection<T> {
        &self.active
    }

    /// The open section, `None` on the summary view.
    #[must_use]
    pub fn active_section_id(&self) -> Option<&T> {
        self.active.section()
    }

    #[must_use]
    pub fn has_visited_summary(&self) -> bool {
        self.has_visited_summary
    }

    #[must_use]
    pub fn options(&self) -> &NavigatorOptions<T> {
        &self.options
    }

    #[must_use]
    pub fn is_at_summary(&self) -> bool {
        self.active.is_summary()
    }

    #[must_use]
    pub fn is_active(&self, section_id: &T) -> bool {
        self.active.section() == Some(section_id)
    }

    /// Index of the open section within `sections`.
    ///
    /// `None` on the summary view, and also when the navigator was started on
    /// an id that is not part of the list.
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.active.section().and_then(|id| self.sections.position(id))
    }

    pub(super) fn with_active(&self, active: ActiveSection<T>, has_visited_summary: bool) -> Self {
        Self {
            sections: self.sections.clone(),
            active,
            has_visited_summary,
            options: self.options.clone(),
        }
    }
}
