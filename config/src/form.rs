//! Form definitions: the ordered sections a navigator walks through.

use serde::Deserialize;

use formnav_types::{InitialSection, NavigatorOptions, SectionNavigator};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormConfigError {
    #[error("section {index} has an empty id")]
    EmptySectionId { index: usize },
    #[error("section id `{0}` is defined more than once")]
    DuplicateSectionId(String),
    #[error("initial_section `{0}` is not one of the form's sections")]
    UnknownInitialSection(String),
    #[error("initial_section and start_at_summary cannot both be set")]
    ConflictingStart,
}

#[derive(Deserialize)]
struct RawSectionConfig {
    id: String,
    title: Option<String>,
    description: Option<String>,
}

#[derive(Deserialize)]
struct RawFormConfig {
    title: Option<String>,
    #[serde(default)]
    sections: Vec<RawSectionConfig>,
    initial_section: Option<String>,
    #[serde(default)]
    start_at_summary: bool,
}

/// One step of a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionConfig {
    id: String,
    title: String,
    description: Option<String>,
}

impl SectionConfig {
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Validated form definition.
///
/// Invariant: section ids are non-empty and unique, and a configured starting
/// section is one of them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawFormConfig")]
pub struct FormConfig {
    title: String,
    sections: Vec<SectionConfig>,
    start: Option<InitialSection<String>>,
}

impl TryFrom<RawFormConfig> for FormConfig {
    type Error = FormConfigError;

    fn try_from(raw: RawFormConfig) -> Result<Self, Self::Error> {
        let mut sections: Vec<SectionConfig> = Vec::with_capacity(raw.sections.len());
        for (index, section) in raw.sections.into_iter().enumerate() {
            let id = section.id.trim().to_string();
            if id.is_empty() {
                return Err(FormConfigError::EmptySectionId { index });
            }
            if sections.iter().any(|existing| existing.id == id) {
                return Err(FormConfigError::DuplicateSectionId(id));
            }
            let title = section
                .title
                .filter(|title| !title.trim().is_empty())
                .unwrap_or_else(|| id.clone());
            sections.push(SectionConfig {
                id,
                title,
                description: section.description,
            });
        }

        let start = match (raw.initial_section, raw.start_at_summary) {
            (Some(_), true) => return Err(FormConfigError::ConflictingStart),
            (None, true) => Some(InitialSection::Summary),
            (Some(id), false) => {
                let id = id.trim().to_string();
                if !sections.iter().any(|section| section.id == id) {
                    return Err(FormConfigError::UnknownInitialSection(id));
                }
                Some(InitialSection::Section(id))
            }
            (None, false) => None,
        };

        Ok(Self {
            title: raw.title.unwrap_or_else(|| "Form".to_string()),
            sections,
            start,
        })
    }
}

impl FormConfig {
    /// Built-in three step form used when no config file exists.
    #[must_use]
    pub fn demo() -> Self {
        Self {
            title: "Checkout".to_string(),
            sections: vec![
                SectionConfig::new("shipping", "Shipping address")
                    .with_description("Where the order should be delivered."),
                SectionConfig::new("billing", "Billing details")
                    .with_description("Card and invoice address."),
                SectionConfig::new("notifications", "Notifications")
                    .with_description("How we keep you posted about the order."),
            ],
            start: None,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn sections(&self) -> &[SectionConfig] {
        &self.sections
    }

    #[must_use]
    pub fn section(&self, id: &str) -> Option<&SectionConfig> {
        self.sections.iter().find(|section| section.id == id)
    }

    #[must_use]
    pub fn section_ids(&self) -> Vec<String> {
        self.sections.iter().map(|section| section.id.clone()).collect()
    }

    #[must_use]
    pub fn navigator_options(&self) -> NavigatorOptions<String> {
        NavigatorOptions {
            initial_active_section: self.start.clone(),
        }
    }

    #[must_use]
    pub fn build_navigator(&self) -> SectionNavigator<String> {
        SectionNavigator::new(self.section_ids(), self.navigator_options())
    }
}
