//! Core domain types for formnav.
//!
//! Tracks progress through a multi-step form: which section is open, whether
//! the summary has been reached, and which sections may be reopened. No IO,
//! no async; everything here can be used from any layer of the application.

mod section;
pub mod navigator;
pub mod ui;

pub use navigator::{
    Action, ActiveSection, InitialSection, NavigatorOptions, NavigatorState, Progress,
    SectionNavigator, SectionStatus, can_edit, transition,
};
pub use section::{SectionId, SectionList};
