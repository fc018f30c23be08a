//! Section navigator: state, actions, and editability.
//!
//! Pure data and pure functions. The host owns a [`SectionNavigator`] (or a
//! bare [`NavigatorState`]) and moves it forward one [`Action`] at a time.

mod action;
mod edit;
mod state;
mod store;

pub use action::{Action, transition};
pub use edit::{Progress, SectionStatus, can_edit};
pub use state::{ActiveSection, InitialSection, NavigatorOptions, NavigatorState};
pub use store::SectionNavigator;
