//! Checklist editor UI Module
//!
//! MVVM split:
//! - model.rs: API functions (catalogues, fetch, save)
//! - view_model.rs: builder state and commands
//! - view.rs: Leptos component (pure UI)

pub mod model;
mod view;
mod view_model;

pub use view::ChecklistDetails;
pub use view_model::ChecklistDetailsViewModel;
