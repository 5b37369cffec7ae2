//! List and form screens shared by every console resource.
//!
//! Entities only declare their metadata through [`contracts::domain::common::Resource`];
//! the per-entity components are thin wrappers around these two views.

pub mod form;
pub mod list;

pub use form::resource_form_view;
pub use list::{no_links, resource_list_view, ListOptions, RowLink};
