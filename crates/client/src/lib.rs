//! UI-independent engine of the CIDSON console.
//!
//! Everything that talks to the REST backend goes through [`transport::Transport`],
//! so the same list controller, session handling and checklist builder run in
//! the browser (gloo-net) and under unit tests (in-memory fake backend).

pub mod api;
pub mod checklist_builder;
pub mod config;
pub mod error;
pub mod list_resource;
pub mod nav;
pub mod session;
pub mod transport;

#[cfg(test)]
mod fake_backend;

pub use api::{ApiClient, ListQuery};
pub use checklist_builder::{BuilderError, ChecklistBuilder};
pub use config::{load_config, ConsoleConfig};
pub use error::ApiError;
pub use list_resource::{
    scope_from_empresa, FetchPlan, ListPhase, ListResource, ListState, Notice, NoticeLevel,
    PageButton,
};
pub use nav::{
    detail_path, edit_path, list_path, login_path, new_path, return_path, RouteContext,
};
pub use session::{MemorySessionStore, SessionEvent, SessionListeners, SessionStore};
pub use transport::{HttpRequest, HttpResponse, Method, Transport};
