//! Common types and traits for all console resources

pub mod entity_id;
pub mod estado;
pub mod field_spec;
pub mod resource;

// Re-exports
pub use entity_id::{EntityId, RecordId, ScopeId};
pub use estado::Estado;
pub use field_spec::{payload_from_fields, payload_to_fields, FieldKind, FieldSpec};
pub use resource::{validate_nombre, FieldError, Resource, ResourcePayload, ScopeKind};
