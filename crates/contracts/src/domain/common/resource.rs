use super::{Estado, FieldSpec, RecordId};
use serde::{de::DeserializeOwned, Serialize};
use std::fmt;

/// How the list and store endpoints of a resource are nested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    /// Top-level collection (`/api/empresas`)
    Unscoped,
    /// Nested under a configuration (`/api/areas/{configuracion_id}`)
    Configuracion,
}

impl ScopeKind {
    pub fn requires_scope(&self) -> bool {
        matches!(self, ScopeKind::Configuracion)
    }
}

/// Validation failure bound to a single form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for FieldError {}

/// Body sent to the store/update endpoints.
///
/// Never carries `id` or `estado`: the former is backend-assigned, the latter
/// only changes through the toggle endpoint.
pub trait ResourcePayload:
    Serialize + DeserializeOwned + Clone + Default + PartialEq + fmt::Debug + Send + Sync + 'static
{
    fn nombre(&self) -> &str;

    /// Client-side checks run before anything is sent
    fn validate(&self) -> Result<(), FieldError> {
        validate_nombre(self.nombre())
    }
}

/// Shared rule for the `nombre` field of every resource
pub fn validate_nombre(nombre: &str) -> Result<(), FieldError> {
    let trimmed = nombre.trim();
    if trimmed.is_empty() {
        return Err(FieldError::new("nombre", "El nombre es obligatorio"));
    }
    if trimmed.chars().count() > 255 {
        return Err(FieldError::new(
            "nombre",
            "El nombre no puede superar los 255 caracteres",
        ));
    }
    Ok(())
}

/// One managed record type of the console.
///
/// Each entity is a thin configuration over the generic list and form
/// machinery: endpoint segment, scope nesting, column layout and form schema.
pub trait Resource:
    Serialize + DeserializeOwned + Clone + PartialEq + fmt::Debug + Send + Sync + 'static
{
    type Payload: ResourcePayload;

    // ============================================================================
    // Instance data
    // ============================================================================

    fn id(&self) -> RecordId;

    fn nombre(&self) -> &str;

    fn estado(&self) -> Estado;

    /// Editable part of the record, as sent back on update
    fn to_payload(&self) -> Self::Payload;

    /// Cell values in the same order as [`Resource::columns`]
    fn row(&self) -> Vec<String>;

    // ============================================================================
    // Static metadata
    // ============================================================================

    /// Index of the resource in the system (e.g. "a001")
    fn resource_index() -> &'static str;

    /// Path segment of the REST endpoints and console routes (e.g. "empresas")
    fn collection_name() -> &'static str;

    /// Singular UI name (e.g. "Empresa")
    fn element_name() -> &'static str;

    /// Plural UI name (e.g. "Empresas")
    fn list_name() -> &'static str;

    /// Column headers of the list table, excluding the estado column
    fn columns() -> &'static [&'static str];

    /// Fields of the create/edit form
    fn form_fields() -> &'static [FieldSpec];

    fn scope_kind() -> ScopeKind {
        ScopeKind::Configuracion
    }

    /// Segment of the single-record endpoint: `show` or `detalle`
    fn show_segment() -> &'static str {
        "show"
    }

    /// Grammatical gender of the element name, picks `/nueva` over `/nuevo`
    fn is_feminine() -> bool {
        false
    }

    /// Full system name (e.g. "a001_empresas")
    fn full_name() -> String {
        format!("{}_{}", Self::resource_index(), Self::collection_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_nombre() {
        assert!(validate_nombre("Oficina").is_ok());
        assert_eq!(validate_nombre("   ").unwrap_err().field, "nombre");
        assert!(validate_nombre(&"x".repeat(256)).is_err());
    }
}
