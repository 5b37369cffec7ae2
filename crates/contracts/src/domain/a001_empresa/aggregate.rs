use crate::domain::common::{
    validate_nombre, Estado, FieldError, FieldSpec, RecordId, Resource, ResourcePayload,
    ScopeId, ScopeKind,
};
use serde::{Deserialize, Serialize};

// ============================================================================
// Resource
// ============================================================================

/// Empresa cliente. Top-level resource: every other catalogue hangs off the
/// configuration an empresa points to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Empresa {
    pub id: RecordId,
    pub nombre: String,

    #[serde(rename = "razonSocial", alias = "razon_social", default)]
    pub razon_social: String,

    #[serde(default)]
    pub ruc: Option<String>,

    /// Configuration scope derived by the backend; may be missing on legacy rows
    #[serde(default)]
    pub configuracion_id: Option<ScopeId>,

    pub estado: Estado,
}

impl Resource for Empresa {
    type Payload = EmpresaDto;

    fn id(&self) -> RecordId {
        self.id
    }

    fn nombre(&self) -> &str {
        &self.nombre
    }

    fn estado(&self) -> Estado {
        self.estado
    }

    fn to_payload(&self) -> EmpresaDto {
        EmpresaDto {
            nombre: self.nombre.clone(),
            razon_social: self.razon_social.clone(),
            ruc: self.ruc.clone(),
        }
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.nombre.clone(),
            self.razon_social.clone(),
            self.ruc.clone().unwrap_or_else(|| "-".to_string()),
        ]
    }

    fn resource_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "empresas"
    }

    fn element_name() -> &'static str {
        "Empresa"
    }

    fn list_name() -> &'static str {
        "Empresas"
    }

    fn columns() -> &'static [&'static str] {
        &["Nombre", "Razón social", "RUC"]
    }

    fn form_fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::text("nombre", "Nombre").required(),
            FieldSpec::text("razonSocial", "Razón social").required(),
            FieldSpec::text("ruc", "RUC"),
        ];
        FIELDS
    }

    fn scope_kind() -> ScopeKind {
        ScopeKind::Unscoped
    }

    fn is_feminine() -> bool {
        true
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Body of the store/update endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EmpresaDto {
    pub nombre: String,

    #[serde(rename = "razonSocial")]
    pub razon_social: String,

    pub ruc: Option<String>,
}

impl ResourcePayload for EmpresaDto {
    fn nombre(&self) -> &str {
        &self.nombre
    }

    fn validate(&self) -> Result<(), FieldError> {
        validate_nombre(&self.nombre)?;
        if self.razon_social.trim().is_empty() {
            return Err(FieldError::new(
                "razonSocial",
                "La razón social es obligatoria",
            ));
        }
        if let Some(ruc) = self.ruc.as_deref() {
            let digits = ruc.trim();
            if !digits.is_empty() && (digits.len() != 11 || !digits.chars().all(|c| c.is_ascii_digit())) {
                return Err(FieldError::new("ruc", "El RUC debe tener 11 dígitos"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_backend_shape() {
        let raw = r#"{"id":3,"nombre":"Limpiezas SAC","razonSocial":"Limpiezas del Sur SAC","estado":"Activo","configuracion_id":9}"#;
        let empresa: Empresa = serde_json::from_str(raw).unwrap();
        assert_eq!(empresa.id, RecordId(3));
        assert_eq!(empresa.configuracion_id, Some(ScopeId(9)));
        assert!(empresa.estado.is_active());
    }

    #[test]
    fn test_missing_configuracion_decodes_as_none() {
        let raw = r#"{"id":4,"nombre":"Sin config","razon_social":"X","estado":0}"#;
        let empresa: Empresa = serde_json::from_str(raw).unwrap();
        assert_eq!(empresa.configuracion_id, None);
        assert_eq!(empresa.razon_social, "X");
    }

    #[test]
    fn test_payload_has_no_id_or_estado() {
        let dto = EmpresaDto {
            nombre: "A".into(),
            razon_social: "B".into(),
            ruc: None,
        };
        let value = serde_json::to_value(&dto).unwrap();
        assert!(value.get("id").is_none());
        assert!(value.get("estado").is_none());
    }

    #[test]
    fn test_validate_ruc() {
        let mut dto = EmpresaDto {
            nombre: "A".into(),
            razon_social: "B".into(),
            ruc: Some("2045".into()),
        };
        assert_eq!(dto.validate().unwrap_err().field, "ruc");
        dto.ruc = Some("20451234567".into());
        assert!(dto.validate().is_ok());
    }
}
