use crate::domain::common::{Estado, FieldSpec, RecordId, Resource, ResourcePayload};
use serde::{Deserialize, Serialize};

/// Área física de un local a limpiar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Area {
    pub id: RecordId,
    pub nombre: String,

    #[serde(default)]
    pub descripcion: Option<String>,

    pub estado: Estado,
}

impl Resource for Area {
    type Payload = AreaDto;

    fn id(&self) -> RecordId {
        self.id
    }

    fn nombre(&self) -> &str {
        &self.nombre
    }

    fn estado(&self) -> Estado {
        self.estado
    }

    fn to_payload(&self) -> AreaDto {
        AreaDto {
            nombre: self.nombre.clone(),
            descripcion: self.descripcion.clone(),
        }
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.nombre.clone(),
            self.descripcion.clone().unwrap_or_else(|| "-".to_string()),
        ]
    }

    fn resource_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "areas"
    }

    fn element_name() -> &'static str {
        "Area"
    }

    fn list_name() -> &'static str {
        "Areas"
    }

    fn columns() -> &'static [&'static str] {
        &["Nombre", "Descripción"]
    }

    fn form_fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::text("nombre", "Nombre").required(),
            FieldSpec::textarea("descripcion", "Descripción"),
        ];
        FIELDS
    }

    fn is_feminine() -> bool {
        true
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AreaDto {
    pub nombre: String,
    pub descripcion: Option<String>,
}

impl ResourcePayload for AreaDto {
    fn nombre(&self) -> &str {
        &self.nombre
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_string_estado() {
        let raw = r#"{"id":12,"nombre":"Cocina","descripcion":null,"estado":"Inactivo","configuracion_id":1}"#;
        let area: Area = serde_json::from_str(raw).unwrap();
        assert_eq!(area.estado, Estado::Inactivo);
        assert_eq!(area.row(), vec!["Cocina".to_string(), "-".to_string()]);
    }

    #[test]
    fn test_route_names() {
        assert_eq!(Area::full_name(), "a002_areas");
        assert!(Area::is_feminine());
        assert!(Area::scope_kind().requires_scope());
    }
}
