use crate::domain::common::{Estado, FieldSpec, RecordId, Resource, ResourcePayload};
use serde::{Deserialize, Serialize};

/// Zona dentro de un área
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zona {
    pub id: RecordId,
    pub nombre: String,

    #[serde(default)]
    pub descripcion: Option<String>,

    pub estado: Estado,
}

impl Resource for Zona {
    type Payload = ZonaDto;

    fn id(&self) -> RecordId {
        self.id
    }

    fn nombre(&self) -> &str {
        &self.nombre
    }

    fn estado(&self) -> Estado {
        self.estado
    }

    fn to_payload(&self) -> ZonaDto {
        ZonaDto {
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
        "a007"
    }

    fn collection_name() -> &'static str {
        "zonas"
    }

    fn element_name() -> &'static str {
        "Zona"
    }

    fn list_name() -> &'static str {
        "Zonas"
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
pub struct ZonaDto {
    pub nombre: String,
    pub descripcion: Option<String>,
}

impl ResourcePayload for ZonaDto {
    fn nombre(&self) -> &str {
        &self.nombre
    }
}
