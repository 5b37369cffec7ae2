use crate::domain::common::{Estado, FieldSpec, RecordId, Resource, ResourcePayload};
use serde::{Deserialize, Serialize};

/// Motivo registrado al reportar una incidencia
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Motivo {
    pub id: RecordId,
    pub nombre: String,

    #[serde(default)]
    pub descripcion: Option<String>,

    pub estado: Estado,
}

impl Resource for Motivo {
    type Payload = MotivoDto;

    fn id(&self) -> RecordId {
        self.id
    }

    fn nombre(&self) -> &str {
        &self.nombre
    }

    fn estado(&self) -> Estado {
        self.estado
    }

    fn to_payload(&self) -> MotivoDto {
        MotivoDto {
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
        "a005"
    }

    fn collection_name() -> &'static str {
        "motivos"
    }

    fn element_name() -> &'static str {
        "Motivo"
    }

    fn list_name() -> &'static str {
        "Motivos"
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
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MotivoDto {
    pub nombre: String,
    pub descripcion: Option<String>,
}

impl ResourcePayload for MotivoDto {
    fn nombre(&self) -> &str {
        &self.nombre
    }
}
