use crate::domain::common::{Estado, FieldSpec, RecordId, Resource, ResourcePayload};
use serde::{Deserialize, Serialize};

/// Actividad de limpieza realizada en una zona
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actividad {
    pub id: RecordId,
    pub nombre: String,

    #[serde(default)]
    pub descripcion: Option<String>,

    pub estado: Estado,
}

impl Resource for Actividad {
    type Payload = ActividadDto;

    fn id(&self) -> RecordId {
        self.id
    }

    fn nombre(&self) -> &str {
        &self.nombre
    }

    fn estado(&self) -> Estado {
        self.estado
    }

    fn to_payload(&self) -> ActividadDto {
        ActividadDto {
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
        "a003"
    }

    fn collection_name() -> &'static str {
        "actividades"
    }

    fn element_name() -> &'static str {
        "Actividad"
    }

    fn list_name() -> &'static str {
        "Actividades"
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
pub struct ActividadDto {
    pub nombre: String,
    pub descripcion: Option<String>,
}

impl ResourcePayload for ActividadDto {
    fn nombre(&self) -> &str {
        &self.nombre
    }
}
