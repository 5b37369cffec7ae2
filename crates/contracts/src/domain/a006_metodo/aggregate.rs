use crate::domain::common::{Estado, FieldSpec, RecordId, Resource, ResourcePayload};
use serde::{Deserialize, Serialize};

/// Método de ejecución de una actividad
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metodo {
    pub id: RecordId,
    pub nombre: String,

    #[serde(default)]
    pub descripcion: Option<String>,

    pub estado: Estado,
}

impl Resource for Metodo {
    type Payload = MetodoDto;

    fn id(&self) -> RecordId {
        self.id
    }

    fn nombre(&self) -> &str {
        &self.nombre
    }

    fn estado(&self) -> Estado {
        self.estado
    }

    fn to_payload(&self) -> MetodoDto {
        MetodoDto {
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
        "a006"
    }

    fn collection_name() -> &'static str {
        "metodos"
    }

    fn element_name() -> &'static str {
        "Método"
    }

    fn list_name() -> &'static str {
        "Métodos"
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
pub struct MetodoDto {
    pub nombre: String,
    pub descripcion: Option<String>,
}

impl ResourcePayload for MetodoDto {
    fn nombre(&self) -> &str {
        &self.nombre
    }
}
