use crate::domain::common::{Estado, FieldSpec, RecordId, Resource, ResourcePayload};
use crate::shared::date_utils::format_date;
use serde::{Deserialize, Serialize};

/// Material o insumo de limpieza
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub id: RecordId,
    pub nombre: String,
    pub estado: Estado,

    /// Raw backend timestamp, formatted only for display
    #[serde(default)]
    pub fecha_creacion: Option<String>,
}

impl Resource for Material {
    type Payload = MaterialDto;

    fn id(&self) -> RecordId {
        self.id
    }

    fn nombre(&self) -> &str {
        &self.nombre
    }

    fn estado(&self) -> Estado {
        self.estado
    }

    fn to_payload(&self) -> MaterialDto {
        MaterialDto {
            nombre: self.nombre.clone(),
        }
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.nombre.clone(),
            self.fecha_creacion
                .as_deref()
                .map(format_date)
                .unwrap_or_else(|| "-".to_string()),
        ]
    }

    fn resource_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "materiales"
    }

    fn element_name() -> &'static str {
        "Material"
    }

    fn list_name() -> &'static str {
        "Materiales"
    }

    fn columns() -> &'static [&'static str] {
        &["Nombre", "Fecha de creación"]
    }

    fn form_fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[FieldSpec::text("nombre", "Nombre").required()];
        FIELDS
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MaterialDto {
    pub nombre: String,
}

impl ResourcePayload for MaterialDto {
    fn nombre(&self) -> &str {
        &self.nombre
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_formats_creation_date() {
        let material = Material {
            id: RecordId(1),
            nombre: "Lejía".into(),
            estado: Estado::Activo,
            fecha_creacion: Some("2024-03-15T14:02:26.000000Z".into()),
        };
        assert_eq!(material.row()[1], "15/03/2024");
    }
}
