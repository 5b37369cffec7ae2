use crate::domain::common::{
    validate_nombre, Estado, FieldError, FieldSpec, RecordId, Resource, ResourcePayload,
};
use crate::enums::{DiaSemana, Turno};
use serde::{Deserialize, Serialize};

// ============================================================================
// Resource
// ============================================================================

/// Checklist de limpieza: árbol Zona → Actividad → Método con materiales y
/// programación por turno y día.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checklist {
    pub id: RecordId,
    pub nombre: String,
    pub estado: Estado,

    #[serde(default)]
    pub zonas: Vec<ChecklistZona>,

    #[serde(default)]
    pub fecha_creacion: Option<String>,
}

// ============================================================================
// Tree nodes
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistZona {
    pub zona_id: RecordId,
    #[serde(default)]
    pub actividades: Vec<ChecklistActividad>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistActividad {
    pub actividad_id: RecordId,
    #[serde(default)]
    pub metodos: Vec<ChecklistMetodo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistMetodo {
    pub metodo_id: RecordId,
    #[serde(default)]
    pub materiales: Vec<RecordId>,
    #[serde(default)]
    pub turnos: Vec<TurnoDias>,
}

/// Days of the week a method runs on during one shift
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnoDias {
    pub turno: Turno,
    pub dias: Vec<DiaSemana>,
}

impl Checklist {
    /// Number of method nodes across the whole tree
    pub fn metodo_count(&self) -> usize {
        self.zonas
            .iter()
            .flat_map(|z| z.actividades.iter())
            .map(|a| a.metodos.len())
            .sum()
    }
}

impl Resource for Checklist {
    type Payload = ChecklistDto;

    fn id(&self) -> RecordId {
        self.id
    }

    fn nombre(&self) -> &str {
        &self.nombre
    }

    fn estado(&self) -> Estado {
        self.estado
    }

    fn to_payload(&self) -> ChecklistDto {
        ChecklistDto {
            nombre: self.nombre.clone(),
            zonas: self.zonas.clone(),
        }
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.nombre.clone(),
            self.zonas.len().to_string(),
            self.metodo_count().to_string(),
        ]
    }

    fn resource_index() -> &'static str {
        "a008"
    }

    fn collection_name() -> &'static str {
        "checklist"
    }

    fn element_name() -> &'static str {
        "Checklist"
    }

    fn list_name() -> &'static str {
        "Checklists"
    }

    fn columns() -> &'static [&'static str] {
        &["Nombre", "Zonas", "Métodos"]
    }

    fn form_fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[FieldSpec::text("nombre", "Nombre").required()];
        FIELDS
    }

    fn show_segment() -> &'static str {
        "detalle"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Whole checklist tree, submitted atomically on save
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ChecklistDto {
    pub nombre: String,
    pub zonas: Vec<ChecklistZona>,
}

impl ResourcePayload for ChecklistDto {
    fn nombre(&self) -> &str {
        &self.nombre
    }

    fn validate(&self) -> Result<(), FieldError> {
        validate_nombre(&self.nombre)?;
        if self.zonas.is_empty() {
            return Err(FieldError::new("zonas", "Agregue al menos una zona"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_nested_tree() {
        let raw = r#"{
            "id": 5, "nombre": "Diario", "estado": true,
            "zonas": [{"zona_id": 1, "actividades": [{"actividad_id": 2, "metodos": [
                {"metodo_id": 3, "materiales": [4], "turnos": [{"turno": "manana", "dias": ["lunes", "miercoles"]}]}
            ]}]}]
        }"#;
        let checklist: Checklist = serde_json::from_str(raw).unwrap();
        assert_eq!(checklist.metodo_count(), 1);
        let metodo = &checklist.zonas[0].actividades[0].metodos[0];
        assert_eq!(metodo.turnos[0].turno, Turno::Manana);
        assert_eq!(metodo.turnos[0].dias, vec![DiaSemana::Lunes, DiaSemana::Miercoles]);
        assert_eq!(checklist.row(), vec!["Diario", "1", "1"]);
    }

    #[test]
    fn test_payload_requires_a_zona() {
        let dto = ChecklistDto {
            nombre: "Semanal".into(),
            zonas: vec![],
        };
        assert_eq!(dto.validate().unwrap_err().field, "zonas");
    }
}
