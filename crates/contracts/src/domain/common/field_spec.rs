use super::ResourcePayload;
use serde_json::Value;
use std::collections::BTreeMap;

/// Input widget used for a form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    TextArea,
}

/// Form schema entry: payload key, label and whether it may be left empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub const fn text(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Text,
            required: false,
        }
    }

    pub const fn textarea(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::TextArea,
            required: false,
        }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Flatten a payload into editable string values keyed by field name
pub fn payload_to_fields<P: ResourcePayload>(payload: &P) -> BTreeMap<String, String> {
    let map = match serde_json::to_value(payload) {
        Ok(Value::Object(map)) => map,
        _ => return BTreeMap::new(),
    };
    map.into_iter()
        .filter_map(|(key, value)| match value {
            Value::String(s) => Some((key, s)),
            Value::Null => Some((key, String::new())),
            Value::Number(n) => Some((key, n.to_string())),
            Value::Bool(b) => Some((key, b.to_string())),
            _ => None,
        })
        .collect()
}

/// Overlay edited string values onto `base` for the fields in `specs`.
///
/// Keys outside `specs` keep the base value, so nested data (checklist trees)
/// survives a round trip through the generic form. Empty optional fields are
/// sent as `null`.
pub fn payload_from_fields<P: ResourcePayload>(
    base: &P,
    specs: &[FieldSpec],
    fields: &BTreeMap<String, String>,
) -> Result<P, String> {
    let mut value = serde_json::to_value(base).map_err(|e| e.to_string())?;
    if let Value::Object(map) = &mut value {
        for spec in specs {
            let raw = fields.get(spec.key).map(|s| s.trim()).unwrap_or("");
            let next = if raw.is_empty() && !spec.required {
                Value::Null
            } else {
                Value::String(raw.to_string())
            };
            map.insert(spec.key.to_string(), next);
        }
    }
    serde_json::from_value(value).map_err(|e| format!("Datos del formulario inválidos: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_area::aggregate::{Area, AreaDto};

    #[test]
    fn test_round_trip_through_form_values() {
        let dto = AreaDto {
            nombre: "Cocina".into(),
            descripcion: Some("Planta baja".into()),
        };
        let mut fields = payload_to_fields(&dto);
        assert_eq!(fields.get("nombre").map(String::as_str), Some("Cocina"));

        fields.insert("nombre".into(), "  Cocina central ".into());
        fields.insert("descripcion".into(), "   ".into());
        let edited = payload_from_fields(&dto, <Area as crate::domain::common::Resource>::form_fields(), &fields).unwrap();
        assert_eq!(edited.nombre, "Cocina central");
        assert_eq!(edited.descripcion, None);
    }
}
