use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

/// Activation status of a record.
///
/// Backends disagree on the wire shape: some send `true`/`false`, some `1`/`0`,
/// some the strings `"Activo"`/`"Inactivo"`. All of them decode to this enum;
/// it is always encoded back as a bool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Estado {
    #[default]
    Activo,
    Inactivo,
}

impl Estado {
    pub fn from_bool(active: bool) -> Self {
        if active {
            Estado::Activo
        } else {
            Estado::Inactivo
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Estado::Activo)
    }

    /// The state the toggle endpoint moves a record to
    pub fn toggled(&self) -> Self {
        match self {
            Estado::Activo => Estado::Inactivo,
            Estado::Inactivo => Estado::Activo,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Estado::Activo => "Activo",
            Estado::Inactivo => "Inactivo",
        }
    }

    /// Parse the textual variants the backend is known to emit
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "activo" | "activa" | "active" | "1" | "true" => Some(Estado::Activo),
            "inactivo" | "inactiva" | "inactive" | "0" | "false" => Some(Estado::Inactivo),
            _ => None,
        }
    }
}

impl Serialize for Estado {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(self.is_active())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum EstadoRepr {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl<'de> Deserialize<'de> for Estado {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match EstadoRepr::deserialize(deserializer)? {
            EstadoRepr::Bool(b) => Ok(Estado::from_bool(b)),
            EstadoRepr::Int(i) => Ok(Estado::from_bool(i != 0)),
            EstadoRepr::Text(s) => Estado::parse(&s)
                .ok_or_else(|| de::Error::custom(format!("unknown estado value: {}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_every_backend_shape() {
        let cases = [
            ("true", Estado::Activo),
            ("false", Estado::Inactivo),
            ("1", Estado::Activo),
            ("0", Estado::Inactivo),
            ("\"Activo\"", Estado::Activo),
            ("\"Inactivo\"", Estado::Inactivo),
            ("\"INACTIVO\"", Estado::Inactivo),
            ("\"1\"", Estado::Activo),
        ];
        for (raw, expected) in cases {
            let parsed: Estado = serde_json::from_str(raw).unwrap();
            assert_eq!(parsed, expected, "input {}", raw);
        }
    }

    #[test]
    fn test_rejects_unknown_text() {
        assert!(serde_json::from_str::<Estado>("\"pendiente\"").is_err());
    }

    #[test]
    fn test_encodes_as_bool() {
        assert_eq!(serde_json::to_string(&Estado::Inactivo).unwrap(), "false");
    }

    #[test]
    fn test_toggle_is_binary() {
        assert_eq!(Estado::Activo.toggled(), Estado::Inactivo);
        assert_eq!(Estado::Activo.toggled().toggled(), Estado::Activo);
    }
}
