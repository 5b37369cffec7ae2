use serde::{Deserialize, Serialize};

/// Work shift a checklist method is scheduled on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Turno {
    Manana,
    Tarde,
    Noche,
}

impl Turno {
    pub fn code(&self) -> &'static str {
        match self {
            Turno::Manana => "manana",
            Turno::Tarde => "tarde",
            Turno::Noche => "noche",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Turno::Manana => "Mañana",
            Turno::Tarde => "Tarde",
            Turno::Noche => "Noche",
        }
    }

    pub fn all() -> Vec<Turno> {
        vec![Turno::Manana, Turno::Tarde, Turno::Noche]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "manana" => Some(Turno::Manana),
            "tarde" => Some(Turno::Tarde),
            "noche" => Some(Turno::Noche),
            _ => None,
        }
    }
}
