use serde::{Deserialize, Serialize};

/// Day of the week, Monday first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiaSemana {
    Lunes,
    Martes,
    Miercoles,
    Jueves,
    Viernes,
    Sabado,
    Domingo,
}

impl DiaSemana {
    pub fn display_name(&self) -> &'static str {
        match self {
            DiaSemana::Lunes => "Lunes",
            DiaSemana::Martes => "Martes",
            DiaSemana::Miercoles => "Miércoles",
            DiaSemana::Jueves => "Jueves",
            DiaSemana::Viernes => "Viernes",
            DiaSemana::Sabado => "Sábado",
            DiaSemana::Domingo => "Domingo",
        }
    }

    /// Single-letter header used in the day grid
    pub fn short_name(&self) -> &'static str {
        match self {
            DiaSemana::Lunes => "L",
            DiaSemana::Martes => "M",
            DiaSemana::Miercoles => "X",
            DiaSemana::Jueves => "J",
            DiaSemana::Viernes => "V",
            DiaSemana::Sabado => "S",
            DiaSemana::Domingo => "D",
        }
    }

    pub fn all() -> Vec<DiaSemana> {
        vec![
            DiaSemana::Lunes,
            DiaSemana::Martes,
            DiaSemana::Miercoles,
            DiaSemana::Jueves,
            DiaSemana::Viernes,
            DiaSemana::Sabado,
            DiaSemana::Domingo,
        ]
    }

    /// ISO weekday number (1 = Monday)
    pub fn number(&self) -> u8 {
        match self {
            DiaSemana::Lunes => 1,
            DiaSemana::Martes => 2,
            DiaSemana::Miercoles => 3,
            DiaSemana::Jueves => 4,
            DiaSemana::Viernes => 5,
            DiaSemana::Sabado => 6,
            DiaSemana::Domingo => 7,
        }
    }
}
