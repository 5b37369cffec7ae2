pub mod dia_semana;
pub mod turno;

pub use dia_semana::DiaSemana;
pub use turno::Turno;
