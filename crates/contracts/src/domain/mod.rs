pub mod a001_empresa;
pub mod a002_area;
pub mod a003_actividad;
pub mod a004_material;
pub mod a005_motivo;
pub mod a006_metodo;
pub mod a007_zona;
pub mod a008_checklist;
pub mod common;
