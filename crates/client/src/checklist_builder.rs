//! Draft tree of the checklist editor.
//!
//! Zona → Actividad → Método → (materiales, días por turno). Everything
//! lives in memory until [`ChecklistBuilder::to_payload`] produces the tree
//! that is submitted in one request.

use contracts::domain::a008_checklist::aggregate::{
    Checklist, ChecklistActividad, ChecklistDto, ChecklistMetodo, ChecklistZona, TurnoDias,
};
use contracts::domain::common::{validate_nombre, RecordId};
use contracts::enums::{DiaSemana, Turno};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Zona,
    Actividad,
    Metodo,
    Material,
    Dia,
}

/// Level name with indefinite article, as used in messages
fn with_article(level: &Level) -> &'static str {
    match level {
        Level::Zona => "una zona",
        Level::Actividad => "una actividad",
        Level::Metodo => "un método",
        Level::Material => "un material",
        Level::Dia => "un día",
    }
}

impl Level {
    fn plural(&self) -> &'static str {
        match self {
            Level::Zona => "zonas",
            Level::Actividad => "actividades",
            Level::Metodo => "métodos",
            Level::Material => "materiales",
            Level::Dia => "días",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.plural())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuilderError {
    #[error("Seleccione {} antes de agregar {level}", with_article(.prerequisite))]
    MissingPrerequisite { level: Level, prerequisite: Level },

    #[error("El elemento indicado no existe en el checklist")]
    NodeNotFound,

    #[error("Ya existe en {level} un elemento con id {id}")]
    AlreadySelected { level: Level, id: RecordId },

    #[error("{0}")]
    Incomplete(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActividadPath {
    pub zona: usize,
    pub actividad: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetodoPath {
    pub zona: usize,
    pub actividad: usize,
    pub metodo: usize,
}

impl MetodoPath {
    pub fn actividad_path(&self) -> ActividadPath {
        ActividadPath {
            zona: self.zona,
            actividad: self.actividad,
        }
    }
}

// ============================================================================
// Nodes
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ZonaNode {
    pub zona_id: Option<RecordId>,
    pub actividades: Vec<ActividadNode>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ActividadNode {
    pub actividad_id: Option<RecordId>,
    pub metodos: Vec<MetodoNode>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MetodoNode {
    pub metodo_id: Option<RecordId>,
    pub materiales: Vec<RecordId>,
    pub turnos: BTreeMap<Turno, BTreeSet<DiaSemana>>,
}

impl MetodoNode {
    pub fn has_dia(&self, turno: Turno, dia: DiaSemana) -> bool {
        self.turnos.get(&turno).map_or(false, |dias| dias.contains(&dia))
    }

    fn has_any_dia(&self) -> bool {
        self.turnos.values().any(|dias| !dias.is_empty())
    }
}

// ============================================================================
// Builder
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChecklistBuilder {
    zonas: Vec<ZonaNode>,
}

impl ChecklistBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a saved checklist for editing
    pub fn from_checklist(checklist: &Checklist) -> Self {
        let zonas = checklist
            .zonas
            .iter()
            .map(|z| ZonaNode {
                zona_id: Some(z.zona_id),
                actividades: z
                    .actividades
                    .iter()
                    .map(|a| ActividadNode {
                        actividad_id: Some(a.actividad_id),
                        metodos: a
                            .metodos
                            .iter()
                            .map(|m| MetodoNode {
                                metodo_id: Some(m.metodo_id),
                                materiales: m.materiales.clone(),
                                turnos: m
                                    .turnos
                                    .iter()
                                    .map(|t| (t.turno, t.dias.iter().copied().collect()))
                                    .collect(),
                            })
                            .collect(),
                    })
                    .collect(),
            })
            .collect();
        Self { zonas }
    }

    pub fn zonas(&self) -> &[ZonaNode] {
        &self.zonas
    }

    pub fn is_empty(&self) -> bool {
        self.zonas.is_empty()
    }

    // ---- zonas ----

    pub fn add_zona(&mut self) -> usize {
        self.zonas.push(ZonaNode::default());
        self.zonas.len() - 1
    }

    pub fn select_zona(&mut self, zona: usize, id: RecordId) -> Result<(), BuilderError> {
        if self
            .zonas
            .iter()
            .enumerate()
            .any(|(i, z)| i != zona && z.zona_id == Some(id))
        {
            return Err(BuilderError::AlreadySelected { level: Level::Zona, id });
        }
        let node = self.zonas.get_mut(zona).ok_or(BuilderError::NodeNotFound)?;
        if node.zona_id != Some(id) {
            node.zona_id = Some(id);
            node.actividades.clear();
        }
        Ok(())
    }

    pub fn remove_zona(&mut self, zona: usize) -> Result<ZonaNode, BuilderError> {
        if zona >= self.zonas.len() {
            return Err(BuilderError::NodeNotFound);
        }
        Ok(self.zonas.remove(zona))
    }

    // ---- actividades ----

    pub fn add_actividad(&mut self, zona: usize) -> Result<ActividadPath, BuilderError> {
        let node = self.zonas.get_mut(zona).ok_or(BuilderError::NodeNotFound)?;
        if node.zona_id.is_none() {
            return Err(BuilderError::MissingPrerequisite {
                level: Level::Actividad,
                prerequisite: Level::Zona,
            });
        }
        node.actividades.push(ActividadNode::default());
        Ok(ActividadPath {
            zona,
            actividad: node.actividades.len() - 1,
        })
    }

    pub fn select_actividad(&mut self, path: ActividadPath, id: RecordId) -> Result<(), BuilderError> {
        let siblings = &self
            .zonas
            .get(path.zona)
            .ok_or(BuilderError::NodeNotFound)?
            .actividades;
        if siblings
            .iter()
            .enumerate()
            .any(|(i, a)| i != path.actividad && a.actividad_id == Some(id))
        {
            return Err(BuilderError::AlreadySelected {
                level: Level::Actividad,
                id,
            });
        }
        let node = self.actividad_mut(path)?;
        if node.actividad_id != Some(id) {
            node.actividad_id = Some(id);
            node.metodos.clear();
        }
        Ok(())
    }

    pub fn remove_actividad(&mut self, path: ActividadPath) -> Result<ActividadNode, BuilderError> {
        let zona = self.zonas.get_mut(path.zona).ok_or(BuilderError::NodeNotFound)?;
        if path.actividad >= zona.actividades.len() {
            return Err(BuilderError::NodeNotFound);
        }
        Ok(zona.actividades.remove(path.actividad))
    }

    // ---- metodos ----

    pub fn add_metodo(&mut self, path: ActividadPath) -> Result<MetodoPath, BuilderError> {
        let node = self.actividad_mut(path)?;
        if node.actividad_id.is_none() {
            return Err(BuilderError::MissingPrerequisite {
                level: Level::Metodo,
                prerequisite: Level::Actividad,
            });
        }
        node.metodos.push(MetodoNode::default());
        Ok(MetodoPath {
            zona: path.zona,
            actividad: path.actividad,
            metodo: node.metodos.len() - 1,
        })
    }

    pub fn select_metodo(&mut self, path: MetodoPath, id: RecordId) -> Result<(), BuilderError> {
        let siblings = &self.actividad(path.actividad_path())?.metodos;
        if siblings
            .iter()
            .enumerate()
            .any(|(i, m)| i != path.metodo && m.metodo_id == Some(id))
        {
            return Err(BuilderError::AlreadySelected {
                level: Level::Metodo,
                id,
            });
        }
        let node = self.metodo_mut(path)?;
        if node.metodo_id != Some(id) {
            *node = MetodoNode {
                metodo_id: Some(id),
                ..MetodoNode::default()
            };
        }
        Ok(())
    }

    pub fn remove_metodo(&mut self, path: MetodoPath) -> Result<MetodoNode, BuilderError> {
        let actividad = self.actividad_mut(path.actividad_path())?;
        if path.metodo >= actividad.metodos.len() {
            return Err(BuilderError::NodeNotFound);
        }
        Ok(actividad.metodos.remove(path.metodo))
    }

    // ---- materiales y días ----

    /// Adding a material twice is a no-op
    pub fn add_material(&mut self, path: MetodoPath, material_id: RecordId) -> Result<(), BuilderError> {
        let node = self.selected_metodo_mut(path, Level::Material)?;
        if !node.materiales.contains(&material_id) {
            node.materiales.push(material_id);
        }
        Ok(())
    }

    pub fn remove_material(&mut self, path: MetodoPath, material_id: RecordId) -> Result<(), BuilderError> {
        let node = self.metodo_mut(path)?;
        node.materiales.retain(|m| *m != material_id);
        Ok(())
    }

    /// Returns whether the day is selected afterwards
    pub fn toggle_dia(&mut self, path: MetodoPath, turno: Turno, dia: DiaSemana) -> Result<bool, BuilderError> {
        let node = self.selected_metodo_mut(path, Level::Dia)?;
        let dias = node.turnos.entry(turno).or_default();
        let selected = if dias.remove(&dia) {
            false
        } else {
            dias.insert(dia);
            true
        };
        if dias.is_empty() {
            node.turnos.remove(&turno);
        }
        Ok(selected)
    }

    /// Copy the days of `from` into every other shift of the method
    pub fn apply_to_all_turnos(&mut self, path: MetodoPath, from: Turno) -> Result<(), BuilderError> {
        let node = self.selected_metodo_mut(path, Level::Dia)?;
        let dias = node.turnos.get(&from).cloned().unwrap_or_default();
        for turno in Turno::all() {
            if dias.is_empty() {
                node.turnos.remove(&turno);
            } else {
                node.turnos.insert(turno, dias.clone());
            }
        }
        Ok(())
    }

    // ============================================================================
    // Submit
    // ============================================================================

    /// Whole tree as the store/update body. Fails without touching the draft
    /// when anything is left unselected.
    pub fn to_payload(&self, nombre: &str) -> Result<ChecklistDto, BuilderError> {
        validate_nombre(nombre).map_err(|e| BuilderError::Incomplete(e.message))?;
        if self.zonas.is_empty() {
            return Err(BuilderError::Incomplete("Agregue al menos una zona".to_string()));
        }

        let mut zonas = Vec::with_capacity(self.zonas.len());
        for (zi, zona) in self.zonas.iter().enumerate() {
            let zona_id = zona
                .zona_id
                .ok_or_else(|| incomplete(format!("Seleccione la zona {}", zi + 1)))?;

            let mut actividades = Vec::with_capacity(zona.actividades.len());
            for (ai, actividad) in zona.actividades.iter().enumerate() {
                let actividad_id = actividad.actividad_id.ok_or_else(|| {
                    incomplete(format!("Seleccione la actividad {} de la zona {}", ai + 1, zi + 1))
                })?;

                let mut metodos = Vec::with_capacity(actividad.metodos.len());
                for (mi, metodo) in actividad.metodos.iter().enumerate() {
                    let metodo_id = metodo.metodo_id.ok_or_else(|| {
                        incomplete(format!(
                            "Seleccione el método {} de la actividad {} (zona {})",
                            mi + 1,
                            ai + 1,
                            zi + 1
                        ))
                    })?;
                    if !metodo.has_any_dia() {
                        return Err(incomplete(format!(
                            "Marque al menos un día para el método {} de la actividad {} (zona {})",
                            mi + 1,
                            ai + 1,
                            zi + 1
                        )));
                    }
                    metodos.push(ChecklistMetodo {
                        metodo_id,
                        materiales: metodo.materiales.clone(),
                        turnos: metodo
                            .turnos
                            .iter()
                            .filter(|(_, dias)| !dias.is_empty())
                            .map(|(turno, dias)| TurnoDias {
                                turno: *turno,
                                dias: dias.iter().copied().collect(),
                            })
                            .collect(),
                    });
                }
                actividades.push(ChecklistActividad {
                    actividad_id,
                    metodos,
                });
            }
            zonas.push(ChecklistZona {
                zona_id,
                actividades,
            });
        }

        Ok(ChecklistDto {
            nombre: nombre.trim().to_string(),
            zonas,
        })
    }

    // ---- lookups ----

    fn actividad(&self, path: ActividadPath) -> Result<&ActividadNode, BuilderError> {
        self.zonas
            .get(path.zona)
            .and_then(|z| z.actividades.get(path.actividad))
            .ok_or(BuilderError::NodeNotFound)
    }

    fn actividad_mut(&mut self, path: ActividadPath) -> Result<&mut ActividadNode, BuilderError> {
        self.zonas
            .get_mut(path.zona)
            .and_then(|z| z.actividades.get_mut(path.actividad))
            .ok_or(BuilderError::NodeNotFound)
    }

    fn metodo_mut(&mut self, path: MetodoPath) -> Result<&mut MetodoNode, BuilderError> {
        self.actividad_mut(path.actividad_path())?
            .metodos
            .get_mut(path.metodo)
            .ok_or(BuilderError::NodeNotFound)
    }

    fn selected_metodo_mut(&mut self, path: MetodoPath, level: Level) -> Result<&mut MetodoNode, BuilderError> {
        let node = self.metodo_mut(path)?;
        if node.metodo_id.is_none() {
            return Err(BuilderError::MissingPrerequisite {
                level,
                prerequisite: Level::Metodo,
            });
        }
        Ok(node)
    }
}

fn incomplete(message: String) -> BuilderError {
    BuilderError::Incomplete(message)
}
