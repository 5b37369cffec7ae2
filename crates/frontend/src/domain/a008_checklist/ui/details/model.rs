use crate::shared::api_utils::api;
use client::ApiError;
use contracts::domain::a003_actividad::aggregate::Actividad;
use contracts::domain::a004_material::aggregate::Material;
use contracts::domain::a006_metodo::aggregate::Metodo;
use contracts::domain::a007_zona::aggregate::Zona;
use contracts::domain::a008_checklist::aggregate::{Checklist, ChecklistDto};
use contracts::domain::common::{RecordId, Resource, ScopeId};

/// `(id, nombre)` pairs offered by the selects of one tree level
pub type CatalogEntries = Vec<(RecordId, String)>;

/// Active records a checklist can reference within one configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalogs {
    pub zonas: CatalogEntries,
    pub actividades: CatalogEntries,
    pub metodos: CatalogEntries,
    pub materiales: CatalogEntries,
}

/// Display name of `id`, or `#id` when it is not (or no longer) active
pub fn name_of(entries: &[(RecordId, String)], id: RecordId) -> String {
    entries
        .iter()
        .find(|(entry_id, _)| *entry_id == id)
        .map(|(_, nombre)| nombre.clone())
        .unwrap_or_else(|| format!("#{}", id))
}

fn entries<R: Resource>(records: Vec<R>) -> CatalogEntries {
    records
        .into_iter()
        .map(|r| (r.id(), r.nombre().to_string()))
        .collect()
}

pub async fn fetch_catalogs(scope: ScopeId) -> Result<Catalogs, ApiError> {
    let client = api();
    let scope = Some(scope);
    Ok(Catalogs {
        zonas: entries(client.list_all::<Zona>(scope).await?),
        actividades: entries(client.list_all::<Actividad>(scope).await?),
        metodos: entries(client.list_all::<Metodo>(scope).await?),
        materiales: entries(client.list_all::<Material>(scope).await?),
    })
}

pub async fn fetch_by_id(id: RecordId) -> Result<Checklist, ApiError> {
    api().show::<Checklist>(id).await
}

/// Update when `id` is set, create under `scope` otherwise
pub async fn save(
    id: Option<RecordId>,
    scope: Option<ScopeId>,
    dto: &ChecklistDto,
) -> Result<Checklist, ApiError> {
    match id {
        Some(id) => api().update::<Checklist>(id, dto).await,
        None => api().store::<Checklist>(scope, dto).await,
    }
}
