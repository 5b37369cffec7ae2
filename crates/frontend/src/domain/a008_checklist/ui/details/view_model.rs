use super::model::{self, Catalogs};
use client::{ApiError, BuilderError, ChecklistBuilder};
use contracts::domain::a008_checklist::aggregate::Checklist;
use contracts::domain::common::{RecordId, ScopeId};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ViewModel for the checklist editor
#[derive(Clone, Copy)]
pub struct ChecklistDetailsViewModel {
    pub builder: RwSignal<ChecklistBuilder>,
    pub nombre: RwSignal<String>,
    /// Shown under the name input (duplicate or invalid name)
    pub nombre_error: RwSignal<Option<String>>,
    pub catalogs: RwSignal<Catalogs>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
}

impl ChecklistDetailsViewModel {
    pub fn new() -> Self {
        Self {
            builder: RwSignal::new(ChecklistBuilder::new()),
            nombre: RwSignal::new(String::new()),
            nombre_error: RwSignal::new(None),
            catalogs: RwSignal::new(Catalogs::default()),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
        }
    }

    /// Catalogues of `scope`, then the stored tree when editing
    pub fn load(&self, id: Option<RecordId>, scope: Option<ScopeId>) {
        let vm = *self;
        vm.loading.set(true);
        spawn_local(async move {
            if let Some(scope) = scope {
                match model::fetch_catalogs(scope).await {
                    Ok(catalogs) => {
                        vm.catalogs.try_set(catalogs);
                    }
                    Err(e) => {
                        log::warn!("Checklist catalogues unavailable: {}", e);
                        vm.error.try_set(Some(e.to_string()));
                    }
                }
            } else {
                let missing = ApiError::ScopeMissing {
                    resource: "Checklists".to_string(),
                };
                vm.error.try_set(Some(missing.to_string()));
            }

            if let Some(id) = id {
                match model::fetch_by_id(id).await {
                    Ok(checklist) => vm.apply_loaded(&checklist),
                    Err(e) => {
                        vm.error.try_set(Some(e.to_string()));
                    }
                }
            }
            vm.loading.try_set(false);
        });
    }

    fn apply_loaded(&self, checklist: &Checklist) {
        self.nombre.try_set(checklist.nombre.clone());
        self.builder.try_set(ChecklistBuilder::from_checklist(checklist));
    }

    pub fn set_nombre(&self, value: String) {
        self.nombre.set(value);
        if self.nombre_error.with_untracked(Option::is_some) {
            self.nombre_error.set(None);
        }
    }

    /// Run one builder command; a rejected command leaves the draft as it was
    /// and shows the reason
    pub fn edit<T>(&self, command: impl FnOnce(&mut ChecklistBuilder) -> Result<T, BuilderError>) {
        match self.builder.try_update(command) {
            Some(Ok(_)) => self.error.set(None),
            Some(Err(e)) => self.error.set(Some(e.to_string())),
            None => {}
        }
    }

    pub fn save_command(
        &self,
        id: Option<RecordId>,
        scope: Option<ScopeId>,
        on_saved: impl FnOnce(Checklist) + 'static,
    ) {
        if self.saving.get_untracked() {
            return;
        }
        let dto = match self
            .builder
            .with_untracked(|b| b.to_payload(&self.nombre.get_untracked()))
        {
            Ok(dto) => dto,
            Err(e) => {
                self.error.set(Some(e.to_string()));
                return;
            }
        };

        let vm = *self;
        vm.saving.set(true);
        vm.error.set(None);
        vm.nombre_error.set(None);
        spawn_local(async move {
            let result = model::save(id, scope, &dto).await;
            vm.saving.try_set(false);
            match result {
                Ok(saved) => {
                    log::info!("Checklist {} saved", saved.id);
                    on_saved(saved);
                }
                Err(e) => match e.message_for("nombre") {
                    Some(message) => {
                        vm.nombre_error.try_set(Some(message));
                    }
                    None => {
                        vm.error.try_set(Some(e.to_string()));
                    }
                },
            }
        });
    }
}

impl Default for ChecklistDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
