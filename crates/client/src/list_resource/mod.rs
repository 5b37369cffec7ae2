//! Paginated, filterable list of one resource.
//!
//! [`ListState`] is the sans-IO half (query, pagination, phase, stale-response
//! guard); [`ListResource`] drives it against an [`ApiClient`].

pub mod state;

pub use state::{
    scope_from_empresa, FetchPlan, ListPhase, ListState, Notice, NoticeLevel, PageButton,
};

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::session::SessionStore;
use crate::transport::Transport;
use contracts::domain::a001_empresa::aggregate::Empresa;
use contracts::domain::common::{RecordId, Resource, ScopeId};
use contracts::shared::status_filter::StatusFlag;

pub struct ListResource<R: Resource, T, S> {
    state: ListState<R>,
    api: ApiClient<T, S>,
}

impl<R: Resource, T: Transport, S: SessionStore> ListResource<R, T, S> {
    pub fn new(api: ApiClient<T, S>) -> Self {
        Self {
            state: ListState::new(),
            api,
        }
    }

    pub fn state(&self) -> &ListState<R> {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ListState<R> {
        &mut self.state
    }

    pub fn api(&self) -> &ApiClient<T, S> {
        &self.api
    }

    pub async fn configure(&mut self, scope: Option<ScopeId>) {
        self.state.configure(scope);
        self.fetch_page().await;
    }

    pub async fn fetch_page(&mut self) {
        if let FetchPlan::Request { generation, query } = self.state.begin_fetch() {
            let result = self.api.list::<R>(&query).await;
            self.state.finish_fetch(generation, result);
        }
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.state.set_search_term(term);
    }

    pub async fn apply_search(&mut self) {
        self.state.apply_search();
        self.fetch_page().await;
    }

    pub async fn toggle_status_filter(&mut self, flag: StatusFlag) {
        self.state.toggle_status_filter(flag);
        self.fetch_page().await;
    }

    pub async fn clear_filters(&mut self) {
        self.state.clear_filters();
        self.fetch_page().await;
    }

    pub async fn go_to_page(&mut self, page: u32) {
        if self.state.go_to_page(page) {
            self.fetch_page().await;
        }
    }

    pub async fn next_page(&mut self) {
        if let Some(page) = self.state.next_page_target() {
            self.go_to_page(page).await;
        }
    }

    pub async fn previous_page(&mut self) {
        if let Some(page) = self.state.previous_page_target() {
            self.go_to_page(page).await;
        }
    }

    pub async fn retry(&mut self) {
        self.fetch_page().await;
    }

    /// Flip `estado` on the backend, then reload the current page once
    pub async fn toggle_active(&mut self, id: RecordId) -> Result<R, ApiError> {
        self.state.begin_toggle(id);
        let result = self.api.toggle::<R>(id).await;
        self.state.finish_toggle(result.as_ref().err().cloned());
        if let Ok(record) = &result {
            log::info!("{} {} -> {}", R::element_name(), id, record.estado().label());
            self.fetch_page().await;
        }
        result
    }

    pub async fn create(&mut self, payload: &R::Payload) -> Result<R, ApiError> {
        let result = self.api.store::<R>(self.state.scope(), payload).await;
        self.after_save(result).await
    }

    pub async fn update(&mut self, id: RecordId, payload: &R::Payload) -> Result<R, ApiError> {
        let result = self.api.update::<R>(id, payload).await;
        self.after_save(result).await
    }

    async fn after_save(&mut self, result: Result<R, ApiError>) -> Result<R, ApiError> {
        match result {
            Ok(record) => {
                if self.state.has_loaded() {
                    self.fetch_page().await;
                }
                Ok(record)
            }
            Err(err) => {
                if let ApiError::DuplicateName { field, .. } = &err {
                    log::warn!("{}: duplicate {}", R::element_name(), field);
                }
                self.state.set_mutation_error(err.clone());
                Err(err)
            }
        }
    }

    /// Scope the list by the configuration of an empresa.
    ///
    /// An empresa without configuration, or one that cannot be fetched, falls
    /// back to `fallback` and leaves a warning notice.
    pub async fn resolve_scope(&mut self, empresa_id: RecordId, fallback: ScopeId) -> ScopeId {
        let empresa = self.api.show::<Empresa>(empresa_id).await;
        let scope = self.state.configure_from_empresa(empresa, fallback);
        self.fetch_page().await;
        scope
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake_backend::{FakeBackend, TEST_TOKEN};
    use crate::session::MemorySessionStore;
    use crate::transport::Method;
    use contracts::domain::a002_area::aggregate::{Area, AreaDto};
    use contracts::domain::common::Estado;
    use futures::executor::block_on;
    use serde_json::json;

    fn areas(backend: &FakeBackend) -> ListResource<Area, FakeBackend, MemorySessionStore> {
        ListResource::new(ApiClient::new(
            backend.clone(),
            MemorySessionStore::with_token(TEST_TOKEN),
        ))
    }

    fn list_gets(backend: &FakeBackend) -> usize {
        backend
            .requests()
            .iter()
            .filter(|r| r.method == Method::Get && r.path.starts_with("/api/areas/"))
            .count()
    }

    #[test]
    fn test_first_page_of_scoped_list() {
        let backend = FakeBackend::new();
        backend.seed_named("areas", 42, 25);
        backend.seed_named("areas", 7, 4);
        let mut list = areas(&backend);

        block_on(list.configure(Some(ScopeId(42))));
        let state = list.state();
        assert_eq!(state.phase(), &ListPhase::Loaded);
        assert_eq!(state.records().len(), 10);
        assert_eq!(state.total_pages(), 3);
        assert_eq!(state.total_items(), 25);
        assert_eq!(state.page_buttons().len(), 3);
        assert_eq!(backend.last_request().unwrap().path, "/api/areas/42");

        block_on(list.go_to_page(3));
        assert_eq!(list.state().records().len(), 5);
        assert_eq!(list.state().current_page(), 3);

        backend.clear_requests();
        block_on(list.go_to_page(4));
        block_on(list.next_page());
        assert!(backend.requests().is_empty());
    }

    #[test]
    fn test_both_status_flags_mean_no_filter() {
        let backend = FakeBackend::new();
        backend.seed_named("areas", 1, 6);
        let mut list = areas(&backend);
        block_on(list.configure(Some(ScopeId(1))));

        block_on(list.toggle_status_filter(StatusFlag::Active));
        let query = backend.last_request().unwrap().query.unwrap();
        assert!(query.contains("estado=1"));
        assert!(list.state().records().iter().all(|a| a.estado == Estado::Activo));
        assert_eq!(list.state().records().len(), 3);

        block_on(list.toggle_status_filter(StatusFlag::Inactive));
        let query = backend.last_request().unwrap().query.unwrap();
        assert!(!query.contains("estado"));
        assert_eq!(list.state().records().len(), 6);
    }

    #[test]
    fn test_search_is_applied_on_demand() {
        let backend = FakeBackend::new();
        backend.seed_named("areas", 1, 12);
        let mut list = areas(&backend);
        block_on(list.configure(Some(ScopeId(1))));
        backend.clear_requests();

        list.set_search_term("areas 1");
        assert!(backend.requests().is_empty());

        block_on(list.apply_search());
        // "areas 1", "areas 10", "areas 11", "areas 12"
        assert_eq!(list.state().records().len(), 4);
        assert_eq!(list.state().active_search(), Some("areas 1"));

        block_on(list.clear_filters());
        assert_eq!(list.state().records().len(), 10);
        assert_eq!(list.state().total_items(), 12);
    }

    #[test]
    fn test_duplicate_create_surfaces_and_appends_nothing() {
        let backend = FakeBackend::new();
        backend.seed(
            "areas",
            vec![json!({ "id": 1, "nombre": "Baños", "estado": true, "configuracion_id": 1 })],
        );
        let mut list = areas(&backend);
        block_on(list.configure(Some(ScopeId(1))));

        let dto = AreaDto {
            nombre: "Baños".into(),
            descripcion: None,
        };
        let err = block_on(list.create(&dto)).unwrap_err();
        assert!(matches!(err, ApiError::DuplicateName { ref field, .. } if field == "nombre"));
        assert_eq!(list.state().records().len(), 1);
        assert_eq!(list.state().mutation_error(), Some(&err));

        let dto = AreaDto {
            nombre: "Cocina".into(),
            descripcion: Some("Cocina principal".into()),
        };
        let created = block_on(list.create(&dto)).unwrap();
        assert_eq!(created.estado, Estado::Activo);
        assert_eq!(list.state().records().len(), 2);
    }

    #[test]
    fn test_toggle_refetches_exactly_once() {
        let backend = FakeBackend::new();
        backend.seed_named("areas", 1, 8);
        let mut list = areas(&backend);
        block_on(list.configure(Some(ScopeId(1))));
        backend.clear_requests();

        let toggled = block_on(list.toggle_active(RecordId(7))).unwrap();
        assert_eq!(toggled.estado, Estado::Inactivo);
        assert_eq!(list_gets(&backend), 1);
        assert_eq!(backend.requests()[0].method, Method::Delete);

        let row = list.state().records().iter().find(|a| a.id == RecordId(7)).cloned();
        assert_eq!(row.map(|a| a.estado), Some(Estado::Inactivo));
        assert_eq!(backend.row("areas", 7).map(|r| r["estado"].clone()), Some(json!(false)));
    }

    #[test]
    fn test_failed_toggle_leaves_records() {
        let backend = FakeBackend::new();
        backend.seed_named("areas", 1, 2);
        let mut list = areas(&backend);
        block_on(list.configure(Some(ScopeId(1))));
        backend.clear_requests();

        backend.fail_next(500, "");
        assert!(block_on(list.toggle_active(RecordId(1))).is_err());
        assert!(!list.state().is_toggling());
        assert_eq!(list_gets(&backend), 0);
        assert_eq!(list.state().records()[0].estado, Estado::Activo);
        assert!(list.state().mutation_error().is_some());
        assert_eq!(backend.row("areas", 1).map(|r| r["estado"].clone()), Some(json!(true)));
    }

    #[test]
    fn test_retry_after_server_error() {
        let backend = FakeBackend::new();
        backend.seed_named("areas", 1, 3);
        let mut list = areas(&backend);
        backend.fail_next(503, r#"{"message":"Service Unavailable"}"#);
        block_on(list.configure(Some(ScopeId(1))));
        assert!(matches!(
            list.state().phase(),
            ListPhase::Error(ApiError::NetworkOrServer { status: Some(503), .. })
        ));

        block_on(list.retry());
        assert_eq!(list.state().phase(), &ListPhase::Loaded);
        assert_eq!(list.state().records().len(), 3);
    }

    #[test]
    fn test_missing_scope_sends_nothing() {
        let backend = FakeBackend::new();
        let mut list = areas(&backend);
        block_on(list.configure(None));
        assert_eq!(list.state().phase(), &ListPhase::AwaitingScope);
        assert!(backend.requests().is_empty());
    }

    #[test]
    fn test_resolve_scope_falls_back_with_notice() {
        let backend = FakeBackend::new();
        backend.seed(
            "empresas",
            vec![
                json!({ "id": 1, "nombre": "Con config", "razonSocial": "A", "configuracion_id": 42, "estado": true }),
                json!({ "id": 2, "nombre": "Sin config", "razonSocial": "B", "estado": true }),
            ],
        );
        backend.seed_named("areas", 42, 2);
        backend.seed_named("areas", 1, 5);

        let mut list = areas(&backend);
        let scope = block_on(list.resolve_scope(RecordId(1), ScopeId(1)));
        assert_eq!(scope, ScopeId(42));
        assert!(list.state().notices().is_empty());
        assert_eq!(list.state().records().len(), 2);

        let mut list = areas(&backend);
        let scope = block_on(list.resolve_scope(RecordId(2), ScopeId(1)));
        assert_eq!(scope, ScopeId(1));
        assert_eq!(list.state().notices().len(), 1);
        assert_eq!(list.state().notices()[0].level, NoticeLevel::Warning);
        assert_eq!(list.state().records().len(), 5);
    }
}
