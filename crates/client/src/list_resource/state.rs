use crate::api::ListQuery;
use crate::error::ApiError;
use contracts::domain::a001_empresa::aggregate::Empresa;
use contracts::domain::common::{RecordId, Resource, ScopeId};
use contracts::shared::api::{PageLinkKind, PageMeta, Paginated};
use contracts::shared::status_filter::{StatusFilter, StatusFlag};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListPhase {
    Idle,
    Loading,
    Loaded,
    Error(ApiError),
    /// Scoped resource without a configuration yet; nothing is requested
    AwaitingScope,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
}

/// Non-blocking message shown above the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }
}

/// What the caller has to do after [`ListState::begin_fetch`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchPlan {
    /// Send `query` and hand the result back with the same `generation`
    Request { generation: u64, query: ListQuery },
    AwaitingScope,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageButton {
    pub page: u32,
    pub active: bool,
}

/// Query and result state of one paginated list screen.
///
/// Holds no client: every request goes out through [`FetchPlan`] and comes
/// back through [`ListState::finish_fetch`], so the same state drives the
/// browser views and the native [`super::ListResource`] driver.
#[derive(Debug, Clone)]
pub struct ListState<R: Resource> {
    scope: Option<ScopeId>,

    // filters
    staged_search: String,
    active_search: Option<String>,
    status_filter: StatusFilter,

    // pagination
    page: u32,
    meta: PageMeta,

    records: Vec<R>,
    phase: ListPhase,
    generation: u64,
    has_loaded: bool,

    /// Record whose `estado` flip is in flight
    toggling: Option<RecordId>,
    mutation_error: Option<ApiError>,
    notices: Vec<Notice>,
}

impl<R: Resource> Default for ListState<R> {
    fn default() -> Self {
        Self {
            scope: None,
            staged_search: String::new(),
            active_search: None,
            status_filter: StatusFilter::default(),
            page: 1,
            meta: PageMeta::default(),
            records: Vec::new(),
            phase: ListPhase::Idle,
            generation: 0,
            has_loaded: false,
            toggling: None,
            mutation_error: None,
            notices: Vec::new(),
        }
    }
}

impl<R: Resource> ListState<R> {
    pub fn new() -> Self {
        Self::default()
    }

    // ============================================================================
    // Query changes
    // ============================================================================

    /// Set the parent configuration. A different scope starts over at page 1
    /// with an empty table.
    pub fn configure(&mut self, scope: Option<ScopeId>) {
        if scope != self.scope {
            self.scope = scope;
            self.page = 1;
            self.meta = PageMeta::default();
            self.records.clear();
            self.has_loaded = false;
        }
        if scope.is_none() && R::scope_kind().requires_scope() {
            log::warn!("{}: no configuration selected", R::list_name());
            self.phase = ListPhase::AwaitingScope;
        }
    }

    /// Scope the list by the empresa behind a route: its configuration, or
    /// `fallback` with a warning when it has none or could not be read.
    /// An authentication failure adds nothing, the session guard takes over.
    pub fn configure_from_empresa(
        &mut self,
        empresa: Result<Empresa, ApiError>,
        fallback: ScopeId,
    ) -> ScopeId {
        let scope = match empresa {
            Ok(empresa) => {
                let (scope, notice) = scope_from_empresa(&empresa, fallback);
                if let Some(notice) = notice {
                    self.push_notice(notice);
                }
                scope
            }
            Err(err) if err.is_unauthenticated() => {
                log::warn!("Empresa lookup rejected, session expired");
                fallback
            }
            Err(err) => {
                log::warn!("Empresa unavailable, using configuration {}: {}", fallback, err);
                self.push_notice(empresa_unavailable_notice(&err, fallback));
                fallback
            }
        };
        self.configure(Some(scope));
        scope
    }

    /// Stage the search input without querying
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.staged_search = term.into();
    }

    pub fn apply_search(&mut self) {
        let term = self.staged_search.trim();
        self.active_search = if term.is_empty() {
            None
        } else {
            Some(term.to_string())
        };
        self.page = 1;
    }

    pub fn toggle_status_filter(&mut self, flag: StatusFlag) {
        self.status_filter.toggle(flag);
        self.page = 1;
    }

    pub fn clear_filters(&mut self) {
        self.staged_search.clear();
        self.active_search = None;
        self.status_filter = StatusFilter::default();
        self.page = 1;
    }

    /// Returns `false` (and changes nothing) for pages outside `1..=total_pages`
    pub fn go_to_page(&mut self, page: u32) -> bool {
        if page < 1 || page > self.total_pages() {
            return false;
        }
        self.page = page;
        true
    }

    /// Page carried over from a route; not checked against `total_pages`
    /// because nothing has been loaded yet
    pub fn start_at_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    /// Target of the "next" button, `None` when disabled
    pub fn next_page_target(&self) -> Option<u32> {
        match self.meta.links.iter().find(|l| l.kind() == PageLinkKind::Next) {
            Some(link) if link.is_enabled() => link.target_page().or(Some(self.page + 1)),
            Some(_) => None,
            None => Some(self.page + 1).filter(|p| *p <= self.total_pages()),
        }
    }

    /// Target of the "previous" button, `None` when disabled
    pub fn previous_page_target(&self) -> Option<u32> {
        match self
            .meta
            .links
            .iter()
            .find(|l| l.kind() == PageLinkKind::Previous)
        {
            Some(link) if link.is_enabled() => {
                link.target_page().or(Some(self.page.saturating_sub(1)))
            }
            Some(_) => None,
            None => Some(self.page.saturating_sub(1)).filter(|p| *p >= 1),
        }
    }

    /// Numeric page buttons. Without backend links, one button per page.
    pub fn page_buttons(&self) -> Vec<PageButton> {
        let from_links: Vec<PageButton> = self
            .meta
            .links
            .iter()
            .filter_map(|link| match link.kind() {
                PageLinkKind::Number(page) => Some(PageButton {
                    page,
                    active: link.active,
                }),
                _ => None,
            })
            .collect();
        if !from_links.is_empty() {
            return from_links;
        }
        (1..=self.total_pages())
            .map(|page| PageButton {
                page,
                active: page == self.page,
            })
            .collect()
    }

    pub fn query(&self) -> ListQuery {
        ListQuery {
            scope: self.scope,
            page: self.page,
            nombre: self.active_search.clone(),
            estado: self.status_filter.as_query(),
        }
    }

    // ============================================================================
    // Fetch protocol
    // ============================================================================

    /// Start a fetch for the current query. Any response of an older
    /// generation is ignored from now on.
    pub fn begin_fetch(&mut self) -> FetchPlan {
        if self.scope.is_none() && R::scope_kind().requires_scope() {
            self.phase = ListPhase::AwaitingScope;
            return FetchPlan::AwaitingScope;
        }
        self.generation += 1;
        self.phase = ListPhase::Loading;
        FetchPlan::Request {
            generation: self.generation,
            query: self.query(),
        }
    }

    /// Apply a list response. Returns `false` when it belongs to a superseded
    /// request and was dropped.
    pub fn finish_fetch(&mut self, generation: u64, result: Result<Paginated<R>, ApiError>) -> bool {
        if generation != self.generation {
            log::debug!(
                "{}: dropping stale response {} (current {})",
                R::list_name(),
                generation,
                self.generation
            );
            return false;
        }

        match result {
            Ok(page) => {
                log::debug!(
                    "{}: loaded {} records, page {}/{}",
                    R::list_name(),
                    page.data.len(),
                    page.meta.current_page,
                    page.meta.last_page
                );
                self.records = page.data;
                self.page = page.meta.current_page.max(1);
                self.meta = page.meta;
                self.phase = ListPhase::Loaded;
                self.has_loaded = true;
            }
            Err(err) => {
                log::error!("{}: {}", R::list_name(), err);
                self.phase = ListPhase::Error(err);
            }
        }
        true
    }

    // ============================================================================
    // Mutations and notices
    // ============================================================================

    pub fn set_mutation_error(&mut self, err: ApiError) {
        self.mutation_error = Some(err);
    }

    /// Claim the toggle slot for `id`. `false` while another flip is still
    /// pending, in which case nothing is sent.
    pub fn begin_toggle(&mut self, id: RecordId) -> bool {
        if let Some(pending) = self.toggling {
            log::debug!("{}: toggle of {} still pending, ignoring {}", R::list_name(), pending, id);
            return false;
        }
        self.mutation_error = None;
        self.toggling = Some(id);
        true
    }

    pub fn finish_toggle(&mut self, error: Option<ApiError>) {
        self.toggling = None;
        if let Some(err) = error {
            self.mutation_error = Some(err);
        }
    }

    pub fn clear_mutation_error(&mut self) {
        self.mutation_error = None;
    }

    pub fn push_notice(&mut self, notice: Notice) {
        if !self.notices.contains(&notice) {
            self.notices.push(notice);
        }
    }

    pub fn dismiss_notices(&mut self) {
        self.notices.clear();
    }

    // ============================================================================
    // Derived data
    // ============================================================================

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn phase(&self) -> &ListPhase {
        &self.phase
    }

    pub fn scope(&self) -> Option<ScopeId> {
        self.scope
    }

    pub fn current_page(&self) -> u32 {
        self.page
    }

    pub fn total_pages(&self) -> u32 {
        self.meta.last_page.max(1)
    }

    pub fn total_items(&self) -> u64 {
        self.meta.total.max(self.records.len() as u64)
    }

    pub fn is_loading(&self) -> bool {
        self.phase == ListPhase::Loading
    }

    /// Loading with nothing to show yet: the view renders a full-panel spinner
    pub fn is_initial_load(&self) -> bool {
        self.is_loading() && !self.has_loaded
    }

    pub fn is_toggling(&self) -> bool {
        self.toggling.is_some()
    }

    pub fn has_loaded(&self) -> bool {
        self.has_loaded
    }

    pub fn error(&self) -> Option<ApiError> {
        match &self.phase {
            ListPhase::Error(err) => Some(err.clone()),
            ListPhase::AwaitingScope => Some(ApiError::ScopeMissing {
                resource: R::list_name().to_lowercase(),
            }),
            _ => None,
        }
    }

    pub fn mutation_error(&self) -> Option<&ApiError> {
        self.mutation_error.as_ref()
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn status_filter(&self) -> StatusFilter {
        self.status_filter
    }

    pub fn staged_search(&self) -> &str {
        &self.staged_search
    }

    pub fn active_search(&self) -> Option<&str> {
        self.active_search.as_deref()
    }
}

/// Configuration to list under for an empresa; missing ones fall back to
/// `fallback` with a warning for the user.
pub fn scope_from_empresa(empresa: &Empresa, fallback: ScopeId) -> (ScopeId, Option<Notice>) {
    match empresa.configuracion_id {
        Some(scope) => (scope, None),
        None => {
            log::warn!(
                "Empresa {} has no configuracion_id, using {}",
                empresa.id,
                fallback
            );
            let notice = Notice::warning(format!(
                "La empresa \"{}\" no tiene una configuración asignada. Se muestra la configuración {}.",
                empresa.nombre, fallback
            ));
            (fallback, Some(notice))
        }
    }
}

fn empresa_unavailable_notice(err: &ApiError, fallback: ScopeId) -> Notice {
    Notice::warning(format!(
        "No se pudo obtener la empresa ({}). Se muestra la configuración {}.",
        err, fallback
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_area::aggregate::Area;
    use contracts::domain::common::{Estado, RecordId};
    use contracts::shared::api::PageLink;

    fn area(id: i64) -> Area {
        Area {
            id: RecordId(id),
            nombre: format!("Area {}", id),
            descripcion: None,
            estado: Estado::Activo,
        }
    }

    fn page_of(ids: &[i64], current: u32, last: u32, total: u64) -> Paginated<Area> {
        Paginated {
            data: ids.iter().map(|id| area(*id)).collect(),
            meta: PageMeta {
                current_page: current,
                last_page: last,
                per_page: 10,
                total,
                links: Vec::new(),
            },
            links: None,
        }
    }

    fn loaded(current: u32, last: u32) -> ListState<Area> {
        let mut state = ListState::new();
        state.configure(Some(ScopeId(1)));
        let FetchPlan::Request { generation, .. } = state.begin_fetch() else {
            panic!("expected a request");
        };
        state.finish_fetch(generation, Ok(page_of(&[1, 2], current, last, 20)));
        state
    }

    #[test]
    fn test_scoped_list_without_scope_awaits() {
        let mut state: ListState<Area> = ListState::new();
        state.configure(None);
        assert_eq!(state.begin_fetch(), FetchPlan::AwaitingScope);
        assert_eq!(state.phase(), &ListPhase::AwaitingScope);
        assert!(matches!(state.error(), Some(ApiError::ScopeMissing { .. })));

        state.configure(Some(ScopeId(3)));
        assert!(matches!(state.begin_fetch(), FetchPlan::Request { .. }));
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut state: ListState<Area> = ListState::new();
        state.configure(Some(ScopeId(1)));
        let FetchPlan::Request { generation: first, .. } = state.begin_fetch() else {
            panic!("expected a request");
        };
        state.set_search_term("norte");
        state.apply_search();
        let FetchPlan::Request { generation: second, query } = state.begin_fetch() else {
            panic!("expected a request");
        };
        assert_eq!(query.nombre.as_deref(), Some("norte"));

        assert!(state.finish_fetch(second, Ok(page_of(&[5], 1, 1, 1))));
        assert!(!state.finish_fetch(first, Ok(page_of(&[1, 2, 3], 1, 1, 3))));
        assert_eq!(state.records().len(), 1);
        assert_eq!(state.records()[0].id, RecordId(5));
    }

    #[test]
    fn test_failed_refetch_keeps_records() {
        let mut state = loaded(1, 2);
        let FetchPlan::Request { generation, .. } = state.begin_fetch() else {
            panic!("expected a request");
        };
        assert!(!state.is_initial_load());
        state.finish_fetch(generation, Err(ApiError::network("timeout")));
        assert_eq!(state.records().len(), 2);
        assert!(state.error().map(|e| e.is_retryable()).unwrap_or(false));
    }

    #[test]
    fn test_unauthenticated_fetch_offers_no_retry() {
        let mut state: ListState<Area> = ListState::new();
        state.configure(Some(ScopeId(1)));
        let FetchPlan::Request { generation, .. } = state.begin_fetch() else {
            panic!("expected a request");
        };
        assert!(state.is_initial_load());
        state.finish_fetch(generation, Err(ApiError::Unauthenticated));
        assert_eq!(state.error(), Some(ApiError::Unauthenticated));
        assert!(!state.error().map(|e| e.is_retryable()).unwrap_or(true));
    }

    #[test]
    fn test_second_toggle_waits_for_the_first() {
        let mut state = loaded(1, 1);
        state.set_mutation_error(ApiError::network("old"));

        assert!(state.begin_toggle(RecordId(1)));
        assert!(state.is_toggling());
        assert_eq!(state.mutation_error(), None);
        assert!(!state.begin_toggle(RecordId(1)));
        assert!(!state.begin_toggle(RecordId(2)));

        state.finish_toggle(Some(ApiError::network("timeout")));
        assert!(!state.is_toggling());
        assert!(state.mutation_error().is_some());

        assert!(state.begin_toggle(RecordId(2)));
        state.finish_toggle(None);
        assert!(!state.is_toggling());
        assert_eq!(state.mutation_error(), None);
    }

    #[test]
    fn test_go_to_page_bounds() {
        let mut state: ListState<Area> = ListState::new();
        assert_eq!(state.total_pages(), 1);
        assert!(!state.go_to_page(0));
        assert!(!state.go_to_page(2));

        let mut state = loaded(1, 3);
        assert!(state.go_to_page(3));
        assert_eq!(state.query().page, 3);
        assert!(!state.go_to_page(4));
        assert_eq!(state.current_page(), 3);
    }

    #[test]
    fn test_page_from_route_is_requested_as_is() {
        let mut state: ListState<Area> = ListState::new();
        state.configure(Some(ScopeId(1)));
        state.start_at_page(4);
        let FetchPlan::Request { query, .. } = state.begin_fetch() else {
            panic!("expected a request");
        };
        assert_eq!(query.page, 4);

        state.start_at_page(0);
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_filters_reset_page() {
        let mut state = loaded(1, 3);
        state.go_to_page(2);
        state.toggle_status_filter(StatusFlag::Inactive);
        assert_eq!(state.query().page, 1);
        assert_eq!(state.query().estado, Some(0));

        state.toggle_status_filter(StatusFlag::Active);
        assert_eq!(state.query().estado, None);

        state.set_search_term("   ");
        state.apply_search();
        assert_eq!(state.query().nombre, None);

        state.set_search_term("baño");
        assert_eq!(state.query().nombre, None);
        state.go_to_page(3);
        state.clear_filters();
        assert_eq!(state.query(), ListQuery {
            scope: Some(ScopeId(1)),
            page: 1,
            nombre: None,
            estado: None,
        });
        assert_eq!(state.staged_search(), "");
    }

    #[test]
    fn test_page_buttons_follow_backend_links() {
        let mut state = loaded(2, 3);
        assert_eq!(state.page_buttons().len(), 3);
        assert!(state.page_buttons()[1].active);
        assert_eq!(state.next_page_target(), Some(3));
        assert_eq!(state.previous_page_target(), Some(1));

        let link = |url: Option<&str>, label: &str, active: bool| PageLink {
            url: url.map(str::to_string),
            label: label.to_string(),
            active,
        };
        state.meta.links = vec![
            link(Some("http://x/api/areas/1?page=1"), "&laquo; Previous", false),
            link(Some("http://x/api/areas/1?page=1"), "1", false),
            link(Some("http://x/api/areas/1?page=2"), "2", true),
            link(None, "...", false),
            link(Some("http://x/api/areas/1?page=9"), "9", false),
            link(None, "Next &raquo;", false),
        ];
        let pages: Vec<u32> = state.page_buttons().iter().map(|b| b.page).collect();
        assert_eq!(pages, vec![1, 2, 9]);
        assert_eq!(state.next_page_target(), None);
        assert_eq!(state.previous_page_target(), Some(1));
    }

    #[test]
    fn test_total_items_never_below_record_count() {
        let mut state: ListState<Area> = ListState::new();
        state.configure(Some(ScopeId(1)));
        let FetchPlan::Request { generation, .. } = state.begin_fetch() else {
            panic!("expected a request");
        };
        state.finish_fetch(generation, Ok(page_of(&[1, 2, 3], 1, 0, 0)));
        assert_eq!(state.total_items(), 3);
        assert_eq!(state.total_pages(), 1);
    }

    #[test]
    fn test_empresa_without_configuracion_falls_back() {
        let empresa = Empresa {
            id: RecordId(4),
            nombre: "Brillo".into(),
            razon_social: "Brillo SAC".into(),
            ruc: None,
            configuracion_id: None,
            estado: Estado::Activo,
        };
        let (scope, notice) = scope_from_empresa(&empresa, ScopeId(1));
        assert_eq!(scope, ScopeId(1));
        assert_eq!(notice.map(|n| n.level), Some(NoticeLevel::Warning));

        let empresa = Empresa {
            configuracion_id: Some(ScopeId(42)),
            ..empresa
        };
        assert_eq!(scope_from_empresa(&empresa, ScopeId(1)), (ScopeId(42), None));
    }

    #[test]
    fn test_empresa_lookup_failures_use_fallback() {
        let mut state: ListState<Area> = ListState::new();
        let scope = state.configure_from_empresa(Err(ApiError::network("HTTP 500")), ScopeId(1));
        assert_eq!(scope, ScopeId(1));
        assert_eq!(state.scope(), Some(ScopeId(1)));
        assert_eq!(state.notices().len(), 1);
        assert_eq!(state.notices()[0].level, NoticeLevel::Warning);

        let mut state: ListState<Area> = ListState::new();
        let scope = state.configure_from_empresa(Err(ApiError::Unauthenticated), ScopeId(1));
        assert_eq!(scope, ScopeId(1));
        assert!(state.notices().is_empty());
        assert_eq!(state.mutation_error(), None);
    }
}
