use crate::shared::api_utils::api;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::{Badge as UiBadge, EstadoBadge};
use crate::shared::config::CONFIG;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_LIST};
use client::{
    detail_path, edit_path, list_path, new_path, ApiError, FetchPlan, ListState, NoticeLevel,
    RouteContext,
};
use contracts::domain::a001_empresa::aggregate::Empresa;
use contracts::domain::common::{RecordId, Resource};
use contracts::shared::status_filter::StatusFlag;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_location;
use thaw::*;

/// Extra link rendered in the actions column of a row
#[derive(Debug, Clone, PartialEq)]
pub struct RowLink {
    pub label: &'static str,
    pub href: String,
}

impl RowLink {
    pub fn new(label: &'static str, href: impl Into<String>) -> Self {
        Self {
            label,
            href: href.into(),
        }
    }
}

pub fn no_links<R>(_: &R) -> Vec<RowLink> {
    Vec::new()
}

pub struct ListOptions<R> {
    /// Adds a "Ver" link to `/{collection}/detalle/{id}`
    pub with_detail: bool,
    pub row_links: fn(&R) -> Vec<RowLink>,
}

impl<R> Default for ListOptions<R> {
    fn default() -> Self {
        Self {
            with_detail: false,
            row_links: no_links::<R>,
        }
    }
}

/// Paginated, filterable table of `R`.
///
/// The route query supplies `configuracionId` (or an `empresaId` to derive it
/// from) and the starting `page`.
pub fn resource_list_view<R: Resource>(options: ListOptions<R>) -> impl IntoView {
    let ListOptions {
        with_detail,
        row_links,
    } = options;

    let location = use_location();
    let route = Memo::new(move |_| RouteContext::from_query(&location.search.get()));
    let state = RwSignal::new(ListState::<R>::new());
    let search = RwSignal::new(String::new());
    let fallback = CONFIG.fallback_scope();

    let fetch = move || {
        let plan = state.try_update(|s| s.begin_fetch());
        if let Some(FetchPlan::Request { generation, query }) = plan {
            spawn_local(async move {
                let result = api().list::<R>(&query).await;
                if let Err(e) = &result {
                    log::warn!("{}: list failed: {}", R::full_name(), e);
                }
                state.try_update(|s| s.finish_fetch(generation, result));
            });
        }
    };

    Effect::new(move |_| {
        let ctx = route.get();
        untrack(move || {
            let page = ctx.page.unwrap_or(1);
            let needs_empresa = R::scope_kind().requires_scope() && ctx.configuracion_id.is_none();
            match ctx.empresa_id.filter(|_| needs_empresa) {
                Some(empresa_id) => spawn_local(async move {
                    let empresa = api().show::<Empresa>(empresa_id).await;
                    state.try_update(|s| {
                        s.configure_from_empresa(empresa, fallback);
                        s.start_at_page(page);
                    });
                    fetch();
                }),
                None => {
                    state.update(|s| {
                        s.configure(ctx.scope());
                        s.start_at_page(page);
                    });
                    fetch();
                }
            }
        });
    });

    let apply_search = move || {
        let term = search.get_untracked();
        state.update(|s| {
            s.set_search_term(term);
            s.apply_search();
        });
        fetch();
    };

    let toggle_status = move |flag: StatusFlag| {
        state.update(|s| s.toggle_status_filter(flag));
        fetch();
    };

    let clear_filters = move || {
        search.set(String::new());
        state.update(|s| s.clear_filters());
        fetch();
    };

    let go_to_page = move |page: u32| {
        if state.try_update(|s| s.go_to_page(page)).unwrap_or(false) {
            fetch();
        }
    };

    let toggle_estado = move |id: RecordId| {
        if !state.try_update(|s| s.begin_toggle(id)).unwrap_or(false) {
            return;
        }
        spawn_local(async move {
            let result = api().toggle::<R>(id).await;
            if let Ok(record) = &result {
                log::info!("{} {} is now {}", R::element_name(), id, record.estado().label());
            }
            let saved = result.is_ok();
            state.try_update(|s| s.finish_toggle(result.err()));
            if saved {
                fetch();
            }
        });
    };

    // Context handed to new/edit screens so they come back to this scope and page
    let child_ctx = move || {
        let list_ctx = route
            .get()
            .without_return()
            .with_scope(state.with(|s| s.scope()))
            .with_page(state.with(|s| s.current_page()));
        let back = list_path::<R>(&list_ctx);
        RouteContext {
            page: None,
            ..list_ctx
        }
        .with_return_to(back)
    };

    let is_loading = Memo::new(move |_| state.with(|s| s.is_loading()));
    let is_initial = Memo::new(move |_| state.with(|s| s.is_initial_load()));
    let is_toggling = Memo::new(move |_| state.with(|s| s.is_toggling()));
    let can_create = move || !R::scope_kind().requires_scope() || state.with(|s| s.scope().is_some());
    let new_label = format!(
        "{} {}",
        if R::is_feminine() { "Nueva" } else { "Nuevo" },
        R::element_name()
    );

    let error_view = move || {
        state.with(|s| s.error()).map(|err| {
            let retryable = err.is_retryable();
            let scope_missing = matches!(err, ApiError::ScopeMissing { .. });
            view! {
                <div class="alert alert--error">
                    <span>{err.to_string()}</span>
                    {scope_missing.then(|| view! {
                        <a class="alert__action" href="/empresas">"Elegir empresa"</a>
                    })}
                    {retryable.then(|| view! {
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| fetch()>
                            "Reintentar"
                        </Button>
                    })}
                </div>
            }
        })
    };

    view! {
        <PageFrame page_id=page_id(&R::full_name(), PAGE_CAT_LIST) category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{R::list_name()}</h1>
                    <UiBadge variant="primary".to_string()>
                        {move || state.with(|s| s.total_items()).to_string()}
                    </UiBadge>
                </div>
                <div class="page__header-right">
                    <Show when=can_create>
                        <a class="button button--primary" href={move || new_path::<R>(&child_ctx())}>
                            {icon("plus")}
                            {new_label.clone()}
                        </a>
                    </Show>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <div class="filter-panel-content">
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <div
                                style="flex: 1; max-width: 360px;"
                                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                    if ev.key() == "Enter" {
                                        apply_search();
                                    }
                                }
                            >
                                <Flex vertical=true gap=FlexGap::Small>
                                    <Label>"Buscar por nombre:"</Label>
                                    <Input value=search placeholder="Nombre..." />
                                </Flex>
                            </div>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| apply_search()
                                disabled=Signal::derive(move || is_loading.get())
                            >
                                "Buscar"
                            </Button>
                            {[StatusFlag::Active, StatusFlag::Inactive]
                                .into_iter()
                                .map(|flag| {
                                    view! {
                                        <Button
                                            appearance=Signal::derive(move || {
                                                if state.with(|s| s.status_filter().is_selected(flag)) {
                                                    ButtonAppearance::Primary
                                                } else {
                                                    ButtonAppearance::Secondary
                                                }
                                            })
                                            on_click=move |_| toggle_status(flag)
                                        >
                                            {flag.label()}
                                        </Button>
                                    }
                                })
                                .collect_view()}
                            <Button appearance=ButtonAppearance::Subtle on_click=move |_| clear_filters()>
                                "Limpiar"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| fetch()
                                disabled=Signal::derive(move || is_loading.get())
                            >
                                {move || if is_loading.get() { "Cargando..." } else { "Actualizar" }}
                            </Button>
                        </Flex>
                    </div>
                </div>

                {move || {
                    state
                        .with(|s| s.notices().to_vec())
                        .into_iter()
                        .map(|notice| {
                            let class = match notice.level {
                                NoticeLevel::Info => "alert alert--info",
                                NoticeLevel::Warning => "alert alert--warning",
                            };
                            view! { <div class=class>{notice.message}</div> }
                        })
                        .collect_view()
                }}

                {error_view}

                {move || {
                    state.with(|s| s.mutation_error().map(|e| e.to_string())).map(|message| view! {
                        <div class="alert alert--error">
                            <span>{message}</span>
                            <Button
                                appearance=ButtonAppearance::Subtle
                                on_click=move |_| state.update(|s| s.clear_mutation_error())
                            >
                                "Cerrar"
                            </Button>
                        </div>
                    })
                }}

                <Show
                    when=move || !is_initial.get()
                    fallback=|| view! {
                        <div class="page__loading">
                            <Spinner />
                            <span>"Cargando..."</span>
                        </div>
                    }
                >
                    <div class="table-wrapper">
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    {R::columns()
                                        .iter()
                                        .map(|column| view! { <TableHeaderCell>{*column}</TableHeaderCell> })
                                        .collect_view()}
                                    <TableHeaderCell>"Estado"</TableHeaderCell>
                                    <TableHeaderCell>"Acciones"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                <For
                                    each=move || state.with(|s| s.records().to_vec())
                                    key=|record: &R| (record.id(), record.estado())
                                    children=move |record: R| {
                                        let id = record.id();
                                        let estado = record.estado();
                                        let links = row_links(&record);
                                        let toggle_label = if estado.is_active() { "Desactivar" } else { "Activar" };
                                        view! {
                                            <TableRow>
                                                {record
                                                    .row()
                                                    .into_iter()
                                                    .map(|cell| view! {
                                                        <TableCell>
                                                            <TableCellLayout truncate=true>{cell}</TableCellLayout>
                                                        </TableCell>
                                                    })
                                                    .collect_view()}
                                                <TableCell>
                                                    <EstadoBadge estado=estado />
                                                </TableCell>
                                                <TableCell>
                                                    <div class="table__actions">
                                                        <a class="table__link" href={move || edit_path::<R>(id, &child_ctx())}>
                                                            "Editar"
                                                        </a>
                                                        {with_detail.then(|| view! {
                                                            <a class="table__link" href={move || detail_path::<R>(id, &child_ctx())}>
                                                                "Ver"
                                                            </a>
                                                        })}
                                                        {links
                                                            .into_iter()
                                                            .map(|link| view! {
                                                                <a class="table__link" href=link.href>{link.label}</a>
                                                            })
                                                            .collect_view()}
                                                        <Button
                                                            size=ButtonSize::Small
                                                            appearance=ButtonAppearance::Subtle
                                                            disabled=Signal::derive(move || is_loading.get() || is_toggling.get())
                                                            on_click=move |_| toggle_estado(id)
                                                        >
                                                            {toggle_label}
                                                        </Button>
                                                    </div>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    }
                                />
                            </TableBody>
                        </Table>

                        <Show when=move || state.with(|s| s.has_loaded() && s.records().is_empty())>
                            <div class="table__empty">"No hay registros"</div>
                        </Show>
                    </div>

                    <PaginationControls
                        buttons=Signal::derive(move || state.with(|s| s.page_buttons()))
                        previous=Signal::derive(move || state.with(|s| s.previous_page_target()))
                        next=Signal::derive(move || state.with(|s| s.next_page_target()))
                        total_items=Signal::derive(move || state.with(|s| s.total_items()))
                        disabled=Signal::derive(move || is_loading.get())
                        on_page_change=Callback::new(go_to_page)
                    />
                </Show>
            </div>
        </PageFrame>
    }
}
