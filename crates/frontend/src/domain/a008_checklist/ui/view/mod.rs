use super::details::model::{self, name_of, Catalogs};
use crate::shared::components::ui::EstadoBadge;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_DETAIL};
use client::{edit_path, return_path, RouteContext};
use contracts::domain::a008_checklist::aggregate::{Checklist, ChecklistMetodo};
use contracts::domain::common::{EntityId, RecordId, Resource};
use contracts::shared::date_utils::format_datetime;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_location, use_params_map};

fn schedule_summary(metodo: &ChecklistMetodo) -> String {
    if metodo.turnos.is_empty() {
        return "Sin programación".to_string();
    }
    metodo
        .turnos
        .iter()
        .map(|t| {
            let dias: Vec<&str> = t.dias.iter().map(|d| d.short_name()).collect();
            format!("{}: {}", t.turno.display_name(), dias.join(" "))
        })
        .collect::<Vec<_>>()
        .join(" · ")
}

fn tree_view(checklist: &Checklist, catalogs: &Catalogs) -> impl IntoView {
    checklist
        .zonas
        .iter()
        .map(|zona| {
            let actividades = zona
                .actividades
                .iter()
                .map(|actividad| {
                    let metodos = actividad
                        .metodos
                        .iter()
                        .map(|metodo| {
                            let materiales = metodo
                                .materiales
                                .iter()
                                .map(|id| name_of(&catalogs.materiales, *id))
                                .collect::<Vec<_>>()
                                .join(", ");
                            view! {
                                <li>
                                    <strong>{name_of(&catalogs.metodos, metodo.metodo_id)}</strong>
                                    <div class="checklist__meta">{schedule_summary(metodo)}</div>
                                    {(!materiales.is_empty()).then(|| view! {
                                        <div class="checklist__meta">"Materiales: " {materiales}</div>
                                    })}
                                </li>
                            }
                        })
                        .collect_view();
                    view! {
                        <li>
                            {name_of(&catalogs.actividades, actividad.actividad_id)}
                            <ul>{metodos}</ul>
                        </li>
                    }
                })
                .collect_view();
            view! {
                <li class="checklist__zona">
                    <h3>{name_of(&catalogs.zonas, zona.zona_id)}</h3>
                    <ul>{actividades}</ul>
                </li>
            }
        })
        .collect_view()
}

/// Read-only checklist at `/checklist/detalle/:id`
#[component]
pub fn ChecklistView() -> impl IntoView {
    let params = use_params_map();
    let location = use_location();

    let ctx = RouteContext::from_query(&location.search.get_untracked());
    let id = params
        .read_untracked()
        .get("id")
        .and_then(|raw| RecordId::from_string(&raw).ok());

    let checklist = RwSignal::new(Option::<Checklist>::None);
    let catalogs = RwSignal::new(Catalogs::default());
    let error = RwSignal::new(Option::<String>::None);

    let scope = ctx.scope();
    spawn_local(async move {
        let Some(id) = id else {
            error.try_set(Some("Identificador de checklist inválido".to_string()));
            return;
        };
        match model::fetch_by_id(id).await {
            Ok(found) => {
                checklist.try_set(Some(found));
            }
            Err(e) => {
                error.try_set(Some(e.to_string()));
                return;
            }
        }
        // Names only; ids are shown when the configuration is unknown
        if let Some(scope) = scope {
            match model::fetch_catalogs(scope).await {
                Ok(loaded) => {
                    catalogs.try_set(loaded);
                }
                Err(e) => log::warn!("Checklist catalogues unavailable: {}", e),
            }
        }
    });

    let back = return_path::<Checklist>(&ctx);
    let edit_ctx = ctx.clone();

    view! {
        <PageFrame page_id=page_id(&Checklist::full_name(), PAGE_CAT_DETAIL) category=PAGE_CAT_DETAIL>
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            {move || {
                checklist.get().map(|found| {
                    let edit_href = edit_path::<Checklist>(found.id, &edit_ctx);
                    let tree = found.clone();
                    view! {
                        <div class="page__header">
                            <div class="page__header-left">
                                <h1 class="page__title">{found.nombre.clone()}</h1>
                                <EstadoBadge estado=found.estado />
                            </div>
                            <div class="page__header-right">
                                <a class="button button--primary" href=edit_href>"Editar"</a>
                            </div>
                        </div>
                        <div class="page__content">
                            {found.fecha_creacion.clone().map(|fecha| view! {
                                <div class="checklist__meta">"Creado: " {format_datetime(&fecha)}</div>
                            })}
                            <ul class="checklist__tree">
                                {move || catalogs.with(|c| tree_view(&tree, c))}
                            </ul>
                        </div>
                    }
                })
            }}

            <a class="button button--secondary" href=back>"Volver"</a>
        </PageFrame>
    }
}
