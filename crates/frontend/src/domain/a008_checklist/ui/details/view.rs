use super::model::{name_of, Catalogs};
use super::view_model::ChecklistDetailsViewModel;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_DETAIL};
use client::checklist_builder::{ActividadNode, ActividadPath, MetodoNode, MetodoPath, ZonaNode};
use client::{return_path, RouteContext};
use contracts::domain::a008_checklist::aggregate::Checklist;
use contracts::domain::common::{EntityId, RecordId, Resource};
use contracts::enums::{DiaSemana, Turno};
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate, use_params_map};

/// `<select>` over a catalogue. An id missing from the catalogue (inactive
/// record) is kept as an extra option so editing does not silently drop it.
fn catalog_select(
    placeholder: &'static str,
    entries: &[(RecordId, String)],
    selected: Option<RecordId>,
    on_pick: impl Fn(RecordId) + 'static,
) -> impl IntoView {
    let mut options: Vec<(RecordId, String)> = entries.to_vec();
    if let Some(id) = selected.filter(|id| !entries.iter().any(|(e, _)| e == id)) {
        options.push((id, format!("#{} (inactivo)", id)));
    }

    view! {
        <select
            class="form__select"
            on:change=move |ev| {
                if let Ok(id) = RecordId::from_string(&event_target_value(&ev)) {
                    on_pick(id);
                }
            }
        >
            <option value="" selected=selected.is_none()>{placeholder}</option>
            {options
                .into_iter()
                .map(|(id, nombre)| view! {
                    <option value=id.as_string() selected={selected == Some(id)}>{nombre}</option>
                })
                .collect_view()}
        </select>
    }
}

fn remove_button(title: &'static str, on_remove: impl Fn() + 'static) -> impl IntoView {
    view! {
        <button type="button" class="button button--icon" title=title on:click=move |_| on_remove()>
            {icon("x")}
        </button>
    }
}

fn schedule_grid(vm: ChecklistDetailsViewModel, path: MetodoPath, metodo: &MetodoNode) -> impl IntoView {
    let locked = metodo.metodo_id.is_none();
    let rows = Turno::all()
        .into_iter()
        .map(|turno| {
            let cells = DiaSemana::all()
                .into_iter()
                .map(|dia| {
                    let checked = metodo.has_dia(turno, dia);
                    view! {
                        <td>
                            <input
                                type="checkbox"
                                title=dia.display_name()
                                prop:checked=checked
                                disabled=locked
                                on:change=move |_| vm.edit(|b| b.toggle_dia(path, turno, dia))
                            />
                        </td>
                    }
                })
                .collect_view();
            view! {
                <tr>
                    <th>{turno.display_name()}</th>
                    {cells}
                    <td>
                        <button
                            type="button"
                            class="button button--link"
                            disabled=locked
                            on:click=move |_| vm.edit(|b| b.apply_to_all_turnos(path, turno))
                        >
                            "Aplicar a todos los turnos"
                        </button>
                    </td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <table class="checklist__schedule">
            <thead>
                <tr>
                    <th>"Turno"</th>
                    {DiaSemana::all()
                        .into_iter()
                        .map(|dia| view! { <th title=dia.display_name()>{dia.short_name()}</th> })
                        .collect_view()}
                    <th></th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
}

fn metodo_view(
    vm: ChecklistDetailsViewModel,
    path: MetodoPath,
    metodo: &MetodoNode,
    catalogs: &Catalogs,
) -> impl IntoView {
    let chips = metodo
        .materiales
        .iter()
        .map(|&material_id| {
            view! {
                <span class="chip">
                    {name_of(&catalogs.materiales, material_id)}
                    {remove_button("Quitar material", move || {
                        vm.edit(|b| b.remove_material(path, material_id))
                    })}
                </span>
            }
        })
        .collect_view();

    let available: Vec<(RecordId, String)> = catalogs
        .materiales
        .iter()
        .filter(|(id, _)| !metodo.materiales.contains(id))
        .cloned()
        .collect();

    view! {
        <div class="checklist__node checklist__node--metodo">
            <div class="checklist__node-header">
                {catalog_select(
                    "Seleccione un método",
                    &catalogs.metodos,
                    metodo.metodo_id,
                    move |id| vm.edit(|b| b.select_metodo(path, id)),
                )}
                {remove_button("Quitar método", move || vm.edit(|b| b.remove_metodo(path)))}
            </div>
            <div class="checklist__materiales">
                <span class="checklist__label">"Materiales:"</span>
                {chips}
                {catalog_select(
                    "Agregar material",
                    &available,
                    None,
                    move |id| vm.edit(|b| b.add_material(path, id)),
                )}
            </div>
            {schedule_grid(vm, path, metodo)}
        </div>
    }
}

fn actividad_view(
    vm: ChecklistDetailsViewModel,
    path: ActividadPath,
    actividad: &ActividadNode,
    catalogs: &Catalogs,
) -> impl IntoView {
    let metodos = actividad
        .metodos
        .iter()
        .enumerate()
        .map(|(metodo, node)| {
            let metodo_path = MetodoPath {
                zona: path.zona,
                actividad: path.actividad,
                metodo,
            };
            metodo_view(vm, metodo_path, node, catalogs)
        })
        .collect_view();

    view! {
        <div class="checklist__node checklist__node--actividad">
            <div class="checklist__node-header">
                {catalog_select(
                    "Seleccione una actividad",
                    &catalogs.actividades,
                    actividad.actividad_id,
                    move |id| vm.edit(|b| b.select_actividad(path, id)),
                )}
                {remove_button("Quitar actividad", move || vm.edit(|b| b.remove_actividad(path)))}
            </div>
            {metodos}
            <button type="button" class="button button--link" on:click=move |_| vm.edit(|b| b.add_metodo(path))>
                {icon("plus")}
                "Agregar método"
            </button>
        </div>
    }
}

fn zona_view(
    vm: ChecklistDetailsViewModel,
    zona: usize,
    node: &ZonaNode,
    catalogs: &Catalogs,
) -> impl IntoView {
    let actividades = node
        .actividades
        .iter()
        .enumerate()
        .map(|(actividad, child)| {
            actividad_view(vm, ActividadPath { zona, actividad }, child, catalogs)
        })
        .collect_view();

    view! {
        <div class="checklist__node checklist__node--zona">
            <div class="checklist__node-header">
                {catalog_select(
                    "Seleccione una zona",
                    &catalogs.zonas,
                    node.zona_id,
                    move |id| vm.edit(|b| b.select_zona(zona, id)),
                )}
                {remove_button("Quitar zona", move || vm.edit(|b| b.remove_zona(zona)))}
            </div>
            {actividades}
            <button type="button" class="button button--link" on:click=move |_| vm.edit(|b| b.add_actividad(zona))>
                {icon("plus")}
                "Agregar actividad"
            </button>
        </div>
    }
}

/// Create/edit screen of a checklist tree
#[component]
pub fn ChecklistDetails() -> impl IntoView {
    let params = use_params_map();
    let location = use_location();
    let navigate = use_navigate();

    let ctx = RouteContext::from_query(&location.search.get_untracked());
    let id = params
        .read_untracked()
        .get("id")
        .and_then(|raw| RecordId::from_string(&raw).ok());
    let scope = ctx.scope();

    let vm = ChecklistDetailsViewModel::new();
    vm.load(id, scope);

    let back = return_path::<Checklist>(&ctx);
    let on_submit = {
        let back = back.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let navigate = navigate.clone();
            let back = back.clone();
            vm.save_command(id, scope, move |_| navigate(&back, Default::default()));
        }
    };

    let title = match id {
        Some(_) => "Editar Checklist",
        None => "Nuevo Checklist",
    };
    let busy = move || vm.loading.get() || vm.saving.get();

    view! {
        <PageFrame page_id=page_id(&Checklist::full_name(), PAGE_CAT_DETAIL) category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{title}</h1>
                </div>
            </div>

            <div class="page__content">
                {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <form class="form checklist" on:submit=on_submit>
                    <div class="form-group">
                        <label for="nombre">"Nombre *"</label>
                        <input
                            type="text"
                            id="nombre"
                            class="form__input"
                            prop:value=move || vm.nombre.get()
                            on:input=move |ev| vm.set_nombre(event_target_value(&ev))
                            disabled=busy
                        />
                        {move || vm.nombre_error.get().map(|message| view! { <div class="form__error">{message}</div> })}
                    </div>

                    <div class="checklist__tree">
                        {move || {
                            let catalogs = vm.catalogs.get();
                            vm.builder.with(|b| {
                                b.zonas()
                                    .iter()
                                    .enumerate()
                                    .map(|(zona, node)| zona_view(vm, zona, node, &catalogs))
                                    .collect_view()
                            })
                        }}
                        <button
                            type="button"
                            class="button button--secondary"
                            on:click=move |_| {
                                vm.builder.update(|b| {
                                    b.add_zona();
                                });
                            }
                        >
                            {icon("plus")}
                            "Agregar zona"
                        </button>
                    </div>

                    <div class="form__actions">
                        <button type="submit" class="button button--primary" disabled=busy>
                            {move || if vm.saving.get() { "Guardando..." } else { "Guardar" }}
                        </button>
                        <a class="button button--secondary" href=back>"Cancelar"</a>
                    </div>
                </form>
            </div>
        </PageFrame>
    }
}
