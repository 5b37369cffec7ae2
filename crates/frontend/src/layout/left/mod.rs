use crate::shared::icons::icon;
use contracts::domain::a001_empresa::aggregate::Empresa;
use contracts::domain::a002_area::aggregate::Area;
use contracts::domain::a003_actividad::aggregate::Actividad;
use contracts::domain::a004_material::aggregate::Material;
use contracts::domain::a005_motivo::aggregate::Motivo;
use contracts::domain::a006_metodo::aggregate::Metodo;
use contracts::domain::a007_zona::aggregate::Zona;
use contracts::domain::a008_checklist::aggregate::Checklist;
use contracts::domain::common::Resource;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

fn nav_entry<R: Resource>() -> (&'static str, &'static str) {
    (R::collection_name(), R::list_name())
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();
    let entries = [
        nav_entry::<Empresa>(),
        nav_entry::<Area>(),
        nav_entry::<Zona>(),
        nav_entry::<Actividad>(),
        nav_entry::<Metodo>(),
        nav_entry::<Material>(),
        nav_entry::<Motivo>(),
        nav_entry::<Checklist>(),
    ];

    view! {
        <nav class="sidebar">
            {entries
                .into_iter()
                .map(|(collection, label)| {
                    let href = format!("/{}", collection);
                    let prefix = href.clone();
                    let class = move || {
                        if location.pathname.get().starts_with(&prefix) {
                            "sidebar__item sidebar__item--active"
                        } else {
                            "sidebar__item"
                        }
                    };
                    view! {
                        <a class=class href=href>
                            {icon(collection)}
                            <span>{label}</span>
                        </a>
                    }
                })
                .collect_view()}
        </nav>
    }
}
