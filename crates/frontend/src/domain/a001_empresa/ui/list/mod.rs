use crate::shared::resource_ui::{resource_list_view, ListOptions, RowLink};
use client::{list_path, RouteContext};
use contracts::domain::a001_empresa::aggregate::Empresa;
use contracts::domain::a002_area::aggregate::Area;
use contracts::domain::a007_zona::aggregate::Zona;
use contracts::domain::a008_checklist::aggregate::Checklist;
use contracts::domain::common::Resource;
use leptos::prelude::*;

/// Links from an empresa to the catalogues of its configuration. Only the
/// empresa id travels: the list screen resolves the configuration itself.
fn empresa_links(empresa: &Empresa) -> Vec<RowLink> {
    let ctx = RouteContext {
        empresa_id: Some(empresa.id()),
        ..RouteContext::default()
    };
    vec![
        RowLink::new("Áreas", list_path::<Area>(&ctx)),
        RowLink::new("Zonas", list_path::<Zona>(&ctx)),
        RowLink::new("Checklists", list_path::<Checklist>(&ctx)),
    ]
}

#[component]
pub fn EmpresaList() -> impl IntoView {
    resource_list_view::<Empresa>(ListOptions {
        with_detail: false,
        row_links: empresa_links,
    })
}
