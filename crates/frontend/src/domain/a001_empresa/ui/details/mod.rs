use crate::shared::resource_ui::resource_form_view;
use contracts::domain::a001_empresa::aggregate::Empresa;
use leptos::prelude::*;

#[component]
pub fn EmpresaDetails() -> impl IntoView {
    resource_form_view::<Empresa>()
}
