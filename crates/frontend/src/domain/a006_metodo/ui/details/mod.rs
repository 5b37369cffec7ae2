use crate::shared::resource_ui::resource_form_view;
use contracts::domain::a006_metodo::aggregate::Metodo;
use leptos::prelude::*;

#[component]
pub fn MetodoDetails() -> impl IntoView {
    resource_form_view::<Metodo>()
}
