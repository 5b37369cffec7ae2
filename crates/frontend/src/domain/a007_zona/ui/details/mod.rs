use crate::shared::resource_ui::resource_form_view;
use contracts::domain::a007_zona::aggregate::Zona;
use leptos::prelude::*;

#[component]
pub fn ZonaDetails() -> impl IntoView {
    resource_form_view::<Zona>()
}
