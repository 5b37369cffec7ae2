use crate::shared::resource_ui::{resource_list_view, ListOptions};
use contracts::domain::a007_zona::aggregate::Zona;
use leptos::prelude::*;

#[component]
pub fn ZonaList() -> impl IntoView {
    resource_list_view::<Zona>(ListOptions::default())
}
