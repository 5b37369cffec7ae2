use crate::shared::resource_ui::{resource_list_view, ListOptions};
use contracts::domain::a006_metodo::aggregate::Metodo;
use leptos::prelude::*;

/// Cleaning methods; also the leaves of the checklist tree
#[component]
pub fn MetodoList() -> impl IntoView {
    resource_list_view::<Metodo>(ListOptions::default())
}
