use crate::shared::resource_ui::{resource_list_view, ListOptions};
use contracts::domain::a003_actividad::aggregate::Actividad;
use leptos::prelude::*;

#[component]
pub fn ActividadList() -> impl IntoView {
    resource_list_view::<Actividad>(ListOptions::default())
}
