use crate::shared::resource_ui::resource_form_view;
use contracts::domain::a003_actividad::aggregate::Actividad;
use leptos::prelude::*;

#[component]
pub fn ActividadDetails() -> impl IntoView {
    resource_form_view::<Actividad>()
}
