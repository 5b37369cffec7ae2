use crate::shared::resource_ui::resource_form_view;
use contracts::domain::a005_motivo::aggregate::Motivo;
use leptos::prelude::*;

#[component]
pub fn MotivoDetails() -> impl IntoView {
    resource_form_view::<Motivo>()
}
