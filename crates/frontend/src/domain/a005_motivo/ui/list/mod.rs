use crate::shared::resource_ui::{resource_list_view, ListOptions};
use contracts::domain::a005_motivo::aggregate::Motivo;
use leptos::prelude::*;

#[component]
pub fn MotivoList() -> impl IntoView {
    resource_list_view::<Motivo>(ListOptions::default())
}
