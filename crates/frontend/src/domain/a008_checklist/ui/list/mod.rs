use crate::shared::resource_ui::{resource_list_view, ListOptions};
use contracts::domain::a008_checklist::aggregate::Checklist;
use leptos::prelude::*;

#[component]
pub fn ChecklistList() -> impl IntoView {
    resource_list_view::<Checklist>(ListOptions {
        with_detail: true,
        ..ListOptions::default()
    })
}
