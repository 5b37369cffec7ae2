use crate::shared::resource_ui::{resource_list_view, ListOptions};
use contracts::domain::a002_area::aggregate::Area;
use leptos::prelude::*;

/// Áreas of the selected configuration
#[component]
pub fn AreaList() -> impl IntoView {
    resource_list_view::<Area>(ListOptions::default())
}
