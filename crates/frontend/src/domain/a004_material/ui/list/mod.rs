use crate::shared::resource_ui::{resource_list_view, ListOptions};
use contracts::domain::a004_material::aggregate::Material;
use leptos::prelude::*;

#[component]
pub fn MaterialList() -> impl IntoView {
    resource_list_view::<Material>(ListOptions::default())
}
