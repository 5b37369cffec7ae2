use crate::shared::resource_ui::resource_form_view;
use contracts::domain::a004_material::aggregate::Material;
use leptos::prelude::*;

#[component]
pub fn MaterialDetails() -> impl IntoView {
    resource_form_view::<Material>()
}
