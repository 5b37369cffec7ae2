use crate::shared::resource_ui::resource_form_view;
use contracts::domain::a002_area::aggregate::Area;
use leptos::prelude::*;

#[component]
pub fn AreaDetails() -> impl IntoView {
    resource_form_view::<Area>()
}
