use contracts::domain::common::Estado;
use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge content
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    view! {
        <span class=move || format!("badge {}", variant_class())>
            {children()}
        </span>
    }
}

/// Activo / Inactivo pill of a list row
#[component]
pub fn EstadoBadge(estado: Estado) -> impl IntoView {
    let class = if estado.is_active() {
        "badge badge--status badge--success"
    } else {
        "badge badge--status badge--error"
    };

    view! { <span class=class>{estado.label()}</span> }
}
