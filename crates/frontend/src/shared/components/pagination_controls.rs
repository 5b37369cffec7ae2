use crate::shared::icons::icon;
use client::PageButton;
use leptos::prelude::*;

/// Previous/next arrows around the numbered page buttons of a list.
///
/// `previous` and `next` are the target pages, `None` when that direction is
/// disabled.
#[component]
pub fn PaginationControls(
    #[prop(into)] buttons: Signal<Vec<PageButton>>,

    #[prop(into)] previous: Signal<Option<u32>>,

    #[prop(into)] next: Signal<Option<u32>>,

    /// Total count of items
    #[prop(into)]
    total_items: Signal<u64>,

    /// Disables every button while a request is in flight
    #[prop(into)]
    disabled: Signal<bool>,

    on_page_change: Callback<u32>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| {
                    if let Some(page) = previous.get() {
                        on_page_change.run(page);
                    }
                }
                disabled=move || disabled.get() || previous.get().is_none()
                title="Página anterior"
            >
                {icon("chevron-left")}
            </button>
            {move || {
                buttons
                    .get()
                    .into_iter()
                    .map(|button| {
                        let class = if button.active {
                            "pagination-btn pagination-btn--active"
                        } else {
                            "pagination-btn"
                        };
                        view! {
                            <button
                                class=class
                                on:click=move |_| on_page_change.run(button.page)
                                disabled=move || disabled.get() || button.active
                            >
                                {button.page.to_string()}
                            </button>
                        }
                    })
                    .collect_view()
            }}
            <button
                class="pagination-btn"
                on:click=move |_| {
                    if let Some(page) = next.get() {
                        on_page_change.run(page);
                    }
                }
                disabled=move || disabled.get() || next.get().is_none()
                title="Página siguiente"
            >
                {icon("chevron-right")}
            </button>
            <span class="pagination-info">
                {move || format!("{} registros", total_items.get())}
            </span>
        </div>
    }
}
