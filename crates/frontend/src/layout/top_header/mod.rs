//! TopHeader component - application top navigation bar.

use crate::shared::api_utils::api;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    // Clearing the session flips the auth flag; the guard then redirects
    let logout = move |_| api().logout();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"CIDSON · Operaciones de limpieza"</span>
            </div>

            <div class="top-header__actions">
                <button class="top-header__icon-btn" on:click=logout title="Cerrar sesión">
                    {icon("logout")}
                    <span>"Cerrar sesión"</span>
                </button>
            </div>
        </div>
    }
}
