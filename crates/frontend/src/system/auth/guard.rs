use client::login_path;
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use super::context::use_auth;

/// Renders children only with a session; otherwise sends the user to the
/// login screen with the current location as `returnTo`
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move |_| {
        if !auth.authenticated.get() {
            let here = format!(
                "{}{}",
                location.pathname.get_untracked(),
                location.search.get_untracked()
            );
            navigate(&login_path(&here), Default::default());
        }
    });

    view! {
        <Show
            when=move || auth.authenticated.get()
            fallback=|| view! { <div class="page__loading">"Redirigiendo al inicio de sesión..."</div> }
        >
            {children()}
        </Show>
    }
}
