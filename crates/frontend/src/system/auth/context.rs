use client::{SessionEvent, SessionStore};
use leptos::prelude::*;
use std::rc::Rc;

use super::storage::WebSessionStore;

/// Whether a session token is present, kept in sync with [`WebSessionStore`]
#[derive(Clone, Copy, Debug)]
pub struct AuthContext {
    pub authenticated: RwSignal<bool>,
}

impl AuthContext {
    pub fn is_authenticated(&self) -> bool {
        self.authenticated.get()
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let authenticated = RwSignal::new(WebSessionStore.is_authenticated());

    // Any 401 clears the store; the guard reacts to the flag flipping.
    let subscription = WebSessionStore.subscribe(Rc::new(move |event| {
        let signed_in = event == SessionEvent::SignedIn;
        if authenticated.try_get_untracked() != Some(signed_in) {
            log::info!("Session state changed: {:?}", event);
        }
        authenticated.try_set(signed_in);
    }));
    on_cleanup(move || WebSessionStore.unsubscribe(subscription));

    provide_context(AuthContext { authenticated });

    children()
}

/// Hook to access auth state
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthProvider not found in component tree")
}
