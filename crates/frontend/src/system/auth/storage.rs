//! Browser session store: token in localStorage, mirrored to a cookie.

use crate::shared::config::CONFIG;
use client::session::{SessionListener, SubscriptionId};
use client::{SessionEvent, SessionListeners, SessionStore};
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlDocument};

thread_local! {
    static LISTENERS: SessionListeners = SessionListeners::default();
}

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn get_html_document() -> Option<HtmlDocument> {
    window()?.document()?.dyn_into::<HtmlDocument>().ok()
}

/// All instances share the same browser storage and listener registry.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebSessionStore;

impl SessionStore for WebSessionStore {
    fn token(&self) -> Option<String> {
        let session = &CONFIG.session;
        let stored = get_local_storage()
            .and_then(|storage| storage.get_item(&session.storage_key).ok().flatten())
            .filter(|token| !token.is_empty());
        if stored.is_some() {
            return stored;
        }
        // Cookie only: localStorage was wiped or is unavailable
        let cookies = get_html_document()?.cookie().ok()?;
        session.token_from_cookies(&cookies)
    }

    fn set_token(&self, token: &str) {
        let session = &CONFIG.session;
        if let Some(storage) = get_local_storage() {
            let _ = storage.set_item(&session.storage_key, token);
        }
        if let Some(document) = get_html_document() {
            let protocol = document
                .location()
                .and_then(|location| location.protocol().ok())
                .unwrap_or_default();
            let _ = document.set_cookie(&session.cookie_header(token, &protocol));
        }
        LISTENERS.with(|listeners| listeners.notify(SessionEvent::SignedIn));
    }

    fn clear(&self) {
        let session = &CONFIG.session;
        if let Some(storage) = get_local_storage() {
            let _ = storage.remove_item(&session.storage_key);
        }
        if let Some(document) = get_html_document() {
            let _ = document.set_cookie(&session.cookie_clear_header());
        }
        LISTENERS.with(|listeners| listeners.notify(SessionEvent::Cleared));
    }

    fn subscribe(&self, listener: SessionListener) -> SubscriptionId {
        LISTENERS.with(|listeners| listeners.add(listener))
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        LISTENERS.with(|listeners| listeners.remove(id));
    }
}
