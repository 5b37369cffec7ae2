//! API utilities for frontend-backend communication
//!
//! Wires the console's [`ApiClient`] to the browser: gloo-net for HTTP and
//! localStorage/cookie for the session token.

use crate::shared::config::CONFIG;
use crate::system::auth::storage::WebSessionStore;
use async_trait::async_trait;
use client::{ApiClient, HttpRequest, HttpResponse, Method, Transport};
use gloo_net::http::Request;

/// Client used by every screen. Cheap to build: both halves are unit structs
/// over browser globals.
pub type ConsoleApi = ApiClient<GlooTransport, WebSessionStore>;

pub fn api() -> ConsoleApi {
    ApiClient::new(GlooTransport, WebSessionStore)
}

/// Get the base URL for API requests
///
/// `api.base_url` from the configuration when set, otherwise the current
/// page host on `api.port`.
pub fn api_base() -> String {
    let (protocol, hostname) = match web_sys::window() {
        Some(window) => {
            let location = window.location();
            (
                location.protocol().unwrap_or_else(|_| "http:".to_string()),
                location
                    .hostname()
                    .unwrap_or_else(|_| "127.0.0.1".to_string()),
            )
        }
        None => ("http:".to_string(), "127.0.0.1".to_string()),
    };
    CONFIG.api_base(&protocol, &hostname)
}

/// [`Transport`] over `fetch`
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String> {
        let url = request.url(&api_base());
        let mut builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        }
        .header("Accept", "application/json");

        if let Some(token) = &request.bearer {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }

        let prepared = match &request.body {
            Some(body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(|e| format!("Failed to build request: {}", e))?;

        let response = prepared
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| format!("Failed to read response: {}", e))?;

        Ok(HttpResponse { status, body })
    }
}
