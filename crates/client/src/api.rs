//! Typed REST client.
//!
//! Endpoint layout per resource (`{r}` = [`Resource::collection_name`]):
//!
//! | call       | request                                        |
//! |------------|------------------------------------------------|
//! | `list`     | `GET /api/{r}/{scope}?nombre=&estado=&page=`   |
//! | `show`     | `GET /api/{r}/{show\|detalle}/{id}`            |
//! | `store`    | `POST /api/{r}/store/{scope}`                  |
//! | `update`   | `PUT /api/{r}/update/{id}`                     |
//! | `toggle`   | `DELETE /api/{r}/destroy/{id}` (flips estado)  |
//!
//! Unscoped resources drop the `{scope}` segment.

use crate::error::ApiError;
use crate::session::SessionStore;
use crate::transport::{HttpRequest, Method, Transport};
use contracts::domain::common::{EntityId, RecordId, Resource, ResourcePayload, ScopeId};
use contracts::shared::api::{DataResponse, Paginated};
use contracts::system::auth::{LoginRequest, LoginResponse};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Deterministic description of one list request
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListQuery {
    pub scope: Option<ScopeId>,
    pub page: u32,
    pub nombre: Option<String>,
    pub estado: Option<u8>,
}

#[derive(Serialize)]
struct ListParams<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    nombre: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    estado: Option<u8>,
    page: u32,
}

impl ListQuery {
    /// Encoded query string; absent filters are omitted entirely
    pub fn to_query_string(&self) -> Result<String, ApiError> {
        let params = ListParams {
            nombre: self.nombre.as_deref(),
            estado: self.estado,
            page: self.page.max(1),
        };
        serde_qs::to_string(&params)
            .map_err(|e| ApiError::network(format!("No se pudo codificar la consulta: {}", e)))
    }
}

#[derive(Clone)]
pub struct ApiClient<T, S> {
    transport: T,
    session: S,
}

impl<T: Transport, S: SessionStore> ApiClient<T, S> {
    pub fn new(transport: T, session: S) -> Self {
        Self { transport, session }
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    // ============================================================================
    // Resources
    // ============================================================================

    pub async fn list<R: Resource>(&self, query: &ListQuery) -> Result<Paginated<R>, ApiError> {
        let path = scoped_path::<R>(None, query.scope)?;
        let request = HttpRequest::new(Method::Get, path).with_query(query.to_query_string()?);
        let body = self.execute(request).await?;
        decode(&body)
    }

    /// Every active record of a scope, following pagination to the last page.
    /// Feeds the selects of the checklist editor.
    pub async fn list_all<R: Resource>(&self, scope: Option<ScopeId>) -> Result<Vec<R>, ApiError> {
        let mut query = ListQuery {
            scope,
            page: 1,
            nombre: None,
            estado: Some(1),
        };
        let mut records = Vec::new();
        loop {
            let page = self.list::<R>(&query).await?;
            let last_page = page.meta.last_page;
            records.extend(page.data);
            if query.page >= last_page {
                break;
            }
            query.page += 1;
        }
        Ok(records)
    }

    pub async fn show<R: Resource>(&self, id: RecordId) -> Result<R, ApiError> {
        let path = format!(
            "/api/{}/{}/{}",
            R::collection_name(),
            R::show_segment(),
            id.as_string()
        );
        let body = self.execute(HttpRequest::new(Method::Get, path)).await?;
        decode::<DataResponse<R>>(&body).map(|r| r.data)
    }

    pub async fn store<R: Resource>(
        &self,
        scope: Option<ScopeId>,
        payload: &R::Payload,
    ) -> Result<R, ApiError> {
        payload.validate()?;
        let path = scoped_path::<R>(Some("store"), scope)?;
        let request = HttpRequest::new(Method::Post, path).with_body(encode(payload)?);
        let body = self.execute(request).await?;
        decode::<DataResponse<R>>(&body).map(|r| r.data)
    }

    pub async fn update<R: Resource>(
        &self,
        id: RecordId,
        payload: &R::Payload,
    ) -> Result<R, ApiError> {
        payload.validate()?;
        let path = format!("/api/{}/update/{}", R::collection_name(), id.as_string());
        let request = HttpRequest::new(Method::Put, path).with_body(encode(payload)?);
        let body = self.execute(request).await?;
        decode::<DataResponse<R>>(&body).map(|r| r.data)
    }

    /// Activate/deactivate through the destroy endpoint; nothing is deleted
    pub async fn toggle<R: Resource>(&self, id: RecordId) -> Result<R, ApiError> {
        let path = format!("/api/{}/destroy/{}", R::collection_name(), id.as_string());
        let body = self.execute(HttpRequest::new(Method::Delete, path)).await?;
        decode::<DataResponse<R>>(&body).map(|r| r.data)
    }

    // ============================================================================
    // Auth
    // ============================================================================

    pub async fn login(&self, email: String, password: String) -> Result<LoginResponse, ApiError> {
        let request = HttpRequest::new(Method::Post, "/api/login")
            .with_body(encode(&LoginRequest { email, password })?);
        log::debug!("{} {}", request.method, request.path);

        let response = self
            .transport
            .send(request)
            .await
            .map_err(ApiError::network)?;
        if !response.is_success() {
            return Err(match ApiError::from_response(response.status, &response.body) {
                ApiError::Unauthenticated => ApiError::Invalid {
                    field: "email".to_string(),
                    message: "Correo o contraseña incorrectos".to_string(),
                },
                other => other,
            });
        }

        let login: LoginResponse = decode(&response.body)?;
        self.session.set_token(&login.token);
        log::info!("Session started");
        Ok(login)
    }

    pub fn logout(&self) {
        log::info!("Session closed");
        self.session.clear();
    }

    // ============================================================================
    // Plumbing
    // ============================================================================

    async fn execute(&self, request: HttpRequest) -> Result<String, ApiError> {
        let token = match self.session.token().filter(|t| !t.is_empty()) {
            Some(token) => token,
            None => {
                log::warn!("No session token for {} {}", request.method, request.path);
                self.session.clear();
                return Err(ApiError::Unauthenticated);
            }
        };

        let request = request.with_bearer(token);
        log::debug!("{} {}", request.method, request.path_and_query());

        let response = self
            .transport
            .send(request)
            .await
            .map_err(|e| {
                log::error!("Request failed: {}", e);
                ApiError::network(e)
            })?;

        if response.is_success() {
            return Ok(response.body);
        }

        let error = ApiError::from_response(response.status, &response.body);
        if error.is_unauthenticated() {
            self.session.clear();
        }
        Err(error)
    }
}

fn scoped_path<R: Resource>(action: Option<&str>, scope: Option<ScopeId>) -> Result<String, ApiError> {
    let mut path = format!("/api/{}", R::collection_name());
    if let Some(action) = action {
        path.push('/');
        path.push_str(action);
    }
    if R::scope_kind().requires_scope() {
        let scope = scope.ok_or_else(|| ApiError::ScopeMissing {
            resource: R::list_name().to_lowercase(),
        })?;
        path.push('/');
        path.push_str(&scope.as_string());
    }
    Ok(path)
}

fn encode<P: Serialize>(payload: &P) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(payload)
        .map_err(|e| ApiError::network(format!("No se pudo serializar la solicitud: {}", e)))
}

fn decode<D: DeserializeOwned>(body: &str) -> Result<D, ApiError> {
    serde_json::from_str(body).map_err(|e| {
        log::error!("Failed to parse response: {}", e);
        ApiError::network(format!("Respuesta inválida del servidor: {}", e))
    })
}
