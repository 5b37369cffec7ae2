//! Console routes and the query context threaded through them.
//!
//! Every screen carries `empresaId`, `configuracionId`, `returnTo` and `page`
//! in its query string so create/edit flows come back to the same scope and
//! page they started from.

use contracts::domain::common::{EntityId, RecordId, Resource, ScopeId};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteContext {
    #[serde(
        default,
        deserialize_with = "lenient_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub empresa_id: Option<RecordId>,

    #[serde(
        default,
        deserialize_with = "lenient_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub configuracion_id: Option<ScopeId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_to: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient_page",
        skip_serializing_if = "Option::is_none"
    )]
    pub page: Option<u32>,
}

fn lenient_id<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: EntityId,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| match T::from_string(&value) {
        Ok(id) => Some(id),
        Err(e) => {
            log::warn!("Ignoring route parameter: {}", e);
            None
        }
    }))
}

fn lenient_page<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| value.trim().parse().ok()).filter(|page| *page >= 1))
}

impl RouteContext {
    /// Parse a query string, with or without the leading `?`. A malformed
    /// id or page is dropped on its own; the other parameters are kept.
    pub fn from_query(query: &str) -> Self {
        let query = query.trim_start_matches('?');
        if query.is_empty() {
            return Self::default();
        }
        match serde_qs::from_str(query) {
            Ok(ctx) => ctx,
            Err(e) => {
                log::warn!("Ignoring malformed route query '{}': {}", query, e);
                Self::default()
            }
        }
    }

    /// `?...` suffix, or an empty string when the context is empty
    pub fn to_query(&self) -> String {
        match serde_qs::to_string(self) {
            Ok(q) if !q.is_empty() => format!("?{}", q),
            Ok(_) => String::new(),
            Err(e) => {
                log::error!("Failed to encode route context: {}", e);
                String::new()
            }
        }
    }

    pub fn scope(&self) -> Option<ScopeId> {
        self.configuracion_id
    }

    pub fn with_scope(mut self, scope: Option<ScopeId>) -> Self {
        self.configuracion_id = scope;
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page).filter(|p| *p > 1);
        self
    }

    pub fn with_return_to(mut self, path: impl Into<String>) -> Self {
        self.return_to = Some(path.into());
        self
    }

    /// Same context without `returnTo`, used for links back to a list
    pub fn without_return(&self) -> Self {
        Self {
            return_to: None,
            ..self.clone()
        }
    }
}

pub fn list_path<R: Resource>(ctx: &RouteContext) -> String {
    format!("/{}{}", R::collection_name(), ctx.to_query())
}

/// `/areas/nueva`, `/metodos/nuevo`, ...
pub fn new_path<R: Resource>(ctx: &RouteContext) -> String {
    let segment = if R::is_feminine() { "nueva" } else { "nuevo" };
    format!("/{}/{}{}", R::collection_name(), segment, ctx.to_query())
}

pub fn edit_path<R: Resource>(id: RecordId, ctx: &RouteContext) -> String {
    format!("/{}/editar/{}{}", R::collection_name(), id.as_string(), ctx.to_query())
}

pub fn detail_path<R: Resource>(id: RecordId, ctx: &RouteContext) -> String {
    format!("/{}/detalle/{}{}", R::collection_name(), id.as_string(), ctx.to_query())
}

/// Where a form goes after save or cancel: `returnTo` when it is a local
/// path, the resource list otherwise
pub fn return_path<R: Resource>(ctx: &RouteContext) -> String {
    match ctx.return_to.as_deref() {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path.to_string(),
        _ => list_path::<R>(&ctx.without_return()),
    }
}

/// Login screen, remembering where to come back to
pub fn login_path(return_to: &str) -> String {
    if return_to.is_empty() || return_to == "/" || return_to.starts_with("/login") {
        return "/login".to_string();
    }
    format!(
        "/login{}",
        RouteContext::default().with_return_to(return_to).to_query()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_area::aggregate::Area;
    use contracts::domain::a006_metodo::aggregate::Metodo;

    #[test]
    fn test_context_round_trip() {
        let ctx = RouteContext {
            empresa_id: Some(RecordId(4)),
            configuracion_id: Some(ScopeId(42)),
            return_to: Some("/areas?page=2".into()),
            page: Some(2),
        };
        let query = ctx.to_query();
        assert!(query.starts_with('?'));
        assert!(query.contains("empresaId=4"));
        assert!(query.contains("configuracionId=42"));
        assert_eq!(RouteContext::from_query(&query), ctx);
    }

    #[test]
    fn test_empty_and_malformed_queries() {
        assert_eq!(RouteContext::default().to_query(), "");
        assert_eq!(RouteContext::from_query(""), RouteContext::default());
        assert_eq!(RouteContext::from_query("?configuracionId=abc"), RouteContext::default());
    }

    #[test]
    fn test_bad_page_keeps_scope() {
        let ctx = RouteContext::from_query("configuracionId=3&page=abc");
        assert_eq!(ctx.scope(), Some(ScopeId(3)));
        assert_eq!(ctx.page, None);

        let ctx = RouteContext::from_query("empresaId=x&configuracionId=3&page=2");
        assert_eq!(ctx.empresa_id, None);
        assert_eq!(ctx.scope(), Some(ScopeId(3)));
        assert_eq!(ctx.page, Some(2));
    }

    #[test]
    fn test_entity_paths() {
        let ctx = RouteContext::default().with_scope(Some(ScopeId(7)));
        assert_eq!(list_path::<Area>(&ctx), "/areas?configuracionId=7");
        assert_eq!(new_path::<Area>(&ctx), "/areas/nueva?configuracionId=7");
        assert_eq!(new_path::<Metodo>(&RouteContext::default()), "/metodos/nuevo");
        assert_eq!(
            edit_path::<Area>(RecordId(3), &RouteContext::default()),
            "/areas/editar/3"
        );
        assert_eq!(
            detail_path::<Area>(RecordId(3), &RouteContext::default()),
            "/areas/detalle/3"
        );
    }

    #[test]
    fn test_return_path_rejects_foreign_targets() {
        let ctx = RouteContext::default()
            .with_scope(Some(ScopeId(7)))
            .with_page(3)
            .with_return_to("//evil.example/login");
        assert_eq!(return_path::<Area>(&ctx), "/areas?configuracionId=7&page=3");

        let ctx = ctx.with_return_to("/empresas?page=2");
        assert_eq!(return_path::<Area>(&ctx), "/empresas?page=2");
    }

    #[test]
    fn test_login_path_keeps_origin() {
        assert_eq!(login_path("/login?returnTo=%2Fareas"), "/login");
        assert_eq!(login_path("/"), "/login");
        let path = login_path("/areas?configuracionId=3");
        let ctx = RouteContext::from_query(path.trim_start_matches("/login"));
        assert_eq!(ctx.return_to.as_deref(), Some("/areas?configuracionId=3"));
    }
}
