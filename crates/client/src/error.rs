//! Error taxonomy of the console.
//!
//! Backend failures arrive as free text (`"nombre already exists"`,
//! `"Unauthenticated."`, HTML error pages). They are classified exactly once,
//! here, so screens match on variants instead of on display strings.

use contracts::domain::common::FieldError;
use contracts::shared::api::ApiErrorBody;
use thiserror::Error;

/// Substrings the backend uses to report a name-uniqueness violation
const DUPLICATE_MARKERS: &[&str] = &[
    "already exists",
    "already been taken",
    "ya existe",
    "ya ha sido tomado",
    "ya está en uso",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// A scoped resource was queried without its parent configuration
    #[error("Seleccione una configuración antes de consultar {resource}")]
    ScopeMissing { resource: String },

    /// The backend rejected a create/update because the name is taken
    #[error("{message}")]
    DuplicateName { field: String, message: String },

    /// Token missing or expired
    #[error("La sesión ha expirado. Inicie sesión nuevamente")]
    Unauthenticated,

    /// Field-level validation failure, from the client or from a 422
    #[error("{message}")]
    Invalid { field: String, message: String },

    #[error("Error de red o del servidor: {message}")]
    NetworkOrServer { status: Option<u16>, message: String },
}

impl ApiError {
    /// Classify a non-2xx response
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed: ApiErrorBody = serde_json::from_str(body).unwrap_or_default();
        let message = parsed
            .message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_string);

        let says_unauthenticated = message
            .as_deref()
            .map(|m| m.to_lowercase().contains("unauthenticated"))
            .unwrap_or(false);
        if status == 401 || says_unauthenticated {
            return ApiError::Unauthenticated;
        }

        if let Some(errors) = &parsed.errors {
            for (field, messages) in errors {
                if let Some(m) = messages.iter().find(|m| is_duplicate_message(m)) {
                    return ApiError::DuplicateName {
                        field: field.clone(),
                        message: m.clone(),
                    };
                }
            }
        }
        if let Some(m) = message.as_deref().filter(|m| is_duplicate_message(m)) {
            return ApiError::DuplicateName {
                field: "nombre".to_string(),
                message: m.to_string(),
            };
        }

        if status == 422 {
            let first = parsed
                .errors
                .as_ref()
                .and_then(|errors| errors.iter().find_map(|(f, ms)| ms.first().map(|m| (f.clone(), m.clone()))));
            if let Some((field, message)) = first {
                return ApiError::Invalid { field, message };
            }
        }

        ApiError::NetworkOrServer {
            status: Some(status),
            message: message.unwrap_or_else(|| format!("HTTP {}", status)),
        }
    }

    /// Failure below HTTP (connection refused, CORS, aborted request)
    pub fn network(message: impl Into<String>) -> Self {
        ApiError::NetworkOrServer {
            status: None,
            message: message.into(),
        }
    }

    /// Form field the error belongs to, for inline display under the input
    pub fn field(&self) -> Option<&str> {
        match self {
            ApiError::DuplicateName { field, .. } | ApiError::Invalid { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Text to show under `field` when the error belongs to it
    pub fn message_for(&self, field: &str) -> Option<String> {
        (self.field() == Some(field)).then(|| self.to_string())
    }

    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, ApiError::Unauthenticated)
    }

    /// Only generic failures get a "Reintentar" affordance
    pub fn is_retryable(&self) -> bool {
        matches!(self, ApiError::NetworkOrServer { .. })
    }
}

impl From<FieldError> for ApiError {
    fn from(e: FieldError) -> Self {
        ApiError::Invalid {
            field: e.field.to_string(),
            message: e.message,
        }
    }
}

fn is_duplicate_message(message: &str) -> bool {
    let lower = message.to_lowercase();
    DUPLICATE_MARKERS.iter().any(|marker| lower.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_in_top_level_message() {
        let err = ApiError::from_response(422, r#"{"message":"nombre already exists"}"#);
        assert_eq!(
            err,
            ApiError::DuplicateName {
                field: "nombre".into(),
                message: "nombre already exists".into()
            }
        );
    }

    #[test]
    fn test_duplicate_in_field_errors() {
        let body = r#"{"message":"The given data was invalid.","errors":{"razonSocial":["The razon social has already been taken."]}}"#;
        let err = ApiError::from_response(422, body);
        assert_eq!(err.field(), Some("razonSocial"));
        assert!(matches!(err, ApiError::DuplicateName { .. }));
    }

    #[test]
    fn test_spanish_duplicate_marker() {
        let err = ApiError::from_response(409, r#"{"message":"El área YA EXISTE en esta configuración"}"#);
        assert!(matches!(err, ApiError::DuplicateName { .. }));
    }

    #[test]
    fn test_unauthenticated() {
        assert_eq!(ApiError::from_response(401, ""), ApiError::Unauthenticated);
        assert_eq!(
            ApiError::from_response(500, r#"{"message":"Unauthenticated."}"#),
            ApiError::Unauthenticated
        );
    }

    #[test]
    fn test_plain_validation_error_is_field_level() {
        let body = r#"{"message":"invalid","errors":{"nombre":["El nombre es obligatorio"]}}"#;
        let err = ApiError::from_response(422, body);
        assert_eq!(
            err,
            ApiError::Invalid {
                field: "nombre".into(),
                message: "El nombre es obligatorio".into()
            }
        );
    }

    #[test]
    fn test_server_error_is_generic_and_retryable() {
        let err = ApiError::from_response(500, "<html>Server Error</html>");
        assert_eq!(
            err,
            ApiError::NetworkOrServer {
                status: Some(500),
                message: "HTTP 500".into()
            }
        );
        assert!(err.is_retryable());
        assert!(!ApiError::Unauthenticated.is_retryable());
    }

    #[test]
    fn test_duplicate_name_belongs_to_its_field() {
        let err = ApiError::from_response(
            422,
            r#"{"message":"invalid","errors":{"nombre":["El nombre ya ha sido tomado."]}}"#,
        );
        assert_eq!(err.message_for("nombre").as_deref(), Some("El nombre ya ha sido tomado."));
        assert_eq!(err.message_for("descripcion"), None);
        assert_eq!(ApiError::network("timeout").message_for("nombre"), None);
    }
}
