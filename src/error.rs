//! error.rs
//! Errores que salen por HTTP. Todos se renderizan como `{"detail": "..."}`.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Input del cliente inválido o incompleto (422).
    #[error("{0}")]
    Validation(String),

    /// Falta configuración del servicio externo (503).
    #[error("{0}")]
    ServiceUnavailable(String),

    /// El gateway falló o respondió no-2xx.
    #[error("Failed to send message: {0}")]
    Upstream(String),

    #[error("Internal error: {0}")]
    Internal(String),

    /// Falla de la capa de persistencia.
    #[error("Database error: {0:#}")]
    Store(#[from] anyhow::Error),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Upstream(_) | ApiError::Internal(_) | ApiError::Store(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "detail": self.to_string() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_taxonomy() {
        assert_eq!(ApiError::Validation("x".into()).status_code(), 422);
        assert_eq!(ApiError::ServiceUnavailable("x".into()).status_code(), 503);
        assert_eq!(ApiError::Upstream("x".into()).status_code(), 500);
        assert_eq!(ApiError::Internal("x".into()).status_code(), 500);
        assert_eq!(ApiError::Store(anyhow::anyhow!("x")).status_code(), 500);
    }

    #[test]
    fn messages_carry_the_cause() {
        assert_eq!(
            ApiError::Upstream("connection refused".into()).to_string(),
            "Failed to send message: connection refused"
        );
        assert_eq!(
            ApiError::Internal("bad url".into()).to_string(),
            "Internal error: bad url"
        );
        let store = ApiError::Store(anyhow::anyhow!("disk full").context("insert failed"));
        assert_eq!(store.to_string(), "Database error: insert failed: disk full");
    }
}
