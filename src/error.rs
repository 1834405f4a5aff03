//! Operation-scoped error taxonomy shared by the services and the HTTP layer.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::db::DbLockError;

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;

/// Failure of a single service operation. There is no process-fatal class;
/// every error is reported to whatever invoked the operation.
#[derive(Debug)]
pub enum ServiceError {
    /// The referenced record does not exist (entity name for the message)
    NotFound(&'static str),
    /// A record that must be unique already exists
    AlreadyExists(&'static str),
    /// Caller-supplied fields failed validation; raised before any store access
    Validation(String),
    /// The store rejected the operation
    Store(rusqlite::Error),
    /// The store connection could not be acquired
    Unavailable,
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceError::NotFound(entity) => write!(f, "{} not found", entity),
            ServiceError::AlreadyExists(entity) => write!(f, "{} already exists", entity),
            ServiceError::Validation(msg) => write!(f, "{}", msg),
            ServiceError::Store(_) => write!(f, "database error"),
            ServiceError::Unavailable => write!(f, "database unavailable"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ServiceError::Store(e) => Some(e),
            _ => None,
        }
    }
}

impl From<rusqlite::Error> for ServiceError {
    fn from(e: rusqlite::Error) -> Self {
        ServiceError::Store(e)
    }
}

impl From<DbLockError> for ServiceError {
    fn from(_: DbLockError) -> Self {
        ServiceError::Unavailable
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::AlreadyExists(_) => StatusCode::CONFLICT,
            ServiceError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServiceError::Store(e) => {
                tracing::error!("store error: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ServiceError::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
