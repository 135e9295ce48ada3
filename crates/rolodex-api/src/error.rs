//! API error type and its HTTP mapping.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::{error, warn};
use utoipa::ToSchema;

/// Body of every non-2xx response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = "Contact with id=7 not found")]
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    ServiceUnavailable(String),
    /// Server-side failure whose message is safe to show.
    #[error("{0}")]
    Internal(String),
    /// Store failure; logged in full, shown generically.
    #[error(transparent)]
    Database(rolodex_core::Error),
    /// Extractor rejection that keeps axum's status.
    #[error("{1}")]
    Rejection(StatusCode, String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal(_) | ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Rejection(status, _) => *status,
        }
    }

    fn public_message(&self) -> String {
        match self {
            ApiError::Database(_) => "Internal server error".to_string(),
            ApiError::ServiceUnavailable(_) => "Database unavailable".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<rolodex_core::Error> for ApiError {
    fn from(err: rolodex_core::Error) -> Self {
        use rolodex_core::{Contact, Error};

        match err {
            Error::InvalidInput(msg) => ApiError::Validation(msg),
            Error::UniqueViolation { constraint, .. }
                if constraint == Contact::EMAIL_UNIQUE_INDEX =>
            {
                ApiError::Conflict("A contact with this email already exists".to_string())
            }
            Error::UniqueViolation { constraint, .. } => {
                ApiError::Conflict(format!("Duplicate value violates {constraint}"))
            }
            Error::StoreUnavailable(msg) => ApiError::ServiceUnavailable(msg),
            other => ApiError::Database(other),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
                ApiError::Validation(rejection.body_text())
            }
            other => ApiError::Rejection(other.status(), other.body_text()),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        match rejection {
            PathRejection::FailedToDeserializePathParams(_) => {
                ApiError::Validation(rejection.body_text())
            }
            other => ApiError::Rejection(other.status(), other.body_text()),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            ApiError::Database(err) => error!(error = %err, "Store error while handling request"),
            ApiError::ServiceUnavailable(msg) => warn!(error = %msg, "Store unavailable"),
            ApiError::Internal(msg) => error!(error = %msg, "Internal error"),
            _ => {}
        }

        let body = Json(ErrorBody {
            error: self.public_message(),
        });

        (status, body).into_response()
    }
}
