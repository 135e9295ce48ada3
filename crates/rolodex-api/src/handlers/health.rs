//! Database health check.

use axum::extract::State;
use axum::Json;
use tracing::error;

use crate::schemas::HealthResponse;
use crate::{ApiError, AppState};

pub const HEALTHY_MESSAGE: &str = "The API is up and running!";
pub const UNHEALTHY_MESSAGE: &str = "Could not connect to the database";

/// Check that the database answers a trivial query.
#[utoipa::path(get, path = "/contacts/healthchecker", tag = "default",
    responses(
        (status = 200, description = "Database reachable", body = HealthResponse),
        (status = 500, description = "Database unreachable", body = crate::error::ErrorBody),
    ))]
pub async fn healthchecker(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    match state.db.ping().await {
        Ok(()) => Ok(Json(HealthResponse {
            message: HEALTHY_MESSAGE.to_string(),
        })),
        Err(e) => {
            error!(subsystem = "api", component = "health", error = %e, "Health check failed");
            Err(ApiError::Internal(UNHEALTHY_MESSAGE.to_string()))
        }
    }
}
