//! # REST API for Credit Status
//!
//! Endpoint reporting the status of every credit a user owns.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::{error, info};

use crate::domain::CreditReportError;
use crate::AppState;

/// Report status for all credits of one user
pub async fn user_credits(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> impl IntoResponse {
    info!("GET /api/user_credits/{}", user_id);

    match state.credit_service.user_credits(user_id).await {
        Ok(records) => (StatusCode::OK, Json(records)).into_response(),
        Err(e @ CreditReportError::NoCredits) => {
            (StatusCode::NOT_FOUND, e.to_string()).into_response()
        }
        Err(CreditReportError::Storage(e)) => {
            error!("Failed to report credits for user {}: {}", user_id, e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error reporting credits").into_response()
        }
    }
}
