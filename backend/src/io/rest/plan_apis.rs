//! # REST API for Plan Ingestion
//!
//! Accepts a multipart upload of tab-separated plan rows and hands
//! the parsed batch to the domain layer.

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use shared::PlansInsertResponse;
use tracing::{error, info};

use crate::domain::PlanInsertError;
use crate::io::ingest;
use crate::AppState;

/// Bulk-insert plans from an uploaded file
pub async fn insert_plans(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    info!("POST /api/plans_insert");

    let data = match read_upload(&mut multipart).await {
        Ok(Some(data)) => data,
        Ok(None) => {
            return (StatusCode::BAD_REQUEST, "Missing file upload").into_response();
        }
        Err(message) => {
            return (StatusCode::BAD_REQUEST, message).into_response();
        }
    };

    let uploads = match ingest::parse_plan_upload(&data) {
        Ok(uploads) => uploads,
        Err(e) => {
            return (StatusCode::BAD_REQUEST, e.to_string()).into_response();
        }
    };

    match state.plan_service.insert_plans(uploads).await {
        Ok(inserted) => (
            StatusCode::CREATED,
            Json(PlansInsertResponse {
                inserted,
                message: "Plans successfully inserted".to_string(),
            }),
        )
            .into_response(),
        Err(PlanInsertError::Validation(e)) => {
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
        Err(PlanInsertError::Storage(e)) => {
            error!("Failed to insert plans: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error inserting plans").into_response()
        }
    }
}

/// Pull the first uploaded file out of the multipart body
async fn read_upload(multipart: &mut Multipart) -> Result<Option<Vec<u8>>, String> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| format!("Malformed upload: {}", e))?
    {
        if field.name() == Some("file") || field.file_name().is_some() {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| format!("Malformed upload: {}", e))?;
            return Ok(Some(bytes.to_vec()));
        }
    }
    Ok(None)
}
