//! # REST API for Plan Performance Reports
//!
//! Read-only endpoints for the monthly plan-vs-actual report and the
//! yearly performance report.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use tracing::{error, info};

use crate::AppState;

// Query parameters for the monthly plan-vs-actual API
#[derive(Debug, Deserialize)]
pub struct PlansPerformanceQuery {
    /// Target date; defaults to today
    pub date: Option<NaiveDate>,
}

// Query parameters for the yearly performance API
#[derive(Debug, Deserialize)]
pub struct YearPerformanceQuery {
    pub year: i32,
}

/// Plan-vs-actual for the target date's month
pub async fn plans_performance(
    State(state): State<AppState>,
    Query(query): Query<PlansPerformanceQuery>,
) -> impl IntoResponse {
    info!("GET /api/plans_performance - query: {:?}", query);

    let target_date = query.date.unwrap_or_else(|| Local::now().date_naive());
    match state.plan_service.plans_performance(target_date).await {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(e) => {
            error!("Failed to compute plan performance: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error computing plan performance",
            )
                .into_response()
        }
    }
}

/// Twelve-month performance report for one year
pub async fn year_performance(
    State(state): State<AppState>,
    Query(query): Query<YearPerformanceQuery>,
) -> impl IntoResponse {
    info!("GET /api/year_performance - query: {:?}", query);

    match state.performance_service.year_performance(query.year).await {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(e) => {
            error!("Failed to compute year performance: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error computing year performance",
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::DbConnection;

    async fn setup_test_state() -> AppState {
        let db = DbConnection::init_test().await.unwrap();
        AppState::new(db)
    }

    #[tokio::test]
    async fn test_plans_performance_handler_defaults_to_today() {
        let state = setup_test_state().await;

        let response =
            plans_performance(State(state), Query(PlansPerformanceQuery { date: None })).await;

        assert_eq!(response.into_response().status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_year_performance_handler_ok() {
        let state = setup_test_state().await;

        let response =
            year_performance(State(state), Query(YearPerformanceQuery { year: 2024 })).await;

        assert_eq!(response.into_response().status(), StatusCode::OK);
    }
}
