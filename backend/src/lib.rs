//! # Lending Tracker Backend
//!
//! Financial-reporting backend for a lending business: credits issued
//! to users, payments received against them, and monthly plan targets
//! per category, with read endpoints comparing planned vs. actual
//! figures.
//!
//! The backend follows a layered architecture:
//! - **IO**: REST endpoints and upload parsing
//! - **Domain**: reporting and validation logic
//! - **Storage**: SQLite persistence behind storage traits

pub mod domain;
pub mod io;
pub mod storage;

use std::sync::Arc;

use axum::{
    http::Method,
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::domain::{CreditService, PerformanceService, PlanService};
use crate::storage::{
    CategoryRepository, CreditRepository, DbConnection, PaymentRepository, PlanRepository,
};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub credit_service: CreditService,
    pub plan_service: PlanService,
    pub performance_service: PerformanceService,
}

impl AppState {
    /// Wire the services against a database connection
    pub fn new(db: DbConnection) -> Self {
        let credits: Arc<CreditRepository> = Arc::new(CreditRepository::new(db.clone()));
        let payments: Arc<PaymentRepository> = Arc::new(PaymentRepository::new(db.clone()));
        let plans: Arc<PlanRepository> = Arc::new(PlanRepository::new(db.clone()));
        let categories: Arc<CategoryRepository> = Arc::new(CategoryRepository::new(db));

        Self {
            credit_service: CreditService::new(credits.clone(), payments.clone()),
            plan_service: PlanService::new(
                plans.clone(),
                categories.clone(),
                credits.clone(),
                payments.clone(),
            ),
            performance_service: PerformanceService::new(credits, payments, plans, categories),
        }
    }
}

/// Initialize the backend with all required services
pub async fn initialize_backend() -> anyhow::Result<AppState> {
    info!("Setting up database");
    let db = DbConnection::init().await?;

    info!("Setting up application state");
    Ok(AppState::new(db))
}

/// Root endpoint used as a liveness check
async fn root() -> Json<Value> {
    Json(json!({ "message": "Hello World" }))
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router {
    // CORS setup to allow browser clients to make requests
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    // Set up our application routes
    let api_routes = Router::new()
        .route("/user_credits/:user_id", get(io::rest::credit_apis::user_credits))
        .route("/plans_insert", post(io::rest::plan_apis::insert_plans))
        .route(
            "/plans_performance",
            get(io::rest::performance_apis::plans_performance),
        )
        .route(
            "/year_performance",
            get(io::rest::performance_apis::year_performance),
        );

    // Define our main application router
    Router::new()
        .route("/", get(root))
        .nest("/api", api_routes)
        .layer(cors)
        .with_state(app_state)
}
