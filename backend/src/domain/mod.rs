//! # Domain Layer
//!
//! Business logic for the lending tracker: credit status reporting,
//! plan validation and bulk insert, and the monthly/yearly
//! plan-vs-actual reports. Services talk to storage through the
//! traits in `crate::storage::traits` and know nothing about HTTP.

pub mod calendar;
pub mod credit_service;
pub mod models;
pub mod performance_service;
pub mod plan_service;

pub use credit_service::{CreditReportError, CreditService};
pub use performance_service::PerformanceService;
pub use plan_service::{PlanInsertError, PlanService};
