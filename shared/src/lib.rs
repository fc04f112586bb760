//! Shared request/response types for the lending tracker backend.
//!
//! These are the wire-level DTOs exchanged between the REST layer and
//! its clients. Domain models live in the backend crate; everything
//! here is plain serde data.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Status record for a single credit, as returned by the credit
/// status endpoint.
///
/// Closed credits carry `actual_return_date` and `total_payments`;
/// open credits carry `return_date`, `overdue_days` and the naive
/// principal/interest split. Fields that do not apply are `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditInfo {
    pub issuance_date: NaiveDate,
    pub is_closed: bool,
    /// Credit principal ("body")
    pub issuance_amount: f64,
    /// Interest rate in percent
    pub accrued_interest: f64,
    pub actual_return_date: Option<NaiveDate>,
    pub total_payments: Option<f64>,
    pub return_date: Option<NaiveDate>,
    /// Days past the scheduled return date; negative while not yet due
    pub overdue_days: Option<i64>,
    pub principal_payments: Option<f64>,
    pub interest_payments: Option<f64>,
}

/// One row of a plan upload, before category resolution and
/// validation.
///
/// `sum` is optional because an upload cell may be empty; the domain
/// layer rejects rows with a missing sum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanUpload {
    /// Must be the first calendar day of a month
    pub period: NaiveDate,
    pub sum: Option<f64>,
    pub category_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlansInsertResponse {
    pub inserted: usize,
    pub message: String,
}

/// Plan-vs-actual figures for one plan within the current month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanPerformance {
    pub period: NaiveDate,
    pub category_name: String,
    pub plan_amount: f64,
    pub actual_amount: f64,
    /// round(actual / plan * 100, 2); 0 when the plan amount is zero
    pub fulfillment_percentage: f64,
}

/// Per-month figures in the yearly performance report.
///
/// The yearly endpoint always returns twelve of these, January
/// through December, regardless of activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearPerformance {
    pub month: String,
    pub year: i32,
    pub issuance_count: i64,
    pub issuance_plan_amount: f64,
    pub issuance_actual_amount: f64,
    pub issuance_fulfillment_percentage: f64,
    pub payment_count: i64,
    pub payment_plan_amount: f64,
    pub payment_actual_amount: f64,
    pub payment_fulfillment_percentage: f64,
    /// This month's share of the yearly issuance total, in percent
    pub issuance_year_percentage: f64,
    /// This month's share of the yearly payment total, in percent
    pub payment_year_percentage: f64,
}
