//! # Storage Traits
//!
//! Storage abstraction traits that let the domain layer work against
//! an injected store interface instead of concrete SQL. All
//! relationship traversal (credit -> payments, plan -> category) goes
//! through explicit foreign-key lookups defined here.

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::models::{Category, Credit, NewCredit, NewPayment, NewPlan, NewUser, Plan};

/// Interface for user records. Users are created by external systems
/// and reporting reaches them only through their credits, so the
/// interface is write-only.
#[async_trait]
pub trait UserStorage: Send + Sync {
    /// Store a new user, returning its assigned id
    async fn store_user(&self, user: &NewUser) -> Result<i64>;
}

/// Interface for credit records and the filtered scans the reporters
/// issue over them.
#[async_trait]
pub trait CreditStorage: Send + Sync {
    /// Store a new credit, returning its assigned id
    async fn store_credit(&self, credit: &NewCredit) -> Result<i64>;

    /// All credits owned by a user
    async fn list_credits_for_user(&self, user_id: i64) -> Result<Vec<Credit>>;

    /// Count and total principal of credits issued in [start, end]
    async fn count_and_sum_issued_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<(i64, f64)>;
}

/// Interface for payment records.
#[async_trait]
pub trait PaymentStorage: Send + Sync {
    /// Store a new payment, returning its assigned id
    async fn store_payment(&self, payment: &NewPayment) -> Result<i64>;

    /// Total amount paid against a single credit
    async fn total_for_credit(&self, credit_id: i64) -> Result<f64>;

    /// Count and total amount of payments made in [start, end]
    async fn count_and_sum_paid_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<(i64, f64)>;
}

/// Interface for plan records.
#[async_trait]
pub trait PlanStorage: Send + Sync {
    /// Persist a validated batch of plans in a single transaction
    async fn insert_plans(&self, plans: &[NewPlan]) -> Result<()>;

    /// Look up the plan for one (period, category) pair
    async fn find_by_period_and_category(
        &self,
        period: NaiveDate,
        category_id: i64,
    ) -> Result<Option<Plan>>;

    /// All plans whose period falls in [start, end], ordered by period
    async fn list_in_period_range(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Plan>>;
}

/// Interface for the category dictionary.
#[async_trait]
pub trait CategoryStorage: Send + Sync {
    /// Store a new category, returning its assigned id
    async fn store_category(&self, name: &str) -> Result<i64>;

    /// Look up a category by its unique name
    async fn get_by_name(&self, name: &str) -> Result<Option<Category>>;

    /// Look up a category by id
    async fn get_by_id(&self, category_id: i64) -> Result<Option<Category>>;
}
