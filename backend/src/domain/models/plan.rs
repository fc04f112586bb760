use chrono::NaiveDate;

/// Category name credited when loans are issued
pub const CATEGORY_ISSUANCE: &str = "issuance";
/// Category name credited when payments are collected
pub const CATEGORY_COLLECTION: &str = "collection";

/// A named classification shared by plans and payments.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// A monthly target figure for one category.
///
/// `period` is always the first calendar day of the month the plan
/// targets; at most one plan exists per (period, category).
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub id: i64,
    pub period: NaiveDate,
    pub sum: f64,
    pub category_id: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewPlan {
    pub period: NaiveDate,
    pub sum: f64,
    pub category_id: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum PlanValidationError {
    #[error("Invalid period {0}. Must be the first day of the month.")]
    PeriodNotMonthStart(NaiveDate),
    #[error("Sum for period {period} and category {category} cannot be empty")]
    MissingSum { period: NaiveDate, category: String },
    #[error("Plan for period {period} and category {category} already exists")]
    DuplicatePlan { period: NaiveDate, category: String },
    #[error("Unknown category '{0}'")]
    UnknownCategory(String),
}
