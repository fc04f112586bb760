//! Plan bulk insert and monthly plan-vs-actual reporting.

use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use shared::{PlanPerformance, PlanUpload};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::info;

use crate::domain::calendar::{month_start, percentage_of};
use crate::domain::models::{
    NewPlan, PlanValidationError, CATEGORY_COLLECTION, CATEGORY_ISSUANCE,
};
use crate::storage::{CategoryStorage, CreditStorage, PaymentStorage, PlanStorage};

#[derive(Debug, thiserror::Error)]
pub enum PlanInsertError {
    #[error(transparent)]
    Validation(#[from] PlanValidationError),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// Service owning the plan table: bulk insert with validation, and
/// the month-to-date plan-vs-actual report.
#[derive(Clone)]
pub struct PlanService {
    plans: Arc<dyn PlanStorage>,
    categories: Arc<dyn CategoryStorage>,
    credits: Arc<dyn CreditStorage>,
    payments: Arc<dyn PaymentStorage>,
}

impl PlanService {
    pub fn new(
        plans: Arc<dyn PlanStorage>,
        categories: Arc<dyn CategoryStorage>,
        credits: Arc<dyn CreditStorage>,
        payments: Arc<dyn PaymentStorage>,
    ) -> Self {
        Self {
            plans,
            categories,
            credits,
            payments,
        }
    }

    /// Validate and persist a batch of uploaded plans.
    ///
    /// Rows are validated in order and the first failure rejects the
    /// whole batch: the period must be a month start, the sum must be
    /// present, the category must exist, and the (period, category)
    /// pair must be unused both in the store and earlier in the same
    /// batch. Only a fully valid batch reaches the store, where it is
    /// written in one transaction.
    pub async fn insert_plans(&self, uploads: Vec<PlanUpload>) -> Result<usize, PlanInsertError> {
        let mut validated = Vec::with_capacity(uploads.len());
        let mut seen: HashSet<(NaiveDate, i64)> = HashSet::new();

        for upload in &uploads {
            if upload.period.day() != 1 {
                return Err(PlanValidationError::PeriodNotMonthStart(upload.period).into());
            }

            let sum = upload.sum.ok_or_else(|| PlanValidationError::MissingSum {
                period: upload.period,
                category: upload.category_name.clone(),
            })?;

            let category = self
                .categories
                .get_by_name(&upload.category_name)
                .await?
                .ok_or_else(|| {
                    PlanValidationError::UnknownCategory(upload.category_name.clone())
                })?;

            let duplicate = !seen.insert((upload.period, category.id))
                || self
                    .plans
                    .find_by_period_and_category(upload.period, category.id)
                    .await?
                    .is_some();
            if duplicate {
                return Err(PlanValidationError::DuplicatePlan {
                    period: upload.period,
                    category: category.name,
                }
                .into());
            }

            validated.push(NewPlan {
                period: upload.period,
                sum,
                category_id: category.id,
            });
        }

        self.plans.insert_plans(&validated).await?;
        info!("Inserted {} plans", validated.len());
        Ok(validated.len())
    }

    /// Plan-vs-actual for every plan of the target date's month, over
    /// the span [first day of month, target date].
    ///
    /// Actuals are derived per category name: `issuance` sums credit
    /// principals issued in the span, `collection` sums payments made
    /// in the span, and any other category reports zero.
    pub async fn plans_performance(&self, target_date: NaiveDate) -> Result<Vec<PlanPerformance>> {
        let start = month_start(target_date);
        let plans = self.plans.list_in_period_range(start, target_date).await?;

        let mut results = Vec::with_capacity(plans.len());
        for plan in plans {
            let category_name = self
                .categories
                .get_by_id(plan.category_id)
                .await?
                .map(|c| c.name)
                .unwrap_or_default();

            let actual_amount = match category_name.as_str() {
                CATEGORY_ISSUANCE => {
                    self.credits
                        .count_and_sum_issued_between(start, target_date)
                        .await?
                        .1
                }
                CATEGORY_COLLECTION => {
                    self.payments
                        .count_and_sum_paid_between(start, target_date)
                        .await?
                        .1
                }
                _ => 0.0,
            };

            results.push(PlanPerformance {
                period: plan.period,
                category_name,
                plan_amount: plan.sum,
                actual_amount,
                fulfillment_percentage: percentage_of(actual_amount, plan.sum),
            });
        }
        Ok(results)
    }
}
