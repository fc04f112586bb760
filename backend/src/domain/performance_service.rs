//! Yearly performance reporting.

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use shared::YearPerformance;
use std::sync::Arc;
use tracing::info;

use crate::domain::calendar::{month_name, month_span, percentage_of};
use crate::domain::models::{Category, CATEGORY_COLLECTION, CATEGORY_ISSUANCE};
use crate::storage::{CategoryStorage, CreditStorage, PaymentStorage, PlanStorage};

/// Service producing the twelve-month issuance/payment report for a
/// year.
#[derive(Clone)]
pub struct PerformanceService {
    credits: Arc<dyn CreditStorage>,
    payments: Arc<dyn PaymentStorage>,
    plans: Arc<dyn PlanStorage>,
    categories: Arc<dyn CategoryStorage>,
}

impl PerformanceService {
    pub fn new(
        credits: Arc<dyn CreditStorage>,
        payments: Arc<dyn PaymentStorage>,
        plans: Arc<dyn PlanStorage>,
        categories: Arc<dyn CategoryStorage>,
    ) -> Self {
        Self {
            credits,
            payments,
            plans,
            categories,
        }
    }

    /// Exactly twelve records, January through December, whether or
    /// not any activity occurred.
    pub async fn year_performance(&self, year: i32) -> Result<Vec<YearPerformance>> {
        let (jan_1, dec_31) = month_span(year, 1)
            .zip(month_span(year, 12))
            .map(|((start, _), (_, end))| (start, end))
            .ok_or_else(|| anyhow!("invalid year {}", year))?;

        let (_, total_issuance) = self.credits.count_and_sum_issued_between(jan_1, dec_31).await?;
        let (_, total_payment) = self.payments.count_and_sum_paid_between(jan_1, dec_31).await?;

        let issuance_category = self.categories.get_by_name(CATEGORY_ISSUANCE).await?;
        let collection_category = self.categories.get_by_name(CATEGORY_COLLECTION).await?;

        let mut months = Vec::with_capacity(12);
        for month in 1..=12u32 {
            let (start, end) =
                month_span(year, month).ok_or_else(|| anyhow!("invalid month {}", month))?;

            let (issuance_count, issuance_actual) =
                self.credits.count_and_sum_issued_between(start, end).await?;
            let (payment_count, payment_actual) =
                self.payments.count_and_sum_paid_between(start, end).await?;

            let issuance_plan = self.plan_amount(start, issuance_category.as_ref()).await?;
            let payment_plan = self.plan_amount(start, collection_category.as_ref()).await?;

            months.push(YearPerformance {
                month: month_name(month)
                    .ok_or_else(|| anyhow!("invalid month {}", month))?
                    .to_string(),
                year,
                issuance_count,
                issuance_plan_amount: issuance_plan,
                issuance_actual_amount: issuance_actual,
                issuance_fulfillment_percentage: percentage_of(issuance_actual, issuance_plan),
                payment_count,
                payment_plan_amount: payment_plan,
                payment_actual_amount: payment_actual,
                payment_fulfillment_percentage: percentage_of(payment_actual, payment_plan),
                issuance_year_percentage: percentage_of(issuance_actual, total_issuance),
                payment_year_percentage: percentage_of(payment_actual, total_payment),
            });
        }

        info!("Computed year performance for {}", year);
        Ok(months)
    }

    /// Target sum of the plan for one month and category; 0 when no
    /// plan (or no such category) exists.
    async fn plan_amount(&self, period: NaiveDate, category: Option<&Category>) -> Result<f64> {
        let Some(category) = category else {
            return Ok(0.0);
        };
        Ok(self
            .plans
            .find_by_period_and_category(period, category.id)
            .await?
            .map(|p| p.sum)
            .unwrap_or(0.0))
    }
}
