use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::Row;

use crate::domain::models::{NewPlan, Plan};
use crate::storage::connection::DbConnection;
use crate::storage::traits::PlanStorage;

/// SQLite repository for plan records
#[derive(Clone)]
pub struct PlanRepository {
    db: DbConnection,
}

impl PlanRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }
}

fn plan_from_row(r: &sqlx::sqlite::SqliteRow) -> Plan {
    Plan {
        id: r.get("id"),
        period: r.get("period"),
        sum: r.get("sum"),
        category_id: r.get("category_id"),
    }
}

#[async_trait]
impl PlanStorage for PlanRepository {
    async fn insert_plans(&self, plans: &[NewPlan]) -> Result<()> {
        // One transaction per batch; an abort leaves nothing persisted
        let mut tx = self.db.pool().begin().await?;
        for plan in plans {
            sqlx::query(
                r#"
                INSERT INTO plans (period, sum, category_id)
                VALUES (?, ?, ?)
                "#,
            )
            .bind(plan.period)
            .bind(plan.sum)
            .bind(plan.category_id)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;
        Ok(())
    }

    async fn find_by_period_and_category(
        &self,
        period: NaiveDate,
        category_id: i64,
    ) -> Result<Option<Plan>> {
        let row = sqlx::query(
            r#"
            SELECT id, period, sum, category_id
            FROM plans
            WHERE period = ? AND category_id = ?
            "#,
        )
        .bind(period)
        .bind(category_id)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(row.as_ref().map(plan_from_row))
    }

    async fn list_in_period_range(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Plan>> {
        let rows = sqlx::query(
            r#"
            SELECT id, period, sum, category_id
            FROM plans
            WHERE period BETWEEN ? AND ?
            ORDER BY period ASC, id ASC
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(self.db.pool())
        .await?;

        Ok(rows.iter().map(plan_from_row).collect())
    }
}
