use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::Row;

use crate::domain::models::NewPayment;
use crate::storage::connection::DbConnection;
use crate::storage::traits::PaymentStorage;

/// SQLite repository for payment records
#[derive(Clone)]
pub struct PaymentRepository {
    db: DbConnection,
}

impl PaymentRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PaymentStorage for PaymentRepository {
    async fn store_payment(&self, payment: &NewPayment) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO payments (sum, payment_date, credit_id, type_id)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(payment.sum)
        .bind(payment.payment_date)
        .bind(payment.credit_id)
        .bind(payment.type_id)
        .execute(self.db.pool())
        .await?;
        Ok(result.last_insert_rowid())
    }

    async fn total_for_credit(&self, credit_id: i64) -> Result<f64> {
        let row = sqlx::query(
            r#"
            SELECT COALESCE(SUM(sum), 0.0) AS total
            FROM payments
            WHERE credit_id = ?
            "#,
        )
        .bind(credit_id)
        .fetch_one(self.db.pool())
        .await?;

        Ok(row.get("total"))
    }

    async fn count_and_sum_paid_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<(i64, f64)> {
        let row = sqlx::query(
            r#"
            SELECT COUNT(*) AS cnt, COALESCE(SUM(sum), 0.0) AS total
            FROM payments
            WHERE payment_date BETWEEN ? AND ?
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_one(self.db.pool())
        .await?;

        Ok((row.get("cnt"), row.get("total")))
    }
}
