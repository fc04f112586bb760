use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::Row;

use crate::domain::models::{Credit, NewCredit};
use crate::storage::connection::DbConnection;
use crate::storage::traits::CreditStorage;

/// SQLite repository for credit records
#[derive(Clone)]
pub struct CreditRepository {
    db: DbConnection,
}

impl CreditRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }
}

fn credit_from_row(r: &sqlx::sqlite::SqliteRow) -> Credit {
    Credit {
        id: r.get("id"),
        user_id: r.get("user_id"),
        issuance_date: r.get("issuance_date"),
        return_date: r.get("return_date"),
        actual_return_date: r.get("actual_return_date"),
        body: r.get("body"),
        percent: r.get("percent"),
    }
}

#[async_trait]
impl CreditStorage for CreditRepository {
    async fn store_credit(&self, credit: &NewCredit) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO credits (user_id, issuance_date, return_date, actual_return_date, body, percent)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(credit.user_id)
        .bind(credit.issuance_date)
        .bind(credit.return_date)
        .bind(credit.actual_return_date)
        .bind(credit.body)
        .bind(credit.percent)
        .execute(self.db.pool())
        .await?;
        Ok(result.last_insert_rowid())
    }

    async fn list_credits_for_user(&self, user_id: i64) -> Result<Vec<Credit>> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, issuance_date, return_date, actual_return_date, body, percent
            FROM credits
            WHERE user_id = ?
            ORDER BY issuance_date ASC, id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.db.pool())
        .await?;

        Ok(rows.iter().map(credit_from_row).collect())
    }

    async fn count_and_sum_issued_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<(i64, f64)> {
        let row = sqlx::query(
            r#"
            SELECT COUNT(*) AS cnt, COALESCE(SUM(body), 0.0) AS total
            FROM credits
            WHERE issuance_date BETWEEN ? AND ?
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_one(self.db.pool())
        .await?;

        Ok((row.get("cnt"), row.get("total")))
    }
}
