use anyhow::Result;
use async_trait::async_trait;
use sqlx::Row;

use crate::domain::models::Category;
use crate::storage::connection::DbConnection;
use crate::storage::traits::CategoryStorage;

/// SQLite repository for the category dictionary
#[derive(Clone)]
pub struct CategoryRepository {
    db: DbConnection,
}

impl CategoryRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryStorage for CategoryRepository {
    async fn store_category(&self, name: &str) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO dictionary (name) VALUES (?)
            "#,
        )
        .bind(name)
        .execute(self.db.pool())
        .await?;
        Ok(result.last_insert_rowid())
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Category>> {
        let row = sqlx::query(
            r#"
            SELECT id, name FROM dictionary WHERE name = ?
            "#,
        )
        .bind(name)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(row.map(|r| Category {
            id: r.get("id"),
            name: r.get("name"),
        }))
    }

    async fn get_by_id(&self, category_id: i64) -> Result<Option<Category>> {
        let row = sqlx::query(
            r#"
            SELECT id, name FROM dictionary WHERE id = ?
            "#,
        )
        .bind(category_id)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(row.map(|r| Category {
            id: r.get("id"),
            name: r.get("name"),
        }))
    }
}
