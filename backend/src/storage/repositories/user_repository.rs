use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::NewUser;
use crate::storage::connection::DbConnection;
use crate::storage::traits::UserStorage;

/// SQLite repository for user records
#[derive(Clone)]
pub struct UserRepository {
    db: DbConnection,
}

impl UserRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStorage for UserRepository {
    async fn store_user(&self, user: &NewUser) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (login, registration_date)
            VALUES (?, ?)
            "#,
        )
        .bind(&user.login)
        .bind(user.registration_date)
        .execute(self.db.pool())
        .await?;
        Ok(result.last_insert_rowid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sqlx::Row;

    #[tokio::test]
    async fn test_store_user() {
        let db = DbConnection::init_test().await.unwrap();
        let repo = UserRepository::new(db.clone());

        let id = repo
            .store_user(&NewUser {
                login: "kowalski".to_string(),
                registration_date: NaiveDate::from_ymd_opt(2023, 5, 2).unwrap(),
            })
            .await
            .unwrap();

        let row = sqlx::query("SELECT login, registration_date FROM users WHERE id = ?")
            .bind(id)
            .fetch_one(db.pool())
            .await
            .unwrap();
        let login: String = row.get("login");
        let registration_date: NaiveDate = row.get("registration_date");
        assert_eq!(login, "kowalski");
        assert_eq!(
            registration_date,
            NaiveDate::from_ymd_opt(2023, 5, 2).unwrap()
        );
    }

    #[tokio::test]
    async fn test_store_user_rejects_duplicate_login() {
        let db = DbConnection::init_test().await.unwrap();
        let repo = UserRepository::new(db);

        let user = NewUser {
            login: "kowalski".to_string(),
            registration_date: NaiveDate::from_ymd_opt(2023, 5, 2).unwrap(),
        };
        repo.store_user(&user).await.unwrap();

        assert!(repo.store_user(&user).await.is_err());
    }
}
