use anyhow::Result;
use sqlx::{migrate::MigrateDatabase, Sqlite, SqlitePool};
use std::sync::Arc;

// The database URL for the production database
const DATABASE_URL: &str = "sqlite:lending.db";

/// DbConnection manages database operations
#[derive(Clone)]
pub struct DbConnection {
    pool: Arc<SqlitePool>,
}

impl DbConnection {
    /// Create a new database connection
    pub async fn new(url: &str) -> Result<Self> {
        // Create database if it doesn't exist
        if !Sqlite::database_exists(url).await.unwrap_or(false) {
            Sqlite::create_database(url).await?
        }

        // Connect to the database
        let pool = SqlitePool::connect(url).await?;

        // Setup database schema
        Self::setup_schema(&pool).await?;

        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    /// Initialize the standard database, honoring a DATABASE_URL override
    pub async fn init() -> Result<Self> {
        let url = std::env::var("DATABASE_URL").unwrap_or_else(|_| DATABASE_URL.to_string());
        Self::new(&url).await
    }

    /// Initialize a test database with a unique name
    #[cfg(test)]
    pub async fn init_test() -> Result<Self> {
        // Generate a unique database name for tests
        let test_id = uuid::Uuid::new_v4().to_string();
        let db_url = format!("file:memdb_{}?mode=memory&cache=shared", test_id);

        Self::new(&db_url).await
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Set up the required database schema
    async fn setup_schema(pool: &SqlitePool) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                login TEXT NOT NULL UNIQUE,
                registration_date TEXT NOT NULL
            );
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS credits (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id INTEGER NOT NULL REFERENCES users(id),
                issuance_date TEXT NOT NULL,
                return_date TEXT NOT NULL,
                actual_return_date TEXT,
                body REAL NOT NULL,
                percent REAL NOT NULL
            );
            "#,
        )
        .execute(pool)
        .await?;

        // Categories shared by plans and payments
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS dictionary (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE
            );
            "#,
        )
        .execute(pool)
        .await?;

        // At most one plan per (period, category)
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS plans (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                period TEXT NOT NULL,
                sum REAL NOT NULL,
                category_id INTEGER NOT NULL REFERENCES dictionary(id),
                UNIQUE(period, category_id)
            );
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS payments (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                sum REAL NOT NULL,
                payment_date TEXT NOT NULL,
                credit_id INTEGER NOT NULL REFERENCES credits(id),
                type_id INTEGER NOT NULL REFERENCES dictionary(id)
            );
            "#,
        )
        .execute(pool)
        .await?;

        // Indexes for the per-user and per-range scans the reporters issue
        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_credits_user_id
            ON credits(user_id);
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_payments_credit_id
            ON payments(credit_id);
            "#,
        )
        .execute(pool)
        .await?;

        // The two categories the reporters match on are always present
        sqlx::query(
            r#"
            INSERT OR IGNORE INTO dictionary (name) VALUES ('issuance'), ('collection');
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }
}
