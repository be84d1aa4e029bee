//! # MySQL Storage
//!
//! Single `users` table accessed through parameterized statements on a
//! sqlx connection pool. The table is created idempotently at startup.
//! Concurrency control is delegated to the pool and the database's
//! row-level semantics; concurrent updates to the same row are
//! last-write-wins.

use async_trait::async_trait;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};

use super::errors::{StoreError, StoreResult};
use super::UserStore;
use crate::users::model::User;

const MAX_CONNECTIONS: u32 = 5;

const CREATE_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS users (
    id VARCHAR(36) PRIMARY KEY,
    name VARCHAR(255) NOT NULL,
    email VARCHAR(255) NOT NULL,
    age INT NOT NULL,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP ON UPDATE CURRENT_TIMESTAMP,
    INDEX idx_email (email)
) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4 COLLATE=utf8mb4_unicode_ci";

/// Row shape for SELECTs; timestamps stay server-side
#[derive(sqlx::FromRow)]
struct UserRow {
    id: String,
    name: String,
    email: String,
    age: i32,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            age: row.age,
        }
    }
}

/// MySQL-backed user store
pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    /// Connect to the database and create the users table if absent
    pub async fn connect(url: &str) -> StoreResult<Self> {
        let pool = MySqlPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect(url)
            .await?;

        sqlx::query(CREATE_TABLE).execute(&pool).await?;

        Ok(Self { pool })
    }

    /// Wrap an already-connected pool
    pub fn with_pool(pool: MySqlPool) -> Self {
        Self { pool }
    }

    async fn exists(&self, id: &str) -> StoreResult<bool> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(count > 0)
    }
}

#[async_trait]
impl UserStore for MySqlStore {
    async fn create(&self, user: &User) -> StoreResult<()> {
        sqlx::query("INSERT INTO users (id, name, email, age) VALUES (?, ?, ?, ?)")
            .bind(&user.id)
            .bind(&user.name)
            .bind(&user.email)
            .bind(user.age)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn get_by_id(&self, id: &str) -> StoreResult<User> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, name, email, age FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::from).ok_or(StoreError::NotFound)
    }

    async fn get_all(&self) -> StoreResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(
            "SELECT id, name, email, age FROM users ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn update(&self, id: &str, user: &User) -> StoreResult<()> {
        let result = sqlx::query("UPDATE users SET name = ?, email = ?, age = ? WHERE id = ?")
            .bind(&user.name)
            .bind(&user.email)
            .bind(user.age)
            .bind(id)
            .execute(&self.pool)
            .await?;

        // rows_affected is 0 both for a missing row and for an update that
        // changes no values; only the former is NotFound
        if result.rows_affected() == 0 && !self.exists(id).await? {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}
