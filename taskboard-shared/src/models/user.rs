/// User model and database operations
///
/// # Schema
///
/// ```sql
/// CREATE TABLE users (
///     id TEXT PRIMARY KEY,
///     name TEXT NOT NULL,
///     email TEXT NOT NULL UNIQUE,
///     password TEXT NOT NULL
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use taskboard_shared::models::user::{CreateUser, User};
/// use taskboard_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let user = User::create(&pool, CreateUser {
///     id: "f001".to_string(),
///     name: "Ana".to_string(),
///     email: "ana@example.com".to_string(),
///     password: "secret".to_string(),
/// }).await?;
///
/// let found = User::find_by_email(&pool, "ana@example.com").await?;
/// # Ok(())
/// # }
/// ```

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// User model representing a user account
///
/// The id is a client-supplied string (at least 4 characters, starting
/// with 'f'). Email is unique across all users.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Client-supplied user id
    pub id: String,

    /// Display name
    pub name: String,

    /// Email address, unique across all users
    pub email: String,

    /// Password, stored as-is (the service does no authentication)
    pub password: String,
}

/// Input for creating a new user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Client-supplied user id
    pub id: String,

    /// Display name
    pub name: String,

    /// Email address
    pub email: String,

    /// Password
    pub password: String,
}

impl User {
    /// Creates a new user in the database
    ///
    /// # Errors
    ///
    /// Returns an error if the id or email already exists (unique
    /// constraint violation) or the database connection fails.
    pub async fn create(pool: &PgPool, data: CreateUser) -> Result<Self, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, name, email, password)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, password
            "#,
        )
        .bind(data.id)
        .bind(data.name)
        .bind(data.email)
        .bind(data.password)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Finds a user by id
    ///
    /// Returns the user if found, None otherwise.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Finds a user by email address
    ///
    /// Returns the user if found, None otherwise.
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Lists all users in store order
    pub async fn list(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password
            FROM users
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(users)
    }

    /// Lists users whose name contains the given substring
    pub async fn search_by_name(pool: &PgPool, query: &str) -> Result<Vec<Self>, sqlx::Error> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password
            FROM users
            WHERE name LIKE '%' || $1 || '%'
            "#,
        )
        .bind(query)
        .fetch_all(pool)
        .await?;

        Ok(users)
    }

    /// Deletes a user and every assignment referencing it
    ///
    /// Both deletes run in a single transaction, so a crash mid-way
    /// cannot leave a dangling assignment row.
    ///
    /// # Returns
    ///
    /// True if the user existed and was deleted, false otherwise.
    pub async fn delete_with_assignments(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM users_tasks WHERE user_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_user_struct() {
        let create_user = CreateUser {
            id: "f001".to_string(),
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            password: "secret".to_string(),
        };

        assert_eq!(create_user.id, "f001");
        assert_eq!(create_user.email, "ana@example.com");
    }

    #[test]
    fn test_user_serializes_all_fields() {
        let user = User {
            id: "f001".to_string(),
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            password: "secret".to_string(),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["id"], "f001");
        assert_eq!(json["password"], "secret");
    }

    // Integration tests for database operations are in tests/model_tests.rs
}
