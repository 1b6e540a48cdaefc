/// Assignment model: the users_tasks join rows
///
/// An assignment links one user to one task. The pair carries no
/// uniqueness constraint and no foreign keys; the API layer checks that
/// both sides exist before inserting, and cascade cleanup happens only on
/// explicit user/task deletion. The hidden `seq` column records insertion
/// order for the joined task listing and never leaves the database layer.

use crate::models::user::User;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Assignment join row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Assignment {
    /// Task side of the pair
    pub task_id: String,

    /// User side of the pair
    pub user_id: String,
}

/// Input for creating an assignment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAssignment {
    pub task_id: String,
    pub user_id: String,
}

/// An assignment row joined to its full user record
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AssignedUser {
    /// Task the user is assigned to
    pub task_id: String,

    /// The assigned user
    #[sqlx(flatten)]
    pub user: User,
}

impl Assignment {
    /// Inserts a new assignment row
    ///
    /// Duplicate pairs are allowed.
    pub async fn create(pool: &PgPool, data: CreateAssignment) -> Result<Self, sqlx::Error> {
        let assignment = sqlx::query_as::<_, Assignment>(
            r#"
            INSERT INTO users_tasks (task_id, user_id)
            VALUES ($1, $2)
            RETURNING task_id, user_id
            "#,
        )
        .bind(data.task_id)
        .bind(data.user_id)
        .fetch_one(pool)
        .await?;

        Ok(assignment)
    }

    /// Deletes every row matching the (task_id, user_id) pair
    ///
    /// # Returns
    ///
    /// Number of rows removed; zero when the pair was never assigned.
    pub async fn delete(pool: &PgPool, task_id: &str, user_id: &str) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            DELETE FROM users_tasks
            WHERE task_id = $1 AND user_id = $2
            "#,
        )
        .bind(task_id)
        .bind(user_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Lists every assignment joined to its user, in insertion order
    ///
    /// One query for the whole table; the caller groups rows by task.
    pub async fn list_with_users(pool: &PgPool) -> Result<Vec<AssignedUser>, sqlx::Error> {
        let rows = sqlx::query_as::<_, AssignedUser>(
            r#"
            SELECT ut.task_id, u.id, u.name, u.email, u.password
            FROM users_tasks ut
            JOIN users u ON u.id = ut.user_id
            ORDER BY ut.seq
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_assignment_struct() {
        let create = CreateAssignment {
            task_id: "t001".to_string(),
            user_id: "f001".to_string(),
        };

        assert_eq!(create.task_id, "t001");
        assert_eq!(create.user_id, "f001");
    }

    // Integration tests for database operations are in tests/model_tests.rs
}
