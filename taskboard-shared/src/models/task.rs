/// Task model and database operations
///
/// # Schema
///
/// ```sql
/// CREATE TABLE tasks (
///     id TEXT PRIMARY KEY,
///     title TEXT NOT NULL,
///     description TEXT NOT NULL,
///     created_at TEXT NOT NULL DEFAULT to_char(now(), 'YYYY-MM-DD HH24:MI:SS'),
///     status INTEGER NOT NULL DEFAULT 0
/// );
/// ```
///
/// `created_at` is text, not a timestamp column: partial updates accept an
/// arbitrary string for it, so the column must round-trip whatever the
/// client sends. `status` is 0 (incomplete) or 1 (complete).
///
/// # Example
///
/// ```no_run
/// use taskboard_shared::models::task::{CreateTask, Task, UpdateTask};
/// use taskboard_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let task = Task::create(&pool, CreateTask {
///     id: "t001".to_string(),
///     title: "Write the report".to_string(),
///     description: "Quarterly numbers".to_string(),
/// }).await?;
///
/// // Mark it complete, leaving every other field unchanged
/// let update = UpdateTask { status: Some(1), ..Default::default() };
/// let task = Task::update(&pool, "t001", update).await?;
/// # Ok(())
/// # }
/// ```

use crate::models::assignment::Assignment;
use crate::models::user::User;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use std::collections::HashMap;

/// Task model
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    /// Client-supplied task id
    pub id: String,

    /// Short title
    pub title: String,

    /// Free-form description
    pub description: String,

    /// Creation timestamp, store-generated text ("YYYY-MM-DD HH:MM:SS")
    pub created_at: String,

    /// 0 = incomplete, 1 = complete
    pub status: i32,
}

/// Input for creating a new task
///
/// `created_at` and `status` are filled by the store defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTask {
    /// Client-supplied task id
    pub id: String,

    /// Short title
    pub title: String,

    /// Free-form description
    pub description: String,
}

/// Input for partially updating a task
///
/// Only fields that are `Some` are written; everything else keeps its
/// stored value. Presence is decided by the API layer from the keys in
/// the request payload, so explicit zero and empty-string values are
/// honored rather than treated as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTask {
    /// New task id
    pub id: Option<String>,

    /// New title
    pub title: Option<String>,

    /// New description
    pub description: Option<String>,

    /// New creation timestamp
    pub created_at: Option<String>,

    /// New status (0 or 1)
    pub status: Option<i32>,
}

impl UpdateTask {
    /// True when no field is set, i.e. the update is a no-op
    pub fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.title.is_none()
            && self.description.is_none()
            && self.created_at.is_none()
            && self.status.is_none()
    }
}

/// A task together with the users assigned to it
///
/// Users appear in assignment-insertion order.
#[derive(Debug, Clone, Serialize)]
pub struct TaskWithUsers {
    /// The task row
    #[serde(flatten)]
    pub task: Task,

    /// Users assigned to this task
    pub users: Vec<User>,
}

impl Task {
    /// Creates a new task in the database
    ///
    /// The returned row includes the store-generated `created_at` and
    /// `status` defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the id already exists or the database
    /// connection fails.
    pub async fn create(pool: &PgPool, data: CreateTask) -> Result<Self, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (id, title, description)
            VALUES ($1, $2, $3)
            RETURNING id, title, description, created_at, status
            "#,
        )
        .bind(data.id)
        .bind(data.title)
        .bind(data.description)
        .fetch_one(pool)
        .await?;

        Ok(task)
    }

    /// Finds a task by id
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Self>, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, title, description, created_at, status
            FROM tasks
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(task)
    }

    /// Lists all tasks in store order
    pub async fn list(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, title, description, created_at, status
            FROM tasks
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(tasks)
    }

    /// Lists tasks whose title or description contains the given substring
    pub async fn search(pool: &PgPool, query: &str) -> Result<Vec<Self>, sqlx::Error> {
        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, title, description, created_at, status
            FROM tasks
            WHERE title LIKE '%' || $1 || '%'
               OR description LIKE '%' || $1 || '%'
            "#,
        )
        .bind(query)
        .fetch_all(pool)
        .await?;

        Ok(tasks)
    }

    /// Partially updates a task
    ///
    /// Builds the UPDATE from the fields present in `data`; an empty
    /// update reads the row back unchanged. Returns the merged row, or
    /// None if the task doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the new id collides with an existing task or
    /// the database connection fails.
    pub async fn update(
        pool: &PgPool,
        id: &str,
        data: UpdateTask,
    ) -> Result<Option<Self>, sqlx::Error> {
        if data.is_empty() {
            return Self::find_by_id(pool, id).await;
        }

        // Build the update from whichever fields are present
        let mut assignments = Vec::new();
        let mut bind_count = 1;

        if data.id.is_some() {
            bind_count += 1;
            assignments.push(format!("id = ${}", bind_count));
        }
        if data.title.is_some() {
            bind_count += 1;
            assignments.push(format!("title = ${}", bind_count));
        }
        if data.description.is_some() {
            bind_count += 1;
            assignments.push(format!("description = ${}", bind_count));
        }
        if data.created_at.is_some() {
            bind_count += 1;
            assignments.push(format!("created_at = ${}", bind_count));
        }
        if data.status.is_some() {
            bind_count += 1;
            assignments.push(format!("status = ${}", bind_count));
        }

        let query = format!(
            "UPDATE tasks SET {} WHERE id = $1 RETURNING id, title, description, created_at, status",
            assignments.join(", ")
        );

        let mut q = sqlx::query_as::<_, Task>(&query).bind(id);

        if let Some(new_id) = data.id {
            q = q.bind(new_id);
        }
        if let Some(title) = data.title {
            q = q.bind(title);
        }
        if let Some(description) = data.description {
            q = q.bind(description);
        }
        if let Some(created_at) = data.created_at {
            q = q.bind(created_at);
        }
        if let Some(status) = data.status {
            q = q.bind(status);
        }

        let task = q.fetch_optional(pool).await?;

        Ok(task)
    }

    /// Deletes a task and every assignment referencing it
    ///
    /// Both deletes run in a single transaction.
    ///
    /// # Returns
    ///
    /// True if the task existed and was deleted, false otherwise.
    pub async fn delete_with_assignments(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM users_tasks WHERE task_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(result.rows_affected() > 0)
    }

    /// Lists every task with its assigned users nested
    ///
    /// Two queries total: all tasks, then all assignments joined to their
    /// users ordered by insertion. The rows are grouped in memory, so the
    /// result keeps tasks in store order and users in assignment order.
    pub async fn list_with_users(pool: &PgPool) -> Result<Vec<TaskWithUsers>, sqlx::Error> {
        let tasks = Self::list(pool).await?;
        let assigned = Assignment::list_with_users(pool).await?;

        let mut users_by_task: HashMap<String, Vec<User>> = HashMap::new();
        for row in assigned {
            users_by_task.entry(row.task_id).or_default().push(row.user);
        }

        Ok(tasks
            .into_iter()
            .map(|task| {
                let users = users_by_task.remove(&task.id).unwrap_or_default();
                TaskWithUsers { task, users }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_task_default_is_empty() {
        let update = UpdateTask::default();
        assert!(update.is_empty());
    }

    #[test]
    fn test_update_task_with_status_zero_is_not_empty() {
        let update = UpdateTask {
            status: Some(0),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }

    #[test]
    fn test_task_with_users_flattens_task_fields() {
        let task = Task {
            id: "t001".to_string(),
            title: "Write the report".to_string(),
            description: "Quarterly numbers".to_string(),
            created_at: "2026-01-01 10:00:00".to_string(),
            status: 0,
        };

        let with_users = TaskWithUsers {
            task,
            users: Vec::new(),
        };

        let json = serde_json::to_value(&with_users).unwrap();
        assert_eq!(json["id"], "t001");
        assert_eq!(json["title"], "Write the report");
        assert!(json["users"].as_array().unwrap().is_empty());
    }

    // Integration tests for database operations are in tests/model_tests.rs
}
