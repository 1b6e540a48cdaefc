/// Task endpoints
///
/// # Endpoints
///
/// - `GET /tasks?q=` - List tasks, optionally filtered by title/description
/// - `POST /tasks` - Create a task
/// - `PUT /tasks/:id` - Merge-patch a task
/// - `DELETE /tasks/:id` - Delete a task and its assignments
/// - `GET /tasks/users` - List every task with its assigned users
///
/// The merge-patch update decides field presence by the payload's keys:
/// an omitted field keeps its stored value, while a provided field is
/// validated like at creation. `status: 0` and explicit empty strings are
/// values, not omissions.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    routes::MessageResponse,
    validate,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_shared::models::task::{CreateTask, Task, TaskWithUsers, UpdateTask};

/// Query parameters for the task listing
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Substring filter on title or description; absent means list all
    pub q: Option<String>,
}

/// Create/update task response
#[derive(Debug, Serialize)]
pub struct TaskResponse {
    /// Human-readable outcome
    pub message: String,

    /// The stored record, including generated/default columns
    pub task: Task,
}

/// List/search tasks
///
/// # Endpoint
///
/// ```text
/// GET /tasks
/// GET /tasks?q=report
/// ```
pub async fn list_tasks(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<Vec<Task>>> {
    let tasks = match params.q {
        Some(q) => Task::search(&state.db, &q).await?,
        None => Task::list(&state.db).await?,
    };

    Ok(Json(tasks))
}

/// Create a task
///
/// The response carries the stored row so the store-generated
/// `created_at` and `status` defaults are visible to the client.
///
/// # Endpoint
///
/// ```text
/// POST /tasks
/// Content-Type: application/json
///
/// { "id": "t001", "title": "Write the report", "description": "Quarterly numbers" }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: type/length violation, duplicate id
pub async fn create_task(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> ApiResult<(StatusCode, Json<TaskResponse>)> {
    let id = validate::required_string(&body, "id")?;
    validate::min_length(&id, "id", 4)?;

    let title = validate::required_string(&body, "title")?;
    validate::min_length(&title, "title", 2)?;

    let description = validate::required_string(&body, "description")?;

    if Task::find_by_id(&state.db, &id).await?.is_some() {
        return Err(ApiError::Conflict("'id' already exists".to_string()));
    }

    let task = Task::create(
        &state.db,
        CreateTask {
            id,
            title,
            description,
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(TaskResponse {
            message: "Task created successfully".to_string(),
            task,
        }),
    ))
}

/// Merge-patch a task
///
/// Any of id, title, description, createdAt, status may be provided;
/// omitted fields keep their stored values. Provided fields are validated
/// exactly like at creation.
///
/// # Endpoint
///
/// ```text
/// PUT /tasks/t001
/// Content-Type: application/json
///
/// { "status": 1 }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: type/length violation on a provided field
/// - `404 Not Found`: no task with that id
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> ApiResult<Json<TaskResponse>> {
    let new_id = validate::optional_string(&body, "id")?;
    if let Some(ref value) = new_id {
        validate::min_length(value, "id", 4)?;
    }

    let title = validate::optional_string(&body, "title")?;
    if let Some(ref value) = title {
        validate::min_length(value, "title", 2)?;
    }

    let description = validate::optional_string(&body, "description")?;
    let created_at = validate::optional_string(&body, "createdAt")?;
    let status = validate::optional_status(&body, "status")?;

    if Task::find_by_id(&state.db, &id).await?.is_none() {
        return Err(ApiError::NotFound("'id' not found".to_string()));
    }

    let update = UpdateTask {
        id: new_id,
        title,
        description,
        created_at,
        status,
    };

    let task = Task::update(&state.db, &id, update)
        .await?
        .ok_or_else(|| ApiError::NotFound("'id' not found".to_string()))?;

    Ok(Json(TaskResponse {
        message: "Task updated successfully".to_string(),
        task,
    }))
}

/// Delete a task
///
/// The id must start with the letter 't'. Deleting a task removes every
/// assignment referencing it in the same transaction.
///
/// # Endpoint
///
/// ```text
/// DELETE /tasks/t001
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: id doesn't start with 't'
/// - `404 Not Found`: no task with that id
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    validate::require_prefix(&id, "id", 't')?;

    if Task::find_by_id(&state.db, &id).await?.is_none() {
        return Err(ApiError::NotFound("'id' not found".to_string()));
    }

    Task::delete_with_assignments(&state.db, &id).await?;

    Ok(Json(MessageResponse {
        message: "Task deleted successfully".to_string(),
    }))
}

/// List every task with its assigned users
///
/// Tasks come back in store order, each with its users in
/// assignment-insertion order.
///
/// # Endpoint
///
/// ```text
/// GET /tasks/users
/// ```
pub async fn list_tasks_with_users(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<TaskWithUsers>>> {
    let tasks = Task::list_with_users(&state.db).await?;

    Ok(Json(tasks))
}
