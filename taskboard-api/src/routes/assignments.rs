/// User-task assignment endpoints
///
/// # Endpoints
///
/// - `POST /tasks/:task_id/users/:user_id` - Assign a user to a task
/// - `DELETE /tasks/:task_id/users/:user_id` - Unassign a user from a task
///
/// Both validate the sentinel prefixes first ('t' for tasks, 'f' for
/// users), then that both records exist. Assignment allows duplicate
/// pairs; unassignment answers 200 whether or not a pair existed.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    routes::MessageResponse,
    validate,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use taskboard_shared::models::{
    assignment::{Assignment, CreateAssignment},
    task::Task,
    user::User,
};

/// Assign a user to a task
///
/// # Errors
///
/// - `400 Bad Request`: prefix violation on either id
/// - `404 Not Found`: task or user absent
pub async fn assign_user(
    State(state): State<AppState>,
    Path((task_id, user_id)): Path<(String, String)>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    validate::require_prefix(&task_id, "taskId", 't')?;
    validate::require_prefix(&user_id, "userId", 'f')?;

    if Task::find_by_id(&state.db, &task_id).await?.is_none() {
        return Err(ApiError::NotFound("'taskId' not found".to_string()));
    }

    if User::find_by_id(&state.db, &user_id).await?.is_none() {
        return Err(ApiError::NotFound("'userId' not found".to_string()));
    }

    Assignment::create(&state.db, CreateAssignment { task_id, user_id }).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User assigned to task successfully".to_string(),
        }),
    ))
}

/// Unassign a user from a task
///
/// Deletes every row for the pair; succeeds even when none existed.
///
/// # Errors
///
/// - `400 Bad Request`: prefix violation on either id
/// - `404 Not Found`: task or user absent
pub async fn unassign_user(
    State(state): State<AppState>,
    Path((task_id, user_id)): Path<(String, String)>,
) -> ApiResult<Json<MessageResponse>> {
    validate::require_prefix(&task_id, "taskId", 't')?;
    validate::require_prefix(&user_id, "userId", 'f')?;

    if Task::find_by_id(&state.db, &task_id).await?.is_none() {
        return Err(ApiError::NotFound("'taskId' not found".to_string()));
    }

    if User::find_by_id(&state.db, &user_id).await?.is_none() {
        return Err(ApiError::NotFound("'userId' not found".to_string()));
    }

    Assignment::delete(&state.db, &task_id, &user_id).await?;

    Ok(Json(MessageResponse {
        message: "User removed from task successfully".to_string(),
    }))
}
