/// User endpoints
///
/// # Endpoints
///
/// - `GET /users?q=` - List users, optionally filtered by name substring
/// - `POST /users` - Create a user
/// - `DELETE /users/:id` - Delete a user and its assignments
///
/// Creation validates in order: id string, id length, name string, name
/// length, email string, password string, duplicate id, duplicate email.
/// The first failing check wins; duplicates answer 400.

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
use taskboard_shared::models::user::{CreateUser, User};

/// Query parameters for the user listing
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Substring filter on name; absent means list all
    pub q: Option<String>,
}

/// Create user response
#[derive(Debug, Serialize)]
pub struct UserResponse {
    /// Human-readable outcome
    pub message: String,

    /// Echo of the created record
    pub user: User,
}

/// List/search users
///
/// # Endpoint
///
/// ```text
/// GET /users
/// GET /users?q=Ana
/// ```
pub async fn list_users(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<Vec<User>>> {
    let users = match params.q {
        Some(q) => User::search_by_name(&state.db, &q).await?,
        None => User::list(&state.db).await?,
    };

    Ok(Json(users))
}

/// Create a user
///
/// # Endpoint
///
/// ```text
/// POST /users
/// Content-Type: application/json
///
/// { "id": "f001", "name": "Ana", "email": "ana@example.com", "password": "secret" }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: type/length violation, duplicate id or email
pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let id = validate::required_string(&body, "id")?;
    validate::min_length(&id, "id", 4)?;

    let name = validate::required_string(&body, "name")?;
    validate::min_length(&name, "name", 2)?;

    let email = validate::required_string(&body, "email")?;
    let password = validate::required_string(&body, "password")?;

    if User::find_by_id(&state.db, &id).await?.is_some() {
        return Err(ApiError::Conflict("'id' already exists".to_string()));
    }

    if User::find_by_email(&state.db, &email).await?.is_some() {
        return Err(ApiError::Conflict("'email' already exists".to_string()));
    }

    let user = User::create(
        &state.db,
        CreateUser {
            id,
            name,
            email,
            password,
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(UserResponse {
            message: "User created successfully".to_string(),
            user,
        }),
    ))
}

/// Delete a user
///
/// The id must start with the letter 'f'. Deleting a user removes every
/// assignment referencing it in the same transaction.
///
/// # Endpoint
///
/// ```text
/// DELETE /users/f001
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: id doesn't start with 'f'
/// - `404 Not Found`: no user with that id
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    validate::require_prefix(&id, "id", 'f')?;

    if User::find_by_id(&state.db, &id).await?.is_none() {
        return Err(ApiError::NotFound("'id' not found".to_string()));
    }

    User::delete_with_assignments(&state.db, &id).await?;

    Ok(Json(MessageResponse {
        message: "User deleted successfully".to_string(),
    }))
}
