/// Application state and router builder
///
/// This module defines the shared application state and provides
/// a function to build the Axum router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use taskboard_api::{app::AppState, config::Config};
/// use sqlx::PgPool;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = PgPool::connect(&config.database.url).await?;
/// let state = AppState::new(pool, config);
/// let app = taskboard_api::app::build_router(state);
///
/// let listener = tokio::net::TcpListener::bind("0.0.0.0:3003").await?;
/// axum::serve(listener, app).await?;
/// # Ok(())
/// # }
/// ```

use crate::config::Config;
use axum::{
    http::{header, HeaderValue, Method},
    routing::{delete, get, post, put},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// Cloned for each request handler via Axum's `State` extractor.
/// Uses Arc internally for cheap cloning.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(db: PgPool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Routes
///
/// ```text
/// GET    /ping                          liveness probe
/// GET    /users?q=                      list/search users by name
/// POST   /users                         create user
/// DELETE /users/:id                     delete user (cascades assignments)
/// GET    /tasks?q=                      list/search tasks by title/description
/// POST   /tasks                         create task
/// GET    /tasks/users                   list tasks with assigned users
/// PUT    /tasks/:id                     merge-patch task
/// DELETE /tasks/:id                     delete task (cascades assignments)
/// POST   /tasks/:task_id/users/:user_id assign user to task
/// DELETE /tasks/:task_id/users/:user_id unassign user from task
/// ```
///
/// The route table is flat: `/tasks/users` must coexist with
/// `/tasks/:id`, and the static segment wins at match time.
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    // Configure CORS based on environment
    let cors = if state.config.api.cors_origins.contains(&"*".to_string()) {
        CorsLayer::permissive()
    } else {
        let origins: Vec<HeaderValue> = state
            .config
            .api
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::CONTENT_TYPE])
    };

    Router::new()
        .route("/ping", get(routes::ping::ping))
        .route(
            "/users",
            get(routes::users::list_users).post(routes::users::create_user),
        )
        .route("/users/:id", delete(routes::users::delete_user))
        .route(
            "/tasks",
            get(routes::tasks::list_tasks).post(routes::tasks::create_task),
        )
        .route("/tasks/users", get(routes::tasks::list_tasks_with_users))
        .route(
            "/tasks/:id",
            put(routes::tasks::update_task).delete(routes::tasks::delete_task),
        )
        .route(
            "/tasks/:task_id/users/:user_id",
            post(routes::assignments::assign_user).delete(routes::assignments::unassign_user),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(state)
}
