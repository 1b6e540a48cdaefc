/// Liveness probe
///
/// # Endpoint
///
/// ```text
/// GET /ping
/// ```
///
/// Response:
/// ```json
/// { "message": "pong" }
/// ```

use crate::error::ApiResult;
use crate::routes::MessageResponse;
use axum::Json;

/// Ping handler, answers without touching the store
pub async fn ping() -> ApiResult<Json<MessageResponse>> {
    Ok(Json(MessageResponse {
        message: "pong".to_string(),
    }))
}
