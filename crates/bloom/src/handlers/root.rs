use axum::Json;

use bloom_core::content::MessageResponse;

/// GET /api - Service banner, doubles as a liveness check.
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new("Bloom Agriculture API"))
}
