/*
 * Responsibility
 * - GET /health (liveness, no auth)
 * - GET /api (hello, no auth)
 */
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::api::dto::MessageResponse;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

pub async fn hello() -> Json<MessageResponse> {
    Json(MessageResponse::new("Hello from the backend!"))
}
