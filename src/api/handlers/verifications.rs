/*
 * Responsibility
 * - Activity verification queue for the caller
 * - approve / reject; both are safe to repeat
 */
use axum::{Json, extract::State};

use crate::{
    api::{
        dto::{
            MessageResponse,
            activities::{PendingActivityResponse, RejectActivityRequest},
        },
        extractors::{ActivityId, AuthCtxExtractor, JsonBody},
    },
    error::AppError,
    state::AppState,
};

pub async fn list_pending_verifications(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
) -> Result<Json<Vec<PendingActivityResponse>>, AppError> {
    let pending = state
        .activities
        .list_pending_for_verifier(ctx.identity.id)
        .await?;

    Ok(Json(
        pending
            .into_iter()
            .map(PendingActivityResponse::from)
            .collect(),
    ))
}

pub async fn approve_activity(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    activity_id: ActivityId,
) -> Result<Json<MessageResponse>, AppError> {
    if !state.activities.approve(activity_id.id).await? {
        return Err(AppError::not_found("Activity"));
    }

    tracing::info!(activity_id = %activity_id.id, verifier = %ctx.identity.id, "activity approved");

    Ok(Json(MessageResponse::new("Activity approved successfully")))
}

pub async fn reject_activity(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    activity_id: ActivityId,
    JsonBody(req): JsonBody<RejectActivityRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let feedback = req
        .validate()
        .map_err(|msg| AppError::bad_request("FEEDBACK_REQUIRED", msg))?;

    if !state.activities.reject(activity_id.id, feedback).await? {
        return Err(AppError::not_found("Activity"));
    }

    tracing::info!(activity_id = %activity_id.id, verifier = %ctx.identity.id, "activity rejected");

    Ok(Json(MessageResponse::new("Activity rejected successfully")))
}
