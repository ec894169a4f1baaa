/*
 * Responsibility
 * - Events coordinated by the caller and their participants
 * - Bulk approval of participants
 * - Resource-level check: only the event's coordinator may read or approve its participants
 */
use axum::{Json, extract::State};
use uuid::Uuid;

use crate::{
    api::{
        dto::{
            MessageResponse,
            events::{BulkApproveRequest, EventResponse, ParticipantResponse},
        },
        extractors::{AuthCtxExtractor, EventId, JsonBody},
    },
    error::AppError,
    state::AppState,
};

async fn ensure_coordinator(state: &AppState, event_id: Uuid, caller: Uuid) -> Result<(), AppError> {
    let owner = state
        .events
        .find_owner(event_id)
        .await?
        .ok_or(AppError::not_found("Event"))?;

    if owner.coordinator_id != Some(caller) {
        tracing::warn!(%event_id, %caller, "caller does not coordinate this event");
        return Err(AppError::Forbidden);
    }

    Ok(())
}

pub async fn list_coordinated_events(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
) -> Result<Json<Vec<EventResponse>>, AppError> {
    let rows = state.events.list_by_coordinator(ctx.identity.id).await?;

    Ok(Json(rows.into_iter().map(EventResponse::from).collect()))
}

pub async fn list_event_participants(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    event_id: EventId,
) -> Result<Json<Vec<ParticipantResponse>>, AppError> {
    ensure_coordinator(&state, event_id.id, ctx.identity.id).await?;

    let rows = state.events.list_participants(event_id.id).await?;

    Ok(Json(rows.into_iter().map(ParticipantResponse::from).collect()))
}

pub async fn bulk_approve_participants(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    event_id: EventId,
    JsonBody(req): JsonBody<BulkApproveRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let participant_ids = req
        .validate()
        .map_err(|msg| AppError::bad_request("INVALID_PARTICIPANT_IDS", msg))?;

    ensure_coordinator(&state, event_id.id, ctx.identity.id).await?;

    let approved = if participant_ids.is_empty() {
        0
    } else {
        state
            .events
            .approve_participants(event_id.id, &participant_ids)
            .await?
    };

    tracing::info!(
        event_id = %event_id.id,
        requested = participant_ids.len(),
        approved,
        "participants approved"
    );

    Ok(Json(MessageResponse::new(format!(
        "Approved {approved} participants."
    ))))
}
