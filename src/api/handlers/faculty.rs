/*
 * Responsibility
 * - The caller's own faculty profile (/faculty/me, /faculty/my-profile)
 * - /faculty/test reachability check
 */
use axum::{Json, extract::State};

use crate::{
    api::{
        dto::{
            MessageResponse,
            faculty::{AchievementResponse, FacultyDetailsResponse, MyFacultyProfileResponse},
        },
        extractors::AuthCtxExtractor,
    },
    error::AppError,
    state::AppState,
};

pub async fn get_faculty_details(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
) -> Result<Json<FacultyDetailsResponse>, AppError> {
    let row = state
        .profiles
        .find_faculty_profile(ctx.identity.id)
        .await?
        .ok_or(AppError::not_found("Profile"))?;

    Ok(Json(row.into()))
}

pub async fn get_my_faculty_profile(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
) -> Result<Json<MyFacultyProfileResponse>, AppError> {
    let faculty_id = ctx.identity.id;

    let profile = state
        .profiles
        .find_faculty_profile(faculty_id)
        .await?
        .ok_or(AppError::not_found("Profile"))?;

    let achievements = state.profiles.list_achievements(faculty_id).await?;

    Ok(Json(MyFacultyProfileResponse {
        profile: profile.into(),
        achievements: achievements
            .into_iter()
            .map(AchievementResponse::from)
            .collect(),
    }))
}

pub async fn route_check() -> Json<MessageResponse> {
    Json(MessageResponse::new("Faculty route is working"))
}
