/*
 * Responsibility
 * - GET /faculty/students/{studentId}: profile, participations, activities
 */
use axum::{Json, extract::State};

use crate::{
    api::{dto::students::StudentProfileResponse, extractors::StudentId},
    error::AppError,
    state::AppState,
};

pub async fn get_student_profile(
    State(state): State<AppState>,
    student_id: StudentId,
) -> Result<Json<StudentProfileResponse>, AppError> {
    let record = state
        .students
        .find_record(student_id.id)
        .await?
        .ok_or(AppError::not_found("Student"))?;

    Ok(Json(record.into()))
}
