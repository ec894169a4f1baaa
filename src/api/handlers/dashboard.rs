/*
 * Responsibility
 * - Role-gated greeting endpoints under /api
 * - The AllowList is attached in routes.rs; handlers only read the context
 */
use axum::Json;

use crate::api::{
    dto::MessageResponse,
    extractors::{AuthCtx, AuthCtxExtractor},
};
use crate::services::authz::Role;

fn welcome(role: Role, ctx: &AuthCtx) -> Json<MessageResponse> {
    Json(MessageResponse::new(format!(
        "Welcome {} {}!",
        role,
        ctx.identity.display_name()
    )))
}

pub async fn student_dashboard(AuthCtxExtractor(ctx): AuthCtxExtractor) -> Json<MessageResponse> {
    welcome(Role::Student, &ctx)
}

pub async fn faculty_dashboard(AuthCtxExtractor(ctx): AuthCtxExtractor) -> Json<MessageResponse> {
    welcome(Role::Faculty, &ctx)
}

pub async fn admin_panel(AuthCtxExtractor(ctx): AuthCtxExtractor) -> Json<MessageResponse> {
    welcome(Role::Admin, &ctx)
}
