//! Member endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;

use crate::{
    error::{AppError, AppResult},
    models::member::{CreateMember, Member, UpdateMember},
    AppState,
};

use super::{Authorized, MessageResponse};

/// Register a member
#[utoipa::path(
    post,
    path = "/members/",
    tag = "members",
    security(("token_auth" = [])),
    request_body = CreateMember,
    responses(
        (status = 201, description = "Member created", body = Member),
        (status = 400, description = "Name or email missing", body = crate::error::ErrorResponse),
        (status = 401, description = "Unauthorized", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_member(
    State(state): State<AppState>,
    _: Authorized,
    WithRejection(Json(data), _): WithRejection<Json<CreateMember>, AppError>,
) -> AppResult<(StatusCode, Json<Member>)> {
    let member = state.services.members.create(data).await?;
    Ok((StatusCode::CREATED, Json(member)))
}

/// List all members
#[utoipa::path(
    get,
    path = "/members/",
    tag = "members",
    security(("token_auth" = [])),
    responses(
        (status = 200, description = "All members", body = Vec<Member>),
        (status = 401, description = "Unauthorized", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_members(
    State(state): State<AppState>,
    _: Authorized,
) -> Json<Vec<Member>> {
    Json(state.services.members.list().await)
}

#[utoipa::path(
    put,
    path = "/members/{id}",
    tag = "members",
    security(("token_auth" = [])),
    params(("id" = u64, Path, description = "Member ID")),
    request_body = UpdateMember,
    responses(
        (status = 200, description = "Member updated", body = Member),
        (status = 404, description = "Member not found", body = crate::error::ErrorResponse),
        (status = 401, description = "Unauthorized", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_member(
    State(state): State<AppState>,
    _: Authorized,
    WithRejection(Path(id), _): WithRejection<Path<u64>, AppError>,
    WithRejection(Json(data), _): WithRejection<Json<UpdateMember>, AppError>,
) -> AppResult<Json<Member>> {
    let member = state.services.members.update(id, data).await?;
    Ok(Json(member))
}

#[utoipa::path(
    delete,
    path = "/members/{id}",
    tag = "members",
    security(("token_auth" = [])),
    params(("id" = u64, Path, description = "Member ID")),
    responses(
        (status = 200, description = "Member deleted", body = MessageResponse),
        (status = 404, description = "Member not found", body = crate::error::ErrorResponse),
        (status = 401, description = "Unauthorized", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_member(
    State(state): State<AppState>,
    _: Authorized,
    WithRejection(Path(id), _): WithRejection<Path<u64>, AppError>,
) -> AppResult<Json<MessageResponse>> {
    state.services.members.delete(id).await?;
    Ok(Json(MessageResponse::new("Member deleted successfully")))
}
