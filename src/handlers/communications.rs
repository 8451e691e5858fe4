// src/handlers/communications.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::communication::{
        Communication, CommunicationListQuery, CommunicationWithCreator,
        CreateCommunicationPayload, UpdateCommunicationPayload,
    },
};

// POST /api/communications
#[utoipa::path(
    post,
    path = "/api/communications",
    tag = "Communications",
    request_body = CreateCommunicationPayload,
    responses(
        (status = 201, description = "Comunicação registrada", body = Communication),
        (status = 400, description = "Dados inválidos")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_communication(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(payload): Json<CreateCommunicationPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let communication = app_state
        .communication_service
        .create(&user, &payload.kind, &payload.content, payload.contact_id)
        .await?;

    Ok((StatusCode::CREATED, Json(communication)))
}

// GET /api/communications[?contact_id=...] — sem restrição de posse.
#[utoipa::path(
    get,
    path = "/api/communications",
    tag = "Communications",
    params(CommunicationListQuery),
    responses(
        (status = 200, description = "Comunicações registradas", body = Vec<CommunicationWithCreator>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_communications(
    State(app_state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Query(query): Query<CommunicationListQuery>,
) -> Result<Json<Vec<CommunicationWithCreator>>, AppError> {
    let communications = app_state
        .communication_service
        .list(query.contact_id)
        .await?;
    Ok(Json(communications))
}

// PUT /api/communications/{id} — sem restrição de posse.
#[utoipa::path(
    put,
    path = "/api/communications/{id}",
    tag = "Communications",
    request_body = UpdateCommunicationPayload,
    params(("id" = Uuid, Path, description = "ID da comunicação")),
    responses(
        (status = 200, description = "Comunicação atualizada", body = Communication),
        (status = 404, description = "Comunicação não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_communication(
    State(app_state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCommunicationPayload>,
) -> Result<Json<Communication>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let communication = app_state
        .communication_service
        .update(id, &payload.kind, &payload.content)
        .await?;

    Ok(Json(communication))
}

// DELETE /api/communications/{id} — sem restrição de posse.
#[utoipa::path(
    delete,
    path = "/api/communications/{id}",
    tag = "Communications",
    params(("id" = Uuid, Path, description = "ID da comunicação")),
    responses(
        (status = 200, description = "Comunicação removida"),
        (status = 404, description = "Comunicação não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_communication(
    State(app_state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.communication_service.delete(id).await?;
    Ok(Json(json!({ "message": "Communication deleted successfully" })))
}
