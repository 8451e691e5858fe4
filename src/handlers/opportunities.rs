// src/handlers/opportunities.rs

use axum::{
    extract::{Path, State},
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
    models::opportunity::{
        CreateOpportunityPayload, FinalizeResponse, Opportunity, UpdateOpportunityParametersPayload,
        UpdateStagePayload,
    },
};

// POST /api/opportunities
#[utoipa::path(
    post,
    path = "/api/opportunities",
    tag = "Opportunities",
    request_body = CreateOpportunityPayload,
    responses(
        (status = 201, description = "Oportunidade criada", body = Opportunity),
        (status = 400, description = "Dados inválidos")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_opportunity(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(payload): Json<CreateOpportunityPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let opportunity = app_state
        .opportunity_service
        .create(
            &user,
            &payload.title,
            payload.value,
            payload.contact_id,
            payload.stage.as_deref(),
            payload.description.as_deref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(opportunity)))
}

// GET /api/opportunities — nunca inclui as finalizadas.
#[utoipa::path(
    get,
    path = "/api/opportunities",
    tag = "Opportunities",
    responses(
        (status = 200, description = "Oportunidades abertas visíveis para o chamador", body = Vec<Opportunity>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_opportunities(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<Json<Vec<Opportunity>>, AppError> {
    let opportunities = app_state.opportunity_service.list(&user).await?;
    Ok(Json(opportunities))
}

// PUT /api/opportunities/{id} — só o estágio (drag-and-drop do kanban).
#[utoipa::path(
    put,
    path = "/api/opportunities/{id}",
    tag = "Opportunities",
    request_body = UpdateStagePayload,
    params(("id" = Uuid, Path, description = "ID da oportunidade")),
    responses(
        (status = 200, description = "Estágio atualizado", body = Opportunity),
        (status = 404, description = "Inexistente ou de outro usuário")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_stage(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateStagePayload>,
) -> Result<Json<Opportunity>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let opportunity = app_state
        .opportunity_service
        .update_stage(&user, id, &payload.stage)
        .await?;

    Ok(Json(opportunity))
}

// PUT /api/opportunities/{id}/parameters — atualização completa.
#[utoipa::path(
    put,
    path = "/api/opportunities/{id}/parameters",
    tag = "Opportunities",
    request_body = UpdateOpportunityParametersPayload,
    params(("id" = Uuid, Path, description = "ID da oportunidade")),
    responses(
        (status = 200, description = "Oportunidade atualizada", body = Opportunity),
        (status = 404, description = "Inexistente ou de outro usuário")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_parameters(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateOpportunityParametersPayload>,
) -> Result<Json<Opportunity>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let opportunity = app_state
        .opportunity_service
        .update_parameters(
            &user,
            id,
            &payload.title,
            payload.value,
            &payload.stage,
            payload.contact_id,
            payload.description.as_deref(),
        )
        .await?;

    Ok(Json(opportunity))
}

// PUT /api/opportunities/{id}/finalize
#[utoipa::path(
    put,
    path = "/api/opportunities/{id}/finalize",
    tag = "Opportunities",
    params(("id" = Uuid, Path, description = "ID da oportunidade")),
    responses(
        (status = 200, description = "Oportunidade finalizada + receita registrada", body = FinalizeResponse),
        (status = 400, description = "Fora de closed, ou já finalizada"),
        (status = 404, description = "Oportunidade não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn finalize_opportunity(
    State(app_state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<FinalizeResponse>, AppError> {
    let result = app_state.opportunity_service.finalize(id).await?;
    Ok(Json(result))
}

// DELETE /api/opportunities/{id} — somente gestores.
#[utoipa::path(
    delete,
    path = "/api/opportunities/{id}",
    tag = "Opportunities",
    params(("id" = Uuid, Path, description = "ID da oportunidade")),
    responses(
        (status = 200, description = "Oportunidade removida"),
        (status = 403, description = "Chamador não é gestor"),
        (status = 404, description = "Oportunidade não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_opportunity(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.opportunity_service.delete(&user, id).await?;
    Ok(Json(json!({ "message": "Opportunity deleted successfully" })))
}
