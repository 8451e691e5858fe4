// src/handlers/accounts.rs

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
    models::account::{Account, CreateAccountPayload, UpdateAccountPayload},
};

// POST /api/accounts
#[utoipa::path(
    post,
    path = "/api/accounts",
    tag = "Accounts",
    request_body = CreateAccountPayload,
    responses(
        (status = 201, description = "Account criada", body = Account),
        (status = 400, description = "Dados inválidos")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_account(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(payload): Json<CreateAccountPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let account = app_state
        .account_service
        .create(
            &user,
            &payload.name,
            payload.industry.as_deref(),
            payload.website.as_deref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(account)))
}

// GET /api/accounts
#[utoipa::path(
    get,
    path = "/api/accounts",
    tag = "Accounts",
    responses(
        (status = 200, description = "Accounts visíveis para o chamador", body = Vec<Account>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_accounts(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<Json<Vec<Account>>, AppError> {
    let accounts = app_state.account_service.list(&user).await?;
    Ok(Json(accounts))
}

// PUT /api/accounts/{id}
#[utoipa::path(
    put,
    path = "/api/accounts/{id}",
    tag = "Accounts",
    request_body = UpdateAccountPayload,
    params(("id" = Uuid, Path, description = "ID da account")),
    responses(
        (status = 200, description = "Account atualizada", body = Account),
        (status = 404, description = "Inexistente ou de outro usuário")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_account(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateAccountPayload>,
) -> Result<Json<Account>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let account = app_state
        .account_service
        .update(
            &user,
            id,
            &payload.name,
            payload.industry.as_deref(),
            payload.website.as_deref(),
        )
        .await?;

    Ok(Json(account))
}

// DELETE /api/accounts/{id}
#[utoipa::path(
    delete,
    path = "/api/accounts/{id}",
    tag = "Accounts",
    params(("id" = Uuid, Path, description = "ID da account")),
    responses(
        (status = 200, description = "Account removida"),
        (status = 404, description = "Inexistente ou de outro usuário")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_account(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.account_service.delete(&user, id).await?;
    Ok(Json(json!({ "message": "Account deleted successfully" })))
}
