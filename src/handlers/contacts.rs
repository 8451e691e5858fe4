// src/handlers/contacts.rs

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
    models::contact::{
        Contact, ContactWithCreator, CreateContactPayload, UpdateContactPayload,
        UpdateLeadScorePayload,
    },
};

// POST /api/contacts
#[utoipa::path(
    post,
    path = "/api/contacts",
    tag = "Contacts",
    request_body = CreateContactPayload,
    responses(
        (status = 201, description = "Contato criado", body = Contact),
        (status = 400, description = "Dados inválidos")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_contact(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(payload): Json<CreateContactPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let contact = app_state
        .contact_service
        .create(
            &user,
            &payload.name,
            &payload.email,
            payload.phone.as_deref(),
            payload.status.as_deref(),
            payload.lead_score,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(contact)))
}

// GET /api/contacts — gestor vê todos; vendedor, só os seus.
#[utoipa::path(
    get,
    path = "/api/contacts",
    tag = "Contacts",
    responses(
        (status = 200, description = "Contatos visíveis para o chamador", body = Vec<ContactWithCreator>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_contacts(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<Json<Vec<ContactWithCreator>>, AppError> {
    let contacts = app_state.contact_service.list(&user).await?;
    Ok(Json(contacts))
}

// PUT /api/contacts/{id}
#[utoipa::path(
    put,
    path = "/api/contacts/{id}",
    tag = "Contacts",
    request_body = UpdateContactPayload,
    params(("id" = Uuid, Path, description = "ID do contato")),
    responses(
        (status = 200, description = "Contato atualizado", body = Contact),
        (status = 404, description = "Inexistente ou de outro usuário")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_contact(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateContactPayload>,
) -> Result<Json<Contact>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let contact = app_state
        .contact_service
        .update(
            &user,
            id,
            &payload.name,
            &payload.email,
            payload.phone.as_deref(),
            payload.status.as_deref(),
            payload.lead_score,
        )
        .await?;

    Ok(Json(contact))
}

// PUT /api/contacts/{id}/lead-score
#[utoipa::path(
    put,
    path = "/api/contacts/{id}/lead-score",
    tag = "Contacts",
    request_body = UpdateLeadScorePayload,
    params(("id" = Uuid, Path, description = "ID do contato")),
    responses(
        (status = 200, description = "Pontuação atualizada", body = Contact),
        (status = 404, description = "Inexistente ou de outro usuário")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_lead_score(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateLeadScorePayload>,
) -> Result<Json<Contact>, AppError> {
    let contact = app_state
        .contact_service
        .update_lead_score(&user, id, payload.lead_score)
        .await?;

    Ok(Json(contact))
}

// DELETE /api/contacts/{id}
#[utoipa::path(
    delete,
    path = "/api/contacts/{id}",
    tag = "Contacts",
    params(("id" = Uuid, Path, description = "ID do contato")),
    responses(
        (status = 200, description = "Contato removido"),
        (status = 404, description = "Inexistente ou de outro usuário")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_contact(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.contact_service.delete(&user, id).await?;
    Ok(Json(json!({ "message": "Contact deleted successfully" })))
}
