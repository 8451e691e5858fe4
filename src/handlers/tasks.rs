// src/handlers/tasks.rs

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
    models::task::{CreateFollowUpPayload, CreateTaskPayload, Task, UpdateTaskPayload},
};

// POST /api/tasks
#[utoipa::path(
    post,
    path = "/api/tasks",
    tag = "Tasks",
    request_body = CreateTaskPayload,
    responses(
        (status = 201, description = "Tarefa criada", body = Task),
        (status = 400, description = "Dados inválidos")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_task(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(payload): Json<CreateTaskPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let task = app_state
        .task_service
        .create(
            &user,
            &payload.title,
            payload.description.as_deref(),
            payload.due_date,
            payload.status.as_deref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(task)))
}

// POST /api/tasks/follow-up — título e status fixos, vence amanhã.
#[utoipa::path(
    post,
    path = "/api/tasks/follow-up",
    tag = "Tasks",
    request_body = CreateFollowUpPayload,
    responses(
        (status = 201, description = "Tarefa de follow-up criada", body = Task),
        (status = 400, description = "Dados inválidos")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_follow_up(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(payload): Json<CreateFollowUpPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let task = app_state
        .task_service
        .create_follow_up(&user, &payload.description)
        .await?;

    Ok((StatusCode::CREATED, Json(task)))
}

// GET /api/tasks
#[utoipa::path(
    get,
    path = "/api/tasks",
    tag = "Tasks",
    responses(
        (status = 200, description = "Tarefas visíveis para o chamador", body = Vec<Task>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_tasks(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<Json<Vec<Task>>, AppError> {
    let tasks = app_state.task_service.list(&user).await?;
    Ok(Json(tasks))
}

// PUT /api/tasks/{id}
#[utoipa::path(
    put,
    path = "/api/tasks/{id}",
    tag = "Tasks",
    request_body = UpdateTaskPayload,
    params(("id" = Uuid, Path, description = "ID da tarefa")),
    responses(
        (status = 200, description = "Tarefa atualizada", body = Task),
        (status = 404, description = "Inexistente ou de outro usuário")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_task(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateTaskPayload>,
) -> Result<Json<Task>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let task = app_state
        .task_service
        .update(
            &user,
            id,
            &payload.title,
            payload.description.as_deref(),
            payload.due_date,
            payload.status.as_deref(),
        )
        .await?;

    Ok(Json(task))
}

// DELETE /api/tasks/{id}
#[utoipa::path(
    delete,
    path = "/api/tasks/{id}",
    tag = "Tasks",
    params(("id" = Uuid, Path, description = "ID da tarefa")),
    responses(
        (status = 200, description = "Tarefa removida"),
        (status = 404, description = "Inexistente ou de outro usuário")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_task(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.task_service.delete(&user, id).await?;
    Ok(Json(json!({ "message": "Task deleted successfully" })))
}
