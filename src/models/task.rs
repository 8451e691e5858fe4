// src/models/task.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    #[schema(value_type = Option<String>, format = Date)]
    pub due_date: Option<NaiveDate>,
    pub status: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTaskPayload {
    #[validate(length(min = 1, message = "Title is required"))]
    #[schema(example = "Ligar para o cliente")]
    pub title: String,

    pub description: Option<String>,

    #[schema(value_type = Option<String>, format = Date, example = "2025-09-01")]
    pub due_date: Option<NaiveDate>,

    // Ausente => "pending"
    pub status: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateTaskPayload {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    pub description: Option<String>,

    #[schema(value_type = Option<String>, format = Date)]
    pub due_date: Option<NaiveDate>,

    pub status: Option<String>,
}

// POST /tasks/follow-up — construtor de conveniência: título e status fixos,
// vencimento amanhã.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateFollowUpPayload {
    pub contact_id: Uuid,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
}
