// src/models/communication.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// Registro de comunicação com um contato (e-mail, ligação, WhatsApp...).
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct Communication {
    pub id: Uuid,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
    pub content: String,
    pub contact_id: Uuid,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

// Linha da listagem com o username do criador (só exibição, não autorização).
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct CommunicationWithCreator {
    pub id: Uuid,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
    pub content: String,
    pub contact_id: Uuid,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub creator_name: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCommunicationPayload {
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "Type is required"))]
    #[schema(example = "email")]
    pub kind: String,

    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,

    pub contact_id: Uuid,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateCommunicationPayload {
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "Type is required"))]
    pub kind: String,

    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
}

// Filtro opcional da listagem: ?contact_id=...
#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CommunicationListQuery {
    pub contact_id: Option<Uuid>,
}
