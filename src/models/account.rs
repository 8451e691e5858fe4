// src/models/account.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// Uma Account é a empresa/organização do contato.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    pub industry: Option<String>,
    pub website: Option<String>,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateAccountPayload {
    #[validate(length(min = 1, message = "Account name is required"))]
    #[schema(example = "Acme Ltda")]
    pub name: String,

    pub industry: Option<String>,
    pub website: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateAccountPayload {
    #[validate(length(min = 1, message = "Account name is required"))]
    pub name: String,

    pub industry: Option<String>,
    pub website: Option<String>,
}
