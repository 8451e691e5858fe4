// src/models/contact.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct Contact {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub status: String,
    pub lead_score: i32,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

// Linha da listagem: o contato + o username de quem o criou (só exibição).
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct ContactWithCreator {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub status: String,
    pub lead_score: i32,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub creator_name: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateContactPayload {
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Bob")]
    pub name: String,

    #[validate(email(message = "Valid email is required"))]
    #[schema(example = "bob@x.com")]
    pub email: String,

    pub phone: Option<String>,

    // Ausente => "lead"
    pub status: Option<String>,

    // Ausente => 0
    pub lead_score: Option<i32>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateContactPayload {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Valid email is required"))]
    pub email: String,

    pub phone: Option<String>,
    pub status: Option<String>,
    pub lead_score: Option<i32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateLeadScorePayload {
    #[schema(example = 42)]
    pub lead_score: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_invalido_reprova_na_validacao() {
        let payload = CreateContactPayload {
            name: "Bob".into(),
            email: "not-an-email".into(),
            phone: None,
            status: None,
            lead_score: None,
        };
        let err = payload.validate().unwrap_err();
        assert!(err.field_errors().contains_key("email"));
    }

    #[test]
    fn contato_minimo_passa_na_validacao() {
        let payload = CreateContactPayload {
            name: "Bob".into(),
            email: "bob@x.com".into(),
            phone: None,
            status: None,
            lead_score: None,
        };
        assert!(payload.validate().is_ok());
    }
}
