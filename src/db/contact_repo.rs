// src/db/contact_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::contact::{Contact, ContactWithCreator},
};

const CONTACT_COLUMNS: &str =
    "id, name, email, phone, status, lead_score, user_id, created_at";

#[derive(Clone)]
pub struct ContactRepository {
    pool: PgPool,
}

impl ContactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert(
        &self,
        name: &str,
        email: &str,
        phone: Option<&str>,
        status: &str,
        lead_score: i32,
        user_id: Uuid,
    ) -> Result<Contact, AppError> {
        let contact = sqlx::query_as::<_, Contact>(&format!(
            "INSERT INTO contacts (name, email, phone, status, lead_score, user_id)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {CONTACT_COLUMNS}"
        ))
        .bind(name)
        .bind(email)
        .bind(phone)
        .bind(status)
        .bind(lead_score)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(contact)
    }

    /// Listagem com o username do criador (JOIN só para exibição).
    pub async fn find_scoped(
        &self,
        owner: Option<Uuid>,
    ) -> Result<Vec<ContactWithCreator>, AppError> {
        let contacts = match owner {
            Some(user_id) => {
                sqlx::query_as::<_, ContactWithCreator>(
                    r#"
                    SELECT c.id, c.name, c.email, c.phone, c.status, c.lead_score,
                           c.user_id, c.created_at, u.username AS creator_name
                    FROM contacts c
                    LEFT JOIN users u ON c.user_id = u.id
                    WHERE c.user_id = $1
                    "#,
                )
                .bind(user_id)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, ContactWithCreator>(
                    r#"
                    SELECT c.id, c.name, c.email, c.phone, c.status, c.lead_score,
                           c.user_id, c.created_at, u.username AS creator_name
                    FROM contacts c
                    LEFT JOIN users u ON c.user_id = u.id
                    "#,
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(contacts)
    }

    pub async fn update(
        &self,
        id: Uuid,
        name: &str,
        email: &str,
        phone: Option<&str>,
        status: Option<&str>,
        lead_score: Option<i32>,
        owner_gate: Option<Uuid>,
    ) -> Result<Option<Contact>, AppError> {
        // COALESCE preserva status/lead_score quando o payload não os traz.
        let contact = match owner_gate {
            Some(user_id) => {
                sqlx::query_as::<_, Contact>(&format!(
                    "UPDATE contacts
                     SET name = $1, email = $2, phone = $3,
                         status = COALESCE($4, status),
                         lead_score = COALESCE($5, lead_score)
                     WHERE id = $6 AND user_id = $7
                     RETURNING {CONTACT_COLUMNS}"
                ))
                .bind(name)
                .bind(email)
                .bind(phone)
                .bind(status)
                .bind(lead_score)
                .bind(id)
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Contact>(&format!(
                    "UPDATE contacts
                     SET name = $1, email = $2, phone = $3,
                         status = COALESCE($4, status),
                         lead_score = COALESCE($5, lead_score)
                     WHERE id = $6
                     RETURNING {CONTACT_COLUMNS}"
                ))
                .bind(name)
                .bind(email)
                .bind(phone)
                .bind(status)
                .bind(lead_score)
                .bind(id)
                .fetch_optional(&self.pool)
                .await?
            }
        };

        Ok(contact)
    }

    pub async fn update_lead_score(
        &self,
        id: Uuid,
        lead_score: i32,
        owner_gate: Option<Uuid>,
    ) -> Result<Option<Contact>, AppError> {
        let contact = match owner_gate {
            Some(user_id) => {
                sqlx::query_as::<_, Contact>(&format!(
                    "UPDATE contacts SET lead_score = $1
                     WHERE id = $2 AND user_id = $3
                     RETURNING {CONTACT_COLUMNS}"
                ))
                .bind(lead_score)
                .bind(id)
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Contact>(&format!(
                    "UPDATE contacts SET lead_score = $1
                     WHERE id = $2
                     RETURNING {CONTACT_COLUMNS}"
                ))
                .bind(lead_score)
                .bind(id)
                .fetch_optional(&self.pool)
                .await?
            }
        };

        Ok(contact)
    }

    pub async fn delete(&self, id: Uuid, owner_gate: Option<Uuid>) -> Result<bool, AppError> {
        let result = match owner_gate {
            Some(user_id) => {
                sqlx::query("DELETE FROM contacts WHERE id = $1 AND user_id = $2")
                    .bind(id)
                    .bind(user_id)
                    .execute(&self.pool)
                    .await?
            }
            None => {
                sqlx::query("DELETE FROM contacts WHERE id = $1")
                    .bind(id)
                    .execute(&self.pool)
                    .await?
            }
        };

        Ok(result.rows_affected() > 0)
    }
}
