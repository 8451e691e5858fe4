// src/db/communication_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::communication::{Communication, CommunicationWithCreator},
};

const COMMUNICATION_COLUMNS: &str = "id, type, content, contact_id, user_id, created_at";

#[derive(Clone)]
pub struct CommunicationRepository {
    pool: PgPool,
}

impl CommunicationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert(
        &self,
        kind: &str,
        content: &str,
        contact_id: Uuid,
        user_id: Uuid,
    ) -> Result<Communication, AppError> {
        let communication = sqlx::query_as::<_, Communication>(&format!(
            "INSERT INTO communications (type, content, contact_id, user_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COMMUNICATION_COLUMNS}"
        ))
        .bind(kind)
        .bind(content)
        .bind(contact_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(communication)
    }

    /// Sem filtro de dono (comportamento da última revisão observada);
    /// `contact_id` é só um filtro de conveniência da UI.
    pub async fn find_all(
        &self,
        contact_id: Option<Uuid>,
    ) -> Result<Vec<CommunicationWithCreator>, AppError> {
        let communications = match contact_id {
            Some(contact) => {
                sqlx::query_as::<_, CommunicationWithCreator>(
                    r#"
                    SELECT c.id, c.type, c.content, c.contact_id, c.user_id,
                           c.created_at, u.username AS creator_name
                    FROM communications c
                    LEFT JOIN users u ON c.user_id = u.id
                    WHERE c.contact_id = $1
                    "#,
                )
                .bind(contact)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, CommunicationWithCreator>(
                    r#"
                    SELECT c.id, c.type, c.content, c.contact_id, c.user_id,
                           c.created_at, u.username AS creator_name
                    FROM communications c
                    LEFT JOIN users u ON c.user_id = u.id
                    "#,
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(communications)
    }

    pub async fn update(
        &self,
        id: Uuid,
        kind: &str,
        content: &str,
    ) -> Result<Option<Communication>, AppError> {
        let communication = sqlx::query_as::<_, Communication>(&format!(
            "UPDATE communications SET type = $1, content = $2
             WHERE id = $3
             RETURNING {COMMUNICATION_COLUMNS}"
        ))
        .bind(kind)
        .bind(content)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(communication)
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM communications WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
