// src/db/account_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{common::error::AppError, models::account::Account};

const ACCOUNT_COLUMNS: &str = "id, name, industry, website, user_id, created_at";

#[derive(Clone)]
pub struct AccountRepository {
    pool: PgPool,
}

impl AccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert(
        &self,
        name: &str,
        industry: Option<&str>,
        website: Option<&str>,
        user_id: Uuid,
    ) -> Result<Account, AppError> {
        let account = sqlx::query_as::<_, Account>(&format!(
            "INSERT INTO accounts (name, industry, website, user_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {ACCOUNT_COLUMNS}"
        ))
        .bind(name)
        .bind(industry)
        .bind(website)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(account)
    }

    /// `owner = None` lista tudo (gestor); `Some(id)` só o que é do usuário.
    pub async fn find_scoped(&self, owner: Option<Uuid>) -> Result<Vec<Account>, AppError> {
        let accounts = match owner {
            Some(user_id) => {
                sqlx::query_as::<_, Account>(&format!(
                    "SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE user_id = $1"
                ))
                .bind(user_id)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Account>(&format!(
                    "SELECT {ACCOUNT_COLUMNS} FROM accounts"
                ))
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(accounts)
    }

    /// UPDATE com o filtro de dono embutido; `None` retornado = inexistente
    /// ou de outro usuário, indistinguíveis de propósito.
    pub async fn update(
        &self,
        id: Uuid,
        name: &str,
        industry: Option<&str>,
        website: Option<&str>,
        owner_gate: Option<Uuid>,
    ) -> Result<Option<Account>, AppError> {
        let account = match owner_gate {
            Some(user_id) => {
                sqlx::query_as::<_, Account>(&format!(
                    "UPDATE accounts SET name = $1, industry = $2, website = $3
                     WHERE id = $4 AND user_id = $5
                     RETURNING {ACCOUNT_COLUMNS}"
                ))
                .bind(name)
                .bind(industry)
                .bind(website)
                .bind(id)
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Account>(&format!(
                    "UPDATE accounts SET name = $1, industry = $2, website = $3
                     WHERE id = $4
                     RETURNING {ACCOUNT_COLUMNS}"
                ))
                .bind(name)
                .bind(industry)
                .bind(website)
                .bind(id)
                .fetch_optional(&self.pool)
                .await?
            }
        };

        Ok(account)
    }

    pub async fn delete(&self, id: Uuid, owner_gate: Option<Uuid>) -> Result<bool, AppError> {
        let result = match owner_gate {
            Some(user_id) => {
                sqlx::query("DELETE FROM accounts WHERE id = $1 AND user_id = $2")
                    .bind(id)
                    .bind(user_id)
                    .execute(&self.pool)
                    .await?
            }
            None => {
                sqlx::query("DELETE FROM accounts WHERE id = $1")
                    .bind(id)
                    .execute(&self.pool)
                    .await?
            }
        };

        Ok(result.rows_affected() > 0)
    }
}
