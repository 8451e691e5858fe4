// src/db/opportunity_repo.rs

use rust_decimal::Decimal;
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::opportunity::{Opportunity, RevenueRecord},
};

const OPPORTUNITY_COLUMNS: &str = "id, title, value, stage, contact_id, description, \
     user_id, finalized, finalized_at, created_at";

const REVENUE_COLUMNS: &str = "id, opportunity_id, vendedor_id, opportunity_title, \
     opportunity_description, opportunity_value, finalized_at";

#[derive(Clone)]
pub struct OpportunityRepository {
    pool: PgPool,
}

impl OpportunityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn insert(
        &self,
        title: &str,
        value: Decimal,
        stage: &str,
        contact_id: Uuid,
        description: Option<&str>,
        user_id: Uuid,
    ) -> Result<Opportunity, AppError> {
        let opportunity = sqlx::query_as::<_, Opportunity>(&format!(
            "INSERT INTO opportunities (title, value, stage, contact_id, description, user_id)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {OPPORTUNITY_COLUMNS}"
        ))
        .bind(title)
        .bind(value)
        .bind(stage)
        .bind(contact_id)
        .bind(description)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(opportunity)
    }

    /// Listagem escopada. Finalizadas nunca aparecem, para qualquer papel.
    pub async fn find_scoped(&self, owner: Option<Uuid>) -> Result<Vec<Opportunity>, AppError> {
        let opportunities = match owner {
            Some(user_id) => {
                sqlx::query_as::<_, Opportunity>(&format!(
                    "SELECT {OPPORTUNITY_COLUMNS} FROM opportunities
                     WHERE user_id = $1 AND finalized = false"
                ))
                .bind(user_id)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Opportunity>(&format!(
                    "SELECT {OPPORTUNITY_COLUMNS} FROM opportunities
                     WHERE finalized = false"
                ))
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(opportunities)
    }

    /// Só o estágio, nada mais.
    pub async fn update_stage(
        &self,
        id: Uuid,
        stage: &str,
        owner_gate: Option<Uuid>,
    ) -> Result<Option<Opportunity>, AppError> {
        let opportunity = match owner_gate {
            Some(user_id) => {
                sqlx::query_as::<_, Opportunity>(&format!(
                    "UPDATE opportunities SET stage = $1
                     WHERE id = $2 AND user_id = $3
                     RETURNING {OPPORTUNITY_COLUMNS}"
                ))
                .bind(stage)
                .bind(id)
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Opportunity>(&format!(
                    "UPDATE opportunities SET stage = $1
                     WHERE id = $2
                     RETURNING {OPPORTUNITY_COLUMNS}"
                ))
                .bind(stage)
                .bind(id)
                .fetch_optional(&self.pool)
                .await?
            }
        };

        Ok(opportunity)
    }

    /// Reescreve todos os campos mutáveis de uma vez.
    pub async fn update_parameters(
        &self,
        id: Uuid,
        title: &str,
        value: Decimal,
        stage: &str,
        contact_id: Option<Uuid>,
        description: Option<&str>,
        owner_gate: Option<Uuid>,
    ) -> Result<Option<Opportunity>, AppError> {
        let opportunity = match owner_gate {
            Some(user_id) => {
                sqlx::query_as::<_, Opportunity>(&format!(
                    "UPDATE opportunities
                     SET title = $1, value = $2, stage = $3, contact_id = $4, description = $5
                     WHERE id = $6 AND user_id = $7
                     RETURNING {OPPORTUNITY_COLUMNS}"
                ))
                .bind(title)
                .bind(value)
                .bind(stage)
                .bind(contact_id)
                .bind(description)
                .bind(id)
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Opportunity>(&format!(
                    "UPDATE opportunities
                     SET title = $1, value = $2, stage = $3, contact_id = $4, description = $5
                     WHERE id = $6
                     RETURNING {OPPORTUNITY_COLUMNS}"
                ))
                .bind(title)
                .bind(value)
                .bind(stage)
                .bind(contact_id)
                .bind(description)
                .bind(id)
                .fetch_optional(&self.pool)
                .await?
            }
        };

        Ok(opportunity)
    }

    /// Sem filtro de dono: o service já barrou quem não é gestor.
    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM opportunities WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    // -------------------------------------------------------------------------
    //  Finalização — executam dentro da transação aberta pelo service.
    // -------------------------------------------------------------------------

    /// Carrega e tranca a linha (FOR UPDATE) para a finalização.
    pub async fn find_for_update<'e, E>(
        &self,
        executor: E,
        id: Uuid,
    ) -> Result<Option<Opportunity>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let opportunity = sqlx::query_as::<_, Opportunity>(&format!(
            "SELECT {OPPORTUNITY_COLUMNS} FROM opportunities WHERE id = $1 FOR UPDATE"
        ))
        .bind(id)
        .fetch_optional(executor)
        .await?;

        Ok(opportunity)
    }

    /// UPDATE condicional: só vira finalizada se ainda não era. `None` aqui
    /// significa que outra requisição finalizou primeiro.
    pub async fn mark_finalized<'e, E>(
        &self,
        executor: E,
        id: Uuid,
    ) -> Result<Option<Opportunity>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let opportunity = sqlx::query_as::<_, Opportunity>(&format!(
            "UPDATE opportunities SET finalized = true, finalized_at = NOW()
             WHERE id = $1 AND finalized = false
             RETURNING {OPPORTUNITY_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(executor)
        .await?;

        Ok(opportunity)
    }

    /// Anexa a linha imutável de receita, copiando a oportunidade finalizada.
    pub async fn insert_revenue<'e, E>(
        &self,
        executor: E,
        opportunity: &Opportunity,
    ) -> Result<RevenueRecord, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let revenue = sqlx::query_as::<_, RevenueRecord>(&format!(
            "INSERT INTO receita (opportunity_id, vendedor_id, opportunity_title,
                                  opportunity_description, opportunity_value, finalized_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {REVENUE_COLUMNS}"
        ))
        .bind(opportunity.id)
        .bind(opportunity.user_id)
        .bind(&opportunity.title)
        .bind(opportunity.description.as_deref().unwrap_or(""))
        .bind(opportunity.value)
        .bind(opportunity.finalized_at)
        .fetch_one(executor)
        .await?;

        Ok(revenue)
    }
}
