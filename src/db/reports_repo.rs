// src/db/reports_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{common::error::AppError, models::reports::SalesSummaryEntry};

#[derive(Clone)]
pub struct ReportsRepository {
    pool: PgPool,
}

impl ReportsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// COUNT(*) de uma tabela de registro, com o filtro de dono opcional.
    /// `table` vem de uma lista fixa no service, nunca do cliente.
    pub async fn count_scoped(&self, table: &str, owner: Option<Uuid>) -> Result<i64, AppError> {
        let count: i64 = match owner {
            Some(user_id) => {
                sqlx::query_scalar(&format!(
                    "SELECT COUNT(*) FROM {table} WHERE user_id = $1"
                ))
                .bind(user_id)
                .fetch_one(&self.pool)
                .await?
            }
            None => {
                sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
                    .fetch_one(&self.pool)
                    .await?
            }
        };

        Ok(count)
    }

    /// Receita finalizada agrupada por vendedor e mês, mais recente primeiro.
    pub async fn sales_summary(&self) -> Result<Vec<SalesSummaryEntry>, AppError> {
        let entries = sqlx::query_as::<_, SalesSummaryEntry>(
            r#"
            SELECT
                user_id,
                to_char(date_trunc('month', finalized_at), 'YYYY-MM') AS month,
                SUM(value) AS total_value,
                COUNT(*) AS opportunities_count
            FROM opportunities
            WHERE finalized = true
            GROUP BY user_id, month
            ORDER BY month DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }
}
