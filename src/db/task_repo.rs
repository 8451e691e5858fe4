// src/db/task_repo.rs

use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{common::error::AppError, models::task::Task};

const TASK_COLUMNS: &str = "id, title, description, due_date, status, user_id, created_at";

#[derive(Clone)]
pub struct TaskRepository {
    pool: PgPool,
}

impl TaskRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert(
        &self,
        title: &str,
        description: Option<&str>,
        due_date: Option<NaiveDate>,
        status: &str,
        user_id: Uuid,
    ) -> Result<Task, AppError> {
        let task = sqlx::query_as::<_, Task>(&format!(
            "INSERT INTO tasks (title, description, due_date, status, user_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {TASK_COLUMNS}"
        ))
        .bind(title)
        .bind(description)
        .bind(due_date)
        .bind(status)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(task)
    }

    pub async fn find_scoped(&self, owner: Option<Uuid>) -> Result<Vec<Task>, AppError> {
        let tasks = match owner {
            Some(user_id) => {
                sqlx::query_as::<_, Task>(&format!(
                    "SELECT {TASK_COLUMNS} FROM tasks WHERE user_id = $1"
                ))
                .bind(user_id)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Task>(&format!("SELECT {TASK_COLUMNS} FROM tasks"))
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        Ok(tasks)
    }

    pub async fn update(
        &self,
        id: Uuid,
        title: &str,
        description: Option<&str>,
        due_date: Option<NaiveDate>,
        status: Option<&str>,
        owner_gate: Option<Uuid>,
    ) -> Result<Option<Task>, AppError> {
        let task = match owner_gate {
            Some(user_id) => {
                sqlx::query_as::<_, Task>(&format!(
                    "UPDATE tasks
                     SET title = $1, description = $2, due_date = $3,
                         status = COALESCE($4, status)
                     WHERE id = $5 AND user_id = $6
                     RETURNING {TASK_COLUMNS}"
                ))
                .bind(title)
                .bind(description)
                .bind(due_date)
                .bind(status)
                .bind(id)
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Task>(&format!(
                    "UPDATE tasks
                     SET title = $1, description = $2, due_date = $3,
                         status = COALESCE($4, status)
                     WHERE id = $5
                     RETURNING {TASK_COLUMNS}"
                ))
                .bind(title)
                .bind(description)
                .bind(due_date)
                .bind(status)
                .bind(id)
                .fetch_optional(&self.pool)
                .await?
            }
        };

        Ok(task)
    }

    pub async fn delete(&self, id: Uuid, owner_gate: Option<Uuid>) -> Result<bool, AppError> {
        let result = match owner_gate {
            Some(user_id) => {
                sqlx::query("DELETE FROM tasks WHERE id = $1 AND user_id = $2")
                    .bind(id)
                    .bind(user_id)
                    .execute(&self.pool)
                    .await?
            }
            None => {
                sqlx::query("DELETE FROM tasks WHERE id = $1")
                    .bind(id)
                    .execute(&self.pool)
                    .await?
            }
        };

        Ok(result.rows_affected() > 0)
    }
}
