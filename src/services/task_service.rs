// src/services/task_service.rs

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::TaskRepository,
    models::{auth::AuthUser, task::Task},
    services::policy,
};

const FOLLOW_UP_TITLE: &str = "Follow-up Task";

/// Vencimento do follow-up: amanhã, relativo ao momento da criação.
pub fn follow_up_due_date(now: chrono::DateTime<Utc>) -> NaiveDate {
    (now + chrono::Duration::days(1)).date_naive()
}

#[derive(Clone)]
pub struct TaskService {
    repo: TaskRepository,
}

impl TaskService {
    pub fn new(repo: TaskRepository) -> Self {
        Self { repo }
    }

    pub async fn create(
        &self,
        actor: &AuthUser,
        title: &str,
        description: Option<&str>,
        due_date: Option<NaiveDate>,
        status: Option<&str>,
    ) -> Result<Task, AppError> {
        self.repo
            .insert(
                title,
                description,
                due_date,
                status.unwrap_or("pending"),
                actor.id,
            )
            .await
    }

    /// Construtor de conveniência: título e status fixos, vence amanhã.
    /// `contact_id` é recebido pela rota mas a tarefa não guarda o vínculo,
    /// como no comportamento original.
    pub async fn create_follow_up(
        &self,
        actor: &AuthUser,
        description: &str,
    ) -> Result<Task, AppError> {
        self.repo
            .insert(
                FOLLOW_UP_TITLE,
                Some(description),
                Some(follow_up_due_date(Utc::now())),
                "pending",
                actor.id,
            )
            .await
    }

    pub async fn list(&self, actor: &AuthUser) -> Result<Vec<Task>, AppError> {
        self.repo.find_scoped(policy::read_scope(actor)).await
    }

    pub async fn update(
        &self,
        actor: &AuthUser,
        id: Uuid,
        title: &str,
        description: Option<&str>,
        due_date: Option<NaiveDate>,
        status: Option<&str>,
    ) -> Result<Task, AppError> {
        self.repo
            .update(
                id,
                title,
                description,
                due_date,
                status,
                policy::write_scope(actor),
            )
            .await?
            .ok_or(AppError::NotFoundOrForbidden("Task"))
    }

    pub async fn delete(&self, actor: &AuthUser, id: Uuid) -> Result<(), AppError> {
        let deleted = self.repo.delete(id, policy::write_scope(actor)).await?;
        if !deleted {
            return Err(AppError::NotFoundOrForbidden("Task"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn follow_up_vence_amanha() {
        let now = Utc.with_ymd_and_hms(2025, 8, 15, 10, 30, 0).unwrap();
        assert_eq!(
            follow_up_due_date(now),
            NaiveDate::from_ymd_opt(2025, 8, 16).unwrap()
        );
    }

    #[test]
    fn follow_up_atravessa_fim_de_mes() {
        let now = Utc.with_ymd_and_hms(2025, 1, 31, 23, 0, 0).unwrap();
        assert_eq!(
            follow_up_due_date(now),
            NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()
        );
    }
}
