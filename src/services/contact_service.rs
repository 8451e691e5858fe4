// src/services/contact_service.rs

use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::ContactRepository,
    models::{
        auth::AuthUser,
        contact::{Contact, ContactWithCreator},
    },
    services::policy,
};

#[derive(Clone)]
pub struct ContactService {
    repo: ContactRepository,
}

impl ContactService {
    pub fn new(repo: ContactRepository) -> Self {
        Self { repo }
    }

    pub async fn create(
        &self,
        actor: &AuthUser,
        name: &str,
        email: &str,
        phone: Option<&str>,
        status: Option<&str>,
        lead_score: Option<i32>,
    ) -> Result<Contact, AppError> {
        self.repo
            .insert(
                name,
                email,
                phone,
                status.unwrap_or("lead"),
                lead_score.unwrap_or(0),
                actor.id,
            )
            .await
    }

    pub async fn list(&self, actor: &AuthUser) -> Result<Vec<ContactWithCreator>, AppError> {
        self.repo.find_scoped(policy::read_scope(actor)).await
    }

    pub async fn update(
        &self,
        actor: &AuthUser,
        id: Uuid,
        name: &str,
        email: &str,
        phone: Option<&str>,
        status: Option<&str>,
        lead_score: Option<i32>,
    ) -> Result<Contact, AppError> {
        self.repo
            .update(
                id,
                name,
                email,
                phone,
                status,
                lead_score,
                policy::write_scope(actor),
            )
            .await?
            .ok_or(AppError::NotFoundOrForbidden("Contact"))
    }

    /// Caminho estreito de atualização: só a pontuação, mesma regra de posse.
    pub async fn update_lead_score(
        &self,
        actor: &AuthUser,
        id: Uuid,
        lead_score: i32,
    ) -> Result<Contact, AppError> {
        self.repo
            .update_lead_score(id, lead_score, policy::write_scope(actor))
            .await?
            .ok_or(AppError::NotFoundOrForbidden("Contact"))
    }

    pub async fn delete(&self, actor: &AuthUser, id: Uuid) -> Result<(), AppError> {
        let deleted = self.repo.delete(id, policy::write_scope(actor)).await?;
        if !deleted {
            return Err(AppError::NotFoundOrForbidden("Contact"));
        }
        Ok(())
    }
}
