// src/services/account_service.rs

use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::AccountRepository,
    models::{account::Account, auth::AuthUser},
    services::policy,
};

#[derive(Clone)]
pub struct AccountService {
    repo: AccountRepository,
}

impl AccountService {
    pub fn new(repo: AccountRepository) -> Self {
        Self { repo }
    }

    pub async fn create(
        &self,
        actor: &AuthUser,
        name: &str,
        industry: Option<&str>,
        website: Option<&str>,
    ) -> Result<Account, AppError> {
        self.repo.insert(name, industry, website, actor.id).await
    }

    pub async fn list(&self, actor: &AuthUser) -> Result<Vec<Account>, AppError> {
        self.repo.find_scoped(policy::read_scope(actor)).await
    }

    pub async fn update(
        &self,
        actor: &AuthUser,
        id: Uuid,
        name: &str,
        industry: Option<&str>,
        website: Option<&str>,
    ) -> Result<Account, AppError> {
        self.repo
            .update(id, name, industry, website, policy::write_scope(actor))
            .await?
            .ok_or(AppError::NotFoundOrForbidden("Account"))
    }

    pub async fn delete(&self, actor: &AuthUser, id: Uuid) -> Result<(), AppError> {
        let deleted = self.repo.delete(id, policy::write_scope(actor)).await?;
        if !deleted {
            return Err(AppError::NotFoundOrForbidden("Account"));
        }
        Ok(())
    }
}
