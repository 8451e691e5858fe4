// src/services/communication_service.rs

use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::CommunicationRepository,
    models::{
        auth::AuthUser,
        communication::{Communication, CommunicationWithCreator},
    },
};

// Atenção: pela última revisão observada do sistema, listar/atualizar/deletar
// comunicações NÃO têm filtro de posse — qualquer usuário autenticado mexe em
// qualquer registro. Só o create carimba o dono. Mantido como observado
// (questão em aberto registrada no DESIGN.md).
#[derive(Clone)]
pub struct CommunicationService {
    repo: CommunicationRepository,
}

impl CommunicationService {
    pub fn new(repo: CommunicationRepository) -> Self {
        Self { repo }
    }

    pub async fn create(
        &self,
        actor: &AuthUser,
        kind: &str,
        content: &str,
        contact_id: Uuid,
    ) -> Result<Communication, AppError> {
        self.repo.insert(kind, content, contact_id, actor.id).await
    }

    pub async fn list(
        &self,
        contact_id: Option<Uuid>,
    ) -> Result<Vec<CommunicationWithCreator>, AppError> {
        self.repo.find_all(contact_id).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        kind: &str,
        content: &str,
    ) -> Result<Communication, AppError> {
        self.repo
            .update(id, kind, content)
            .await?
            .ok_or(AppError::NotFoundOrForbidden("Communication"))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let deleted = self.repo.delete(id).await?;
        if !deleted {
            return Err(AppError::NotFoundOrForbidden("Communication"));
        }
        Ok(())
    }
}
