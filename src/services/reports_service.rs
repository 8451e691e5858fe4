// src/services/reports_service.rs

use crate::{
    common::error::AppError,
    db::ReportsRepository,
    models::{
        auth::AuthUser,
        reports::{DashboardReport, SalesSummaryEntry},
    },
    services::policy,
};

#[derive(Clone)]
pub struct ReportsService {
    repo: ReportsRepository,
}

impl ReportsService {
    pub fn new(repo: ReportsRepository) -> Self {
        Self { repo }
    }

    /// Contagens por entidade, cada uma com o escopo do papel do chamador.
    /// São consultas independentes, sem join entre elas.
    pub async fn dashboard(&self, actor: &AuthUser) -> Result<DashboardReport, AppError> {
        let scope = policy::read_scope(actor);

        let contacts_count = self.repo.count_scoped("contacts", scope).await?;
        let opportunities_count = self.repo.count_scoped("opportunities", scope).await?;
        let tasks_count = self.repo.count_scoped("tasks", scope).await?;
        let communications_count = self.repo.count_scoped("communications", scope).await?;

        Ok(DashboardReport {
            contacts_count,
            opportunities_count,
            tasks_count,
            communications_count,
        })
    }

    /// Aberto a qualquer usuário autenticado (comportamento observado,
    /// questão em aberto no DESIGN.md).
    pub async fn sales_summary(&self) -> Result<Vec<SalesSummaryEntry>, AppError> {
        self.repo.sales_summary().await
    }
}
