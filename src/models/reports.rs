// src/models/reports.rs

use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

// Contagens do dashboard, cada uma escopada pelo papel do chamador.
// camelCase aqui porque o dashboard sempre respondeu assim, ao contrário
// do resto da API.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReport {
    pub contacts_count: i64,
    pub opportunities_count: i64,
    pub tasks_count: i64,
    pub communications_count: i64,
}

// Uma linha do resumo de vendas: vendedor x mês ("YYYY-MM").
#[derive(Debug, Serialize, sqlx::FromRow, ToSchema)]
pub struct SalesSummaryEntry {
    pub user_id: Uuid,
    pub month: String,
    #[schema(value_type = f64)]
    pub total_value: Decimal,
    pub opportunities_count: i64,
}
