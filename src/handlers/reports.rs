// src/handlers/reports.rs

use axum::{extract::State, Json};

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::reports::{DashboardReport, SalesSummaryEntry},
};

// GET /api/reports/dashboard
#[utoipa::path(
    get,
    path = "/api/reports/dashboard",
    tag = "Reports",
    responses(
        (status = 200, description = "Contagens escopadas pelo papel do chamador", body = DashboardReport)
    ),
    security(("api_jwt" = []))
)]
pub async fn dashboard(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<Json<DashboardReport>, AppError> {
    let report = app_state.reports_service.dashboard(&user).await?;
    Ok(Json(report))
}

// GET /api/reports/sales-summary — receita mensal por vendedor.
#[utoipa::path(
    get,
    path = "/api/reports/sales-summary",
    tag = "Reports",
    responses(
        (status = 200, description = "Soma e contagem por vendedor x mês, mês mais recente primeiro", body = Vec<SalesSummaryEntry>)
    ),
    security(("api_jwt" = []))
)]
pub async fn sales_summary(
    State(app_state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
) -> Result<Json<Vec<SalesSummaryEntry>>, AppError> {
    let entries = app_state.reports_service.sales_summary().await?;
    Ok(Json(entries))
}
