// src/docs.rs

use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::register,
        handlers::auth::login,
        handlers::auth::list_users,

        // --- Accounts ---
        handlers::accounts::create_account,
        handlers::accounts::list_accounts,
        handlers::accounts::update_account,
        handlers::accounts::delete_account,

        // --- Contacts ---
        handlers::contacts::create_contact,
        handlers::contacts::list_contacts,
        handlers::contacts::update_contact,
        handlers::contacts::update_lead_score,
        handlers::contacts::delete_contact,

        // --- Opportunities ---
        handlers::opportunities::create_opportunity,
        handlers::opportunities::list_opportunities,
        handlers::opportunities::update_stage,
        handlers::opportunities::update_parameters,
        handlers::opportunities::finalize_opportunity,
        handlers::opportunities::delete_opportunity,

        // --- Tasks ---
        handlers::tasks::create_task,
        handlers::tasks::create_follow_up,
        handlers::tasks::list_tasks,
        handlers::tasks::update_task,
        handlers::tasks::delete_task,

        // --- Communications ---
        handlers::communications::create_communication,
        handlers::communications::list_communications,
        handlers::communications::update_communication,
        handlers::communications::delete_communication,

        // --- Reports ---
        handlers::reports::dashboard,
        handlers::reports::sales_summary,
    ),
    components(
        schemas(
            models::auth::Role,
            models::auth::PublicUser,
            models::auth::RegisterUserPayload,
            models::auth::LoginUserPayload,
            models::auth::AuthResponse,
            models::account::Account,
            models::account::CreateAccountPayload,
            models::account::UpdateAccountPayload,
            models::contact::Contact,
            models::contact::ContactWithCreator,
            models::contact::CreateContactPayload,
            models::contact::UpdateContactPayload,
            models::contact::UpdateLeadScorePayload,
            models::opportunity::Opportunity,
            models::opportunity::RevenueRecord,
            models::opportunity::CreateOpportunityPayload,
            models::opportunity::UpdateStagePayload,
            models::opportunity::UpdateOpportunityParametersPayload,
            models::opportunity::FinalizeResponse,
            models::task::Task,
            models::task::CreateTaskPayload,
            models::task::UpdateTaskPayload,
            models::task::CreateFollowUpPayload,
            models::communication::Communication,
            models::communication::CommunicationWithCreator,
            models::communication::CreateCommunicationPayload,
            models::communication::UpdateCommunicationPayload,
            models::reports::DashboardReport,
            models::reports::SalesSummaryEntry,
        )
    ),
    tags(
        (name = "Auth", description = "Registro, login e usuários"),
        (name = "Accounts", description = "Empresas"),
        (name = "Contacts", description = "Contatos e leads"),
        (name = "Opportunities", description = "Pipeline de vendas e finalização"),
        (name = "Tasks", description = "Tarefas e follow-ups"),
        (name = "Communications", description = "Histórico de comunicações"),
        (name = "Reports", description = "Dashboard e resumo de vendas"),
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    pub fn with_security() -> utoipa::openapi::OpenApi {
        let mut doc = Self::openapi();
        if let Some(components) = doc.components.as_mut() {
            components.add_security_scheme(
                "api_jwt",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
            );
        }
        doc
    }
}
