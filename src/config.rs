// src/config.rs

use sqlx::{postgres::PgPoolOptions, PgPool};
use std::{env, time::Duration};

use crate::{
    db::{
        AccountRepository, CommunicationRepository, ContactRepository, OpportunityRepository,
        ReportsRepository, TaskRepository, UserRepository,
    },
    services::{
        account_service::AccountService, auth::AuthService,
        communication_service::CommunicationService, contact_service::ContactService,
        opportunity_service::OpportunityService, reports_service::ReportsService,
        task_service::TaskService,
    },
};

// Tempo de vida padrão do token: 1 hora.
const DEFAULT_JWT_TTL_SECS: i64 = 3600;

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub auth_service: AuthService,
    pub account_service: AccountService,
    pub contact_service: ContactService,
    pub opportunity_service: OpportunityService,
    pub task_service: TaskService,
    pub communication_service: CommunicationService,
    pub reports_service: ReportsService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL deve ser definida");
        let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET deve ser definido");
        let jwt_ttl_secs = env::var("JWT_EXPIRES_IN_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_JWT_TTL_SECS);

        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        // --- Monta o gráfico de dependências ---
        let auth_service = AuthService::new(
            UserRepository::new(db_pool.clone()),
            jwt_secret,
            jwt_ttl_secs,
        );
        let account_service = AccountService::new(AccountRepository::new(db_pool.clone()));
        let contact_service = ContactService::new(ContactRepository::new(db_pool.clone()));
        let opportunity_service =
            OpportunityService::new(OpportunityRepository::new(db_pool.clone()));
        let task_service = TaskService::new(TaskRepository::new(db_pool.clone()));
        let communication_service =
            CommunicationService::new(CommunicationRepository::new(db_pool.clone()));
        let reports_service = ReportsService::new(ReportsRepository::new(db_pool.clone()));

        Ok(Self {
            db_pool,
            auth_service,
            account_service,
            contact_service,
            opportunity_service,
            task_service,
            communication_service,
            reports_service,
        })
    }
}
