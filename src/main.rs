// src/main.rs

use axum::{
    middleware as axum_middleware,
    routing::{get, post, put},
    Router,
};
use tokio::net::TcpListener;
use utoipa_swagger_ui::SwaggerUi;

mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod middleware;
mod models;
mod services;

use crate::config::AppState;
use crate::middleware::auth::auth_guard;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    // Roda as migrações do SQLx na inicialização
    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    // Rotas de autenticação (públicas)
    let auth_routes = Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login));

    // GET /auth/users é protegida, ao contrário de register/login
    let user_routes = Router::new()
        .route("/users", get(handlers::auth::list_users))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let account_routes = Router::new()
        .route(
            "/",
            post(handlers::accounts::create_account).get(handlers::accounts::list_accounts),
        )
        .route(
            "/{id}",
            put(handlers::accounts::update_account).delete(handlers::accounts::delete_account),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let contact_routes = Router::new()
        .route(
            "/",
            post(handlers::contacts::create_contact).get(handlers::contacts::list_contacts),
        )
        .route(
            "/{id}",
            put(handlers::contacts::update_contact).delete(handlers::contacts::delete_contact),
        )
        .route("/{id}/lead-score", put(handlers::contacts::update_lead_score))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let opportunity_routes = Router::new()
        .route(
            "/",
            post(handlers::opportunities::create_opportunity)
                .get(handlers::opportunities::list_opportunities),
        )
        .route(
            "/{id}",
            put(handlers::opportunities::update_stage)
                .delete(handlers::opportunities::delete_opportunity),
        )
        .route(
            "/{id}/parameters",
            put(handlers::opportunities::update_parameters),
        )
        .route(
            "/{id}/finalize",
            put(handlers::opportunities::finalize_opportunity),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let task_routes = Router::new()
        .route(
            "/",
            post(handlers::tasks::create_task).get(handlers::tasks::list_tasks),
        )
        .route("/follow-up", post(handlers::tasks::create_follow_up))
        .route(
            "/{id}",
            put(handlers::tasks::update_task).delete(handlers::tasks::delete_task),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let communication_routes = Router::new()
        .route(
            "/",
            post(handlers::communications::create_communication)
                .get(handlers::communications::list_communications),
        )
        .route(
            "/{id}",
            put(handlers::communications::update_communication)
                .delete(handlers::communications::delete_communication),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let report_routes = Router::new()
        .route("/dashboard", get(handlers::reports::dashboard))
        .route("/sales-summary", get(handlers::reports::sales_summary))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    // Combina tudo no router principal
    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/auth", auth_routes)
        .nest("/api/auth", user_routes)
        .nest("/api/accounts", account_routes)
        .nest("/api/contacts", contact_routes)
        .nest("/api/opportunities", opportunity_routes)
        .nest("/api/tasks", task_routes)
        .nest("/api/communications", communication_routes)
        .nest("/api/reports", report_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", docs::ApiDoc::with_security()))
        .with_state(app_state);

    // Inicia o servidor
    let port = std::env::var("PORT").unwrap_or_else(|_| "5000".to_string());
    let addr = format!("0.0.0.0:{port}");
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", addr);
    axum::serve(listener, app).await.expect("Erro no servidor Axum");
}
