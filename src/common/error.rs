use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// Nosso tipo de erro central, com `thiserror` para melhor ergonomia.
// Cada variante mapeia para um status HTTP em `IntoResponse`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Username já existe")]
    UsernameTaken,

    #[error("Credenciais inválidas")]
    InvalidCredentials,

    #[error("Token inválido")]
    InvalidToken,

    // Ação reservada a gestores tentada por outro papel.
    #[error("Acesso negado: {0}")]
    Forbidden(&'static str),

    // Registro inexistente OU pertencente a outro usuário. As duas situações
    // respondem o mesmo 404 para não vazar a existência do registro.
    #[error("Registro não encontrado ou não autorizado: {0}")]
    NotFoundOrForbidden(&'static str),

    #[error("Registro não encontrado: {0}")]
    NotFound(&'static str),

    // Pré-condições do finalize de oportunidade.
    #[error("Estado inválido: {0}")]
    InvalidState(&'static str),

    #[error("Oportunidade já finalizada")]
    AlreadyFinalized,

    // Variante para erros de banco de dados
    #[error("Erro de banco de dados")]
    DatabaseError(#[from] sqlx::Error),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),

    #[error("Erro de Bcrypt: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),

    #[error("Erro de JWT: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // Retorna todos os detalhes da validação, campo a campo.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "One or more fields are invalid",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::UsernameTaken => {
                (StatusCode::BAD_REQUEST, "Username already exists".to_string())
            }
            AppError::InvalidCredentials => {
                (StatusCode::BAD_REQUEST, "Invalid credentials".to_string())
            }
            AppError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                "Invalid or missing authentication token".to_string(),
            ),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg.to_string()),
            AppError::NotFoundOrForbidden(what) => (
                StatusCode::NOT_FOUND,
                format!("{} not found or not authorized", what),
            ),
            AppError::NotFound(what) => {
                (StatusCode::NOT_FOUND, format!("{} not found", what))
            }
            AppError::InvalidState(msg) => (StatusCode::BAD_REQUEST, msg.to_string()),
            AppError::AlreadyFinalized => (
                StatusCode::BAD_REQUEST,
                "Opportunity already finalized".to_string(),
            ),

            // Todos os outros erros (DatabaseError, InternalServerError...) viram 500.
            // O `tracing` registra a mensagem detalhada; o cliente recebe algo genérico.
            ref e => {
                tracing::error!("Erro interno do servidor: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred".to_string(),
                )
            }
        };

        // Resposta padrão para erros simples que só têm uma mensagem.
        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nao_encontrado_e_nao_autorizado_respondem_o_mesmo_404() {
        let a = AppError::NotFoundOrForbidden("Contact").into_response();
        let b = AppError::NotFoundOrForbidden("Contact").into_response();
        assert_eq!(a.status(), StatusCode::NOT_FOUND);
        assert_eq!(a.status(), b.status());
    }

    #[test]
    fn status_por_variante() {
        assert_eq!(
            AppError::InvalidToken.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::Forbidden("Not authorized to delete opportunity")
                .into_response()
                .status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::AlreadyFinalized.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::InvalidCredentials.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::InternalServerError(anyhow::anyhow!("boom"))
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
