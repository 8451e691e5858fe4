// src/models/auth.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// Papéis do sistema. Mapeia o CREATE TYPE user_role do banco.
// "gestor" enxerga e mexe em tudo; "vendedor" só no que é dele.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Gestor,
    Vendedor,
}

// Representa um usuário vindo do banco de dados
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,

    #[serde(skip_serializing)] // nunca sai na API
    pub password_hash: String,

    pub role: Role,
    pub created_at: DateTime<Utc>,
}

// Projeção pública de um usuário (register e GET /auth/users).
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct PublicUser {
    pub id: Uuid,
    pub username: String,
    pub role: Role,
}

// Identidade embutida no token, disponível nos handlers via extractor.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: Uuid,
    pub username: String,
    pub role: Role,
}

// Dados para registro de um novo usuário
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterUserPayload {
    #[validate(length(min = 1, message = "Username is required"))]
    #[schema(example = "alice")]
    pub username: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    #[schema(example = "password1")]
    pub password: String,

    // Ausente => vendedor
    pub role: Option<Role>,
}

// Dados para login
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginUserPayload {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

// Resposta de autenticação com o token
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    pub token: String,
}

// Estrutura de dados ("claims") dentro do JWT
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub id: Uuid,
    pub username: String,
    pub role: Role,
    pub exp: usize, // Expiration time (quando o token expira)
    pub iat: usize, // Issued At (quando o token foi criado)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registro_exige_senha_com_seis_caracteres() {
        let payload = RegisterUserPayload {
            username: "alice".into(),
            password: "12345".into(),
            role: None,
        };
        let err = payload.validate().unwrap_err();
        assert!(err.field_errors().contains_key("password"));

        let ok = RegisterUserPayload {
            username: "alice".into(),
            password: "password1".into(),
            role: None,
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn role_serializa_em_minusculas() {
        assert_eq!(serde_json::to_string(&Role::Gestor).unwrap(), "\"gestor\"");
        assert_eq!(
            serde_json::from_str::<Role>("\"vendedor\"").unwrap(),
            Role::Vendedor
        );
    }

    #[test]
    fn password_hash_nao_aparece_no_json() {
        let user = User {
            id: Uuid::new_v4(),
            username: "alice".into(),
            password_hash: "$2b$12$abc".into(),
            role: Role::Vendedor,
            created_at: Utc::now(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("password_hash"));
        assert!(!json.contains("$2b$12$abc"));
    }
}
