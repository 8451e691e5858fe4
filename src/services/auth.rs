// src/services/auth.rs

use bcrypt::{hash, verify};
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::{
    common::error::AppError,
    db::UserRepository,
    models::auth::{AuthUser, Claims, PublicUser, Role},
};

#[derive(Clone)]
pub struct AuthService {
    user_repo: UserRepository,
    jwt_secret: String,
    jwt_ttl_secs: i64,
}

impl AuthService {
    pub fn new(user_repo: UserRepository, jwt_secret: String, jwt_ttl_secs: i64) -> Self {
        Self {
            user_repo,
            jwt_secret,
            jwt_ttl_secs,
        }
    }

    /// Registra um usuário novo. Papel ausente vira vendedor.
    pub async fn register_user(
        &self,
        username: &str,
        password: &str,
        role: Option<Role>,
    ) -> Result<PublicUser, AppError> {
        if self.user_repo.find_by_username(username).await?.is_some() {
            return Err(AppError::UsernameTaken);
        }

        // O hashing é pesado; sai do runtime async.
        let password_clone = password.to_owned();
        let hashed_password =
            tokio::task::spawn_blocking(move || hash(&password_clone, bcrypt::DEFAULT_COST))
                .await
                .map_err(|e| anyhow::anyhow!("Falha na task de hashing: {}", e))??;

        self.user_repo
            .insert_user(username, &hashed_password, role.unwrap_or(Role::Vendedor))
            .await
    }

    /// Login. Usuário inexistente e senha errada respondem exatamente o
    /// mesmo erro — nada de dica sobre qual dos dois falhou.
    pub async fn login_user(&self, username: &str, password: &str) -> Result<String, AppError> {
        let user = self
            .user_repo
            .find_by_username(username)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        let password_clone = password.to_owned();
        let password_hash_clone = user.password_hash.clone();

        // Executa a verificação em um thread separado
        let is_password_valid =
            tokio::task::spawn_blocking(move || verify(&password_clone, &password_hash_clone))
                .await
                .map_err(|e| anyhow::anyhow!("Falha na task de verificação de senha: {}", e))??;

        if !is_password_valid {
            return Err(AppError::InvalidCredentials);
        }

        self.create_token(user.id, &user.username, user.role)
    }

    /// Decodifica e valida o token. A identidade vem inteira das claims,
    /// sem ida ao banco.
    pub fn validate_token(&self, token: &str) -> Result<AuthUser, AppError> {
        let validation = Validation::default();
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_ref()),
            &validation,
        )
        .map_err(|_| AppError::InvalidToken)?;

        let claims = token_data.claims;
        Ok(AuthUser {
            id: claims.id,
            username: claims.username,
            role: claims.role,
        })
    }

    pub async fn list_users(&self) -> Result<Vec<PublicUser>, AppError> {
        self.user_repo.list_users().await
    }

    fn create_token(
        &self,
        id: uuid::Uuid,
        username: &str,
        role: Role,
    ) -> Result<String, AppError> {
        let now = Utc::now();
        let expires_at = now + chrono::Duration::seconds(self.jwt_ttl_secs);

        let claims = Claims {
            id,
            username: username.to_owned(),
            role,
            exp: expires_at.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        Ok(encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::postgres::PgPoolOptions;
    use uuid::Uuid;

    // connect_lazy não abre conexão nenhuma; serve para montar o service
    // nos testes que só exercitam a lógica de token.
    fn service(secret: &str, ttl: i64) -> AuthService {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/crm_test")
            .unwrap();
        AuthService::new(UserRepository::new(pool), secret.to_string(), ttl)
    }

    #[tokio::test]
    async fn token_carrega_id_username_e_role() {
        let svc = service("segredo-de-teste", 3600);
        let id = Uuid::new_v4();

        let token = svc.create_token(id, "alice", Role::Vendedor).unwrap();
        let auth_user = svc.validate_token(&token).unwrap();

        assert_eq!(auth_user.id, id);
        assert_eq!(auth_user.username, "alice");
        assert_eq!(auth_user.role, Role::Vendedor);
    }

    #[tokio::test]
    async fn token_expirado_e_rejeitado() {
        // TTL bem no passado, além do leeway default do jsonwebtoken.
        let svc = service("segredo-de-teste", -3600);
        let token = svc
            .create_token(Uuid::new_v4(), "alice", Role::Gestor)
            .unwrap();

        assert!(matches!(
            svc.validate_token(&token),
            Err(AppError::InvalidToken)
        ));
    }

    #[tokio::test]
    async fn token_assinado_com_outro_segredo_e_rejeitado() {
        let svc_a = service("segredo-a", 3600);
        let svc_b = service("segredo-b", 3600);

        let token = svc_a
            .create_token(Uuid::new_v4(), "alice", Role::Vendedor)
            .unwrap();

        assert!(matches!(
            svc_b.validate_token(&token),
            Err(AppError::InvalidToken)
        ));
    }

    #[tokio::test]
    async fn token_malformado_e_rejeitado() {
        let svc = service("segredo-de-teste", 3600);
        assert!(matches!(
            svc.validate_token("nao-e-um-jwt"),
            Err(AppError::InvalidToken)
        ));
    }

    #[test]
    fn bcrypt_hash_e_verify_concordam() {
        // Custo mínimo só para o teste não demorar.
        let hashed = hash("password1", 4).unwrap();
        assert!(verify("password1", &hashed).unwrap());
        assert!(!verify("password2", &hashed).unwrap());
    }
}
