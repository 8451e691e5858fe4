// src/db/user_repo.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::auth::{PublicUser, Role, User},
};

#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password_hash, role, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn insert_user(
        &self,
        username: &str,
        password_hash: &str,
        role: Role,
    ) -> Result<PublicUser, AppError> {
        let user = sqlx::query_as::<_, PublicUser>(
            r#"
            INSERT INTO users (username, password_hash, role)
            VALUES ($1, $2, $3)
            RETURNING id, username, role
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .bind(role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            // Corrida entre o pre-check e o INSERT: o UNIQUE do banco decide.
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::UsernameTaken;
                }
            }
            e.into()
        })?;

        Ok(user)
    }

    /// Todos os usuários, sem o hash de senha.
    pub async fn list_users(&self) -> Result<Vec<PublicUser>, AppError> {
        let users = sqlx::query_as::<_, PublicUser>(
            r#"
            SELECT id, username, role
            FROM users
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }
}
