use sqlx::PgPool;
use uuid::Uuid;

use crate::core::database::map_unique_violation;
use crate::core::error::{AppError, Result};
use crate::features::users::dtos::{LoginUserDto, RegisterUserDto};
use crate::features::users::models::User;
use crate::shared::password::{hash_password, verify_password};

const USERNAME_TAKEN: &str = "Username already exists";
const PHONE_TAKEN: &str = "Phone number already registered";

fn invalid_credentials() -> AppError {
    AppError::BadRequest("Invalid credentials".to_string())
}

/// Service for citizen user accounts
pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Register a user; username and phone number must both be unused
    pub async fn register(&self, dto: RegisterUserDto) -> Result<User> {
        let username = dto.username.trim().to_string();
        let phone_number = dto.phone_number.trim().to_string();
        let age = dto
            .age
            .ok_or_else(|| AppError::Validation("Valid age is required".to_string()))?;

        let (username_taken, phone_taken): (bool, bool) = sqlx::query_as(
            r#"
            SELECT
                EXISTS(SELECT 1 FROM users WHERE username = $1),
                EXISTS(SELECT 1 FROM users WHERE phone_number = $2)
            "#,
        )
        .bind(&username)
        .bind(&phone_number)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to check existing users: {:?}", e);
            AppError::Database(e)
        })?;

        if username_taken {
            return Err(AppError::Conflict(USERNAME_TAKEN.to_string()));
        }
        if phone_taken {
            return Err(AppError::Conflict(PHONE_TAKEN.to_string()));
        }

        let password_hash = hash_password(dto.password).await?;

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, username, password_hash, gender, age, address, phone_number)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, username, password_hash, gender, age, address, phone_number,
                      created_at, updated_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(&username)
        .bind(&password_hash)
        .bind(dto.gender.trim())
        .bind(age)
        .bind(dto.address.trim())
        .bind(&phone_number)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(
                e,
                &[
                    ("users_username_key", USERNAME_TAKEN),
                    ("users_phone_number_key", PHONE_TAKEN),
                ],
                "User already exists",
            )
        })?;

        tracing::info!("Registered user: {} ({})", user.id, user.username);

        Ok(user)
    }

    /// Check credentials and return the matching user
    pub async fn login(&self, dto: LoginUserDto) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password_hash, gender, age, address, phone_number,
                   created_at, updated_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(dto.username.trim())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get user by username: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or_else(invalid_credentials)?;

        if !verify_password(dto.password, user.password_hash.clone()).await? {
            tracing::debug!("Password mismatch for user {}", user.id);
            return Err(invalid_credentials());
        }

        Ok(user)
    }
}
