use sqlx::PgPool;
use uuid::Uuid;

use crate::core::database::map_unique_violation;
use crate::core::error::{AppError, Result};
use crate::features::volunteers::dtos::{LoginVolunteerDto, RegisterVolunteerDto};
use crate::features::volunteers::models::Volunteer;
use crate::shared::password::{hash_password, verify_password};

const TEAM_NAME_TAKEN: &str = "Team name already exists";
const PHONE_TAKEN: &str = "Phone number already registered";

fn invalid_credentials() -> AppError {
    AppError::BadRequest("Invalid team name or password".to_string())
}

/// Service for volunteer team accounts
pub struct VolunteerService {
    pool: PgPool,
}

impl VolunteerService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn register(&self, dto: RegisterVolunteerDto) -> Result<Volunteer> {
        let team_name = dto.team_name.trim().to_string();
        let phone_number = dto.phone_number.trim().to_string();

        let (team_taken, phone_taken): (bool, bool) = sqlx::query_as(
            r#"
            SELECT
                EXISTS(SELECT 1 FROM volunteers WHERE team_name = $1),
                EXISTS(SELECT 1 FROM volunteers WHERE phone_number = $2)
            "#,
        )
        .bind(&team_name)
        .bind(&phone_number)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to check existing volunteers: {:?}", e);
            AppError::Database(e)
        })?;

        if team_taken {
            return Err(AppError::Conflict(TEAM_NAME_TAKEN.to_string()));
        }
        if phone_taken {
            return Err(AppError::Conflict(PHONE_TAKEN.to_string()));
        }

        let password_hash = hash_password(dto.password).await?;

        let volunteer = sqlx::query_as::<_, Volunteer>(
            r#"
            INSERT INTO volunteers (id, team_name, password_hash, phone_number)
            VALUES ($1, $2, $3, $4)
            RETURNING id, team_name, password_hash, phone_number, created_at, updated_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(&team_name)
        .bind(&password_hash)
        .bind(&phone_number)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(
                e,
                &[
                    ("volunteers_team_name_key", TEAM_NAME_TAKEN),
                    ("volunteers_phone_number_key", PHONE_TAKEN),
                ],
                "Volunteer already exists",
            )
        })?;

        tracing::info!(
            "Registered volunteer team: {} ({})",
            volunteer.id,
            volunteer.team_name
        );

        Ok(volunteer)
    }

    pub async fn login(&self, dto: LoginVolunteerDto) -> Result<Volunteer> {
        let volunteer = sqlx::query_as::<_, Volunteer>(
            r#"
            SELECT id, team_name, password_hash, phone_number, created_at, updated_at
            FROM volunteers
            WHERE team_name = $1
            "#,
        )
        .bind(dto.team_name.trim())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get volunteer by team name: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or_else(invalid_credentials)?;

        if !verify_password(dto.password, volunteer.password_hash.clone()).await? {
            return Err(invalid_credentials());
        }

        Ok(volunteer)
    }
}
