use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::camps::dtos::CreateCampDto;
use crate::features::camps::models::Camp;

/// Service for relief camp operations
pub struct CampService {
    pool: PgPool,
}

impl CampService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a camp; the DTO must already be validated
    pub async fn create(&self, dto: CreateCampDto) -> Result<Camp> {
        let capacity = dto
            .capacity
            .ok_or_else(|| AppError::Validation("All fields are required".to_string()))?;

        let camp = sqlx::query_as::<_, Camp>(
            r#"
            INSERT INTO camps (id, name, location, capacity)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, location, capacity, created_at, updated_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(dto.name.trim())
        .bind(dto.location.trim())
        .bind(capacity)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create camp: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Created camp: {} ({})", camp.id, camp.name);

        Ok(camp)
    }

    pub async fn list(&self) -> Result<Vec<Camp>> {
        sqlx::query_as::<_, Camp>(
            r#"
            SELECT id, name, location, capacity, created_at, updated_at
            FROM camps
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list camps: {:?}", e);
            AppError::Database(e)
        })
    }

    /// Delete a camp, returning the removed row
    pub async fn delete(&self, id: Uuid) -> Result<Camp> {
        let camp = sqlx::query_as::<_, Camp>(
            r#"
            DELETE FROM camps
            WHERE id = $1
            RETURNING id, name, location, capacity, created_at, updated_at
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to delete camp: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound("Camp not found".to_string()))?;

        tracing::info!("Deleted camp: {}", id);

        Ok(camp)
    }
}
