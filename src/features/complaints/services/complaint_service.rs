use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::complaints::dtos::{CreateComplaintDto, MarkComplaintViewedDto};
use crate::features::complaints::models::{Complaint, ComplaintStatus};

const COMPLAINT_COLUMNS: &str =
    "id, title, description, username, status, viewed, created_at, updated_at";

fn not_found() -> AppError {
    AppError::NotFound("Complaint not found".to_string())
}

/// Service for complaint operations
pub struct ComplaintService {
    pool: PgPool,
}

impl ComplaintService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// File a new complaint, starting as `Pending` and unviewed
    pub async fn create(&self, dto: CreateComplaintDto) -> Result<Complaint> {
        let complaint = sqlx::query_as::<_, Complaint>(&format!(
            r#"
            INSERT INTO complaints (id, title, description, username)
            VALUES ($1, $2, $3, $4)
            RETURNING {}
            "#,
            COMPLAINT_COLUMNS
        ))
        .bind(Uuid::now_v7())
        .bind(dto.title.trim())
        .bind(dto.description.trim())
        .bind(dto.username.trim())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create complaint: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Created complaint: {} by {}",
            complaint.id,
            complaint.username
        );

        Ok(complaint)
    }

    /// List complaints, optionally only those filed by `username`
    pub async fn list(&self, username: Option<&str>) -> Result<Vec<Complaint>> {
        sqlx::query_as::<_, Complaint>(&format!(
            r#"
            SELECT {}
            FROM complaints
            WHERE ($1::TEXT IS NULL OR username = $1)
            ORDER BY created_at, id
            "#,
            COMPLAINT_COLUMNS
        ))
        .bind(username)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list complaints: {:?}", e);
            AppError::Database(e)
        })
    }

    pub async fn get(&self, id: Uuid) -> Result<Complaint> {
        sqlx::query_as::<_, Complaint>(&format!(
            "SELECT {} FROM complaints WHERE id = $1",
            COMPLAINT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get complaint by id: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or_else(not_found)
    }

    pub async fn update_status(&self, id: Uuid, status: ComplaintStatus) -> Result<Complaint> {
        let complaint = sqlx::query_as::<_, Complaint>(&format!(
            r#"
            UPDATE complaints
            SET status = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            COMPLAINT_COLUMNS
        ))
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update complaint status: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or_else(not_found)?;

        tracing::info!("Complaint {} status set to {:?}", id, status);

        Ok(complaint)
    }

    /// Apply the optional `viewed` and `status` changes from the view patch
    pub async fn mark_viewed(&self, id: Uuid, dto: MarkComplaintViewedDto) -> Result<Complaint> {
        sqlx::query_as::<_, Complaint>(&format!(
            r#"
            UPDATE complaints
            SET viewed = COALESCE($2, viewed),
                status = COALESCE($3, status),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            COMPLAINT_COLUMNS
        ))
        .bind(id)
        .bind(dto.viewed)
        .bind(dto.status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to mark complaint viewed: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or_else(not_found)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM complaints WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete complaint: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(not_found());
        }

        tracing::info!("Deleted complaint: {}", id);

        Ok(())
    }
}
