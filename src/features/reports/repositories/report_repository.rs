use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::reports::models::{NewReport, Report};

/// Persistence boundary for report records
#[async_trait]
pub trait ReportRepository: Send + Sync {
    async fn insert(&self, report: NewReport) -> Result<Report>;

    /// All reports, newest `created_at` first
    async fn list_newest_first(&self) -> Result<Vec<Report>>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Report>>;

    /// Remove a report, returning whether a row was deleted
    async fn delete(&self, id: Uuid) -> Result<bool>;
}

/// Postgres-backed report repository
pub struct PgReportRepository {
    pool: PgPool,
}

impl PgReportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportRepository for PgReportRepository {
    async fn insert(&self, report: NewReport) -> Result<Report> {
        sqlx::query_as::<_, Report>(
            r#"
            INSERT INTO reports (id, report_type, location, description, images, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, report_type, location, description, images, created_at
            "#,
        )
        .bind(report.id)
        .bind(report.report_type)
        .bind(&report.location)
        .bind(&report.description)
        .bind(&report.images)
        .bind(report.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert report: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn list_newest_first(&self) -> Result<Vec<Report>> {
        sqlx::query_as::<_, Report>(
            r#"
            SELECT id, report_type, location, description, images, created_at
            FROM reports
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list reports: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Report>> {
        sqlx::query_as::<_, Report>(
            r#"
            SELECT id, report_type, location, description, images, created_at
            FROM reports
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get report by id: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM reports WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete report: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
