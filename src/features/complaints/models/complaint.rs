use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

/// Complaint status enum matching database
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "complaint_status", rename_all = "snake_case")]
pub enum ComplaintStatus {
    #[default]
    Pending,
    Resolved,
}

/// Database model for complaint
#[derive(Debug, Clone, FromRow)]
pub struct Complaint {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub username: String,
    pub status: ComplaintStatus,
    pub viewed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
