use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for a relief camp
#[derive(Debug, Clone, FromRow)]
pub struct Camp {
    pub id: Uuid,
    pub name: String,
    pub location: String,
    pub capacity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
