use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for a volunteer team
#[derive(Debug, Clone, FromRow)]
pub struct Volunteer {
    pub id: Uuid,
    pub team_name: String,
    pub password_hash: String,
    pub phone_number: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
