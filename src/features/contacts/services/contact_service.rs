use sqlx::PgPool;
use uuid::Uuid;

use crate::core::database::map_unique_violation;
use crate::core::error::{AppError, Result};
use crate::features::contacts::dtos::CreateContactDto;
use crate::features::contacts::models::Contact;

fn not_found() -> AppError {
    AppError::NotFound("Contact not found".to_string())
}

/// Service for emergency contact operations
pub struct ContactService {
    pool: PgPool,
}

impl ContactService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, dto: CreateContactDto) -> Result<Contact> {
        let tags: Vec<String> = dto.tags.iter().map(|t| t.trim().to_string()).collect();

        let contact = sqlx::query_as::<_, Contact>(
            r#"
            INSERT INTO contacts (id, name, role, phone, email, tags)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, role, phone, email, tags, created_at, updated_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(dto.name.trim())
        .bind(dto.role.trim())
        .bind(dto.phone.trim())
        .bind(dto.email.trim())
        .bind(&tags)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(
                e,
                &[("contacts_email_key", "A contact with this email already exists")],
                "Contact already exists",
            )
        })?;

        tracing::info!("Created contact: {} ({})", contact.id, contact.name);

        Ok(contact)
    }

    pub async fn list(&self) -> Result<Vec<Contact>> {
        sqlx::query_as::<_, Contact>(
            r#"
            SELECT id, name, role, phone, email, tags, created_at, updated_at
            FROM contacts
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list contacts: {:?}", e);
            AppError::Database(e)
        })
    }

    pub async fn get(&self, id: Uuid) -> Result<Contact> {
        sqlx::query_as::<_, Contact>(
            r#"
            SELECT id, name, role, phone, email, tags, created_at, updated_at
            FROM contacts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get contact by id: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or_else(not_found)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete contact: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(not_found());
        }

        tracing::info!("Deleted contact: {}", id);

        Ok(())
    }
}
