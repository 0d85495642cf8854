//! # Registration Repository
//!
//! Database operations for the `registrations` table.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use cadastro_core::document::mask;
use cadastro_core::{NewRegistration, Registration};

use super::RegistrationStore;
use crate::error::{DbError, DbResult};

/// Metadata about a freshly inserted row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertedRegistration {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub rows_affected: u64,
}

/// Repository for registration database operations.
#[derive(Debug, Clone)]
pub struct RegistrationRepository {
    pool: SqlitePool,
}

impl RegistrationRepository {
    /// Creates a new RegistrationRepository.
    pub fn new(pool: SqlitePool) -> Self {
        RegistrationRepository { pool }
    }

    /// Inserts a normalized registration with a fresh UUID.
    pub async fn insert(&self, record: &NewRegistration) -> DbResult<InsertedRegistration> {
        let id = Uuid::new_v4().to_string();
        let created_at = Utc::now();

        debug!(
            id = %id,
            cpf = %mask(&record.cpf),
            cnpj = %mask(&record.cnpj),
            "Inserting registration"
        );

        let result = sqlx::query(
            r#"
            INSERT INTO registrations (
                id, name, email, cell_phone, telephone, cpf, cnpj,
                cep, state, city, public_place, neighborhood, number, complement,
                created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)
            "#,
        )
        .bind(&id)
        .bind(&record.name)
        .bind(&record.email)
        .bind(&record.cell_phone)
        .bind(&record.telephone)
        .bind(&record.cpf)
        .bind(&record.cnpj)
        .bind(&record.cep)
        .bind(&record.state)
        .bind(&record.city)
        .bind(&record.public_place)
        .bind(&record.neighborhood)
        .bind(&record.number)
        .bind(&record.complement)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        Ok(InsertedRegistration {
            id,
            created_at,
            rows_affected: result.rows_affected(),
        })
    }

    /// Gets a registration by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Registration))` - found
    /// * `Ok(None)` - no such ID
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Registration>> {
        let row = sqlx::query_as::<_, Registration>(
            r#"
            SELECT
                id, name, email, cell_phone, telephone, cpf, cnpj,
                cep, state, city, public_place, neighborhood, number, complement,
                created_at
            FROM registrations
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Gets a registration by ID, failing with `NotFound` when absent.
    pub async fn require(&self, id: &str) -> DbResult<Registration> {
        self.get_by_id(id)
            .await?
            .ok_or_else(|| DbError::not_found("Registration", id))
    }

    /// Lists the most recent registrations, newest first.
    pub async fn list_recent(&self, limit: u32) -> DbResult<Vec<Registration>> {
        let rows = sqlx::query_as::<_, Registration>(
            r#"
            SELECT
                id, name, email, cell_phone, telephone, cpf, cnpj,
                cep, state, city, public_place, neighborhood, number, complement,
                created_at
            FROM registrations
            ORDER BY created_at DESC
            LIMIT ?1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Counts all registrations.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM registrations")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

#[async_trait]
impl RegistrationStore for RegistrationRepository {
    async fn insert(&self, record: &NewRegistration) -> DbResult<InsertedRegistration> {
        RegistrationRepository::insert(self, record).await
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
