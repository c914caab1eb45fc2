//! Database seeding for terminology mappings.

use sqlx::PgPool;
use thiserror::Error;
use tracing::info;

use crate::models::{StoredMapping, TerminologyMapping};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Database seeder for inserting terminology mapping records.
pub struct Seeder {
    pool: PgPool,
}

impl Seeder {
    /// Creates a new seeder with the given database pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Applies pending migrations so the `terminology_maps` table exists.
    pub async fn migrate(&self) -> Result<(), SeedError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    /// Inserts all mapping records in one transaction.
    ///
    /// The commit is all-or-nothing: any failure rolls the whole batch back
    /// and no rows land. Row ids and `created_at` come from the server
    /// (`gen_random_uuid()`, `NOW()`).
    pub async fn seed_mappings(
        &self,
        mappings: &[TerminologyMapping],
    ) -> Result<usize, SeedError> {
        info!("Seeding {} terminology mappings...", mappings.len());

        let mut tx = self.pool.begin().await?;

        for mapping in mappings {
            sqlx::query(
                r#"
                INSERT INTO terminology_maps (
                    source_system, source_code, source_display,
                    target_system, target_code, target_display,
                    map_type, created_at
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, NOW())
                "#,
            )
            .bind(mapping.source_system.as_str())
            .bind(&mapping.source_code)
            .bind(&mapping.source_display)
            .bind(mapping.target_system.as_str())
            .bind(&mapping.target_code)
            .bind(&mapping.target_display)
            .bind(mapping.map_type.as_str())
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        info!("Seeded {} terminology mappings", mappings.len());
        Ok(mappings.len())
    }

    /// Total rows currently in `terminology_maps`.
    pub async fn count_mappings(&self) -> Result<i64, SeedError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM terminology_maps")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Fetches all stored mappings for a source code.
    pub async fn mappings_for_source_code(
        &self,
        source_code: &str,
    ) -> Result<Vec<StoredMapping>, SeedError> {
        let rows = sqlx::query_as::<_, StoredMapping>(
            r#"
            SELECT id, source_system, source_code, source_display,
                   target_system, target_code, target_display,
                   map_type, created_at
            FROM terminology_maps
            WHERE source_code = $1
            "#,
        )
        .bind(source_code)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Returns a reference to the pool for advanced usage.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
