//! Repository for the `recycling_tips` table.

use sqlx::PgPool;
use waste_sorting_core::types::DbId;

use crate::models::recycling_tip::{CreateRecyclingTip, RecyclingTip, UpdateRecyclingTip};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, tip, category_id, waste_id, last_updated";

/// Provides CRUD operations for recycling tips.
pub struct RecyclingTipRepo;

impl RecyclingTipRepo {
    /// Insert a new recycling tip, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateRecyclingTip,
    ) -> Result<RecyclingTip, sqlx::Error> {
        let query = format!(
            "INSERT INTO recycling_tips (title, tip, category_id, waste_id, last_updated) \
             VALUES ($1, $2, $3, $4, NOW()) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RecyclingTip>(&query)
            .bind(&input.title)
            .bind(&input.tip)
            .bind(input.category_id)
            .bind(input.waste_id)
            .fetch_one(pool)
            .await
    }

    /// Find a recycling tip by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<RecyclingTip>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM recycling_tips WHERE id = $1");
        sqlx::query_as::<_, RecyclingTip>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all recycling tips ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<RecyclingTip>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM recycling_tips ORDER BY id");
        sqlx::query_as::<_, RecyclingTip>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update a recycling tip. Only non-`None` fields are applied, so a tip
    /// cannot be detached from its category or waste item through this call.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateRecyclingTip,
    ) -> Result<Option<RecyclingTip>, sqlx::Error> {
        let query = format!(
            "UPDATE recycling_tips SET \
                title = COALESCE($2, title), \
                tip = COALESCE($3, tip), \
                category_id = COALESCE($4, category_id), \
                waste_id = COALESCE($5, waste_id), \
                last_updated = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RecyclingTip>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.tip)
            .bind(input.category_id)
            .bind(input.waste_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a recycling tip by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM recycling_tips WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
