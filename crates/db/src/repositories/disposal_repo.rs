//! Repository for the `disposals` table.

use sqlx::PgPool;
use waste_sorting_core::types::DbId;

use crate::models::disposal::{CreateDisposal, Disposal, UpdateDisposal};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, waste_id, method, instructions, location, last_updated";

/// Provides CRUD operations for disposal methods.
pub struct DisposalRepo;

impl DisposalRepo {
    /// Insert a new disposal method, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateDisposal) -> Result<Disposal, sqlx::Error> {
        let query = format!(
            "INSERT INTO disposals (waste_id, method, instructions, location, last_updated) \
             VALUES ($1, $2, $3, $4, NOW()) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Disposal>(&query)
            .bind(input.waste_id)
            .bind(&input.method)
            .bind(&input.instructions)
            .bind(&input.location)
            .fetch_one(pool)
            .await
    }

    /// Find a disposal method by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Disposal>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM disposals WHERE id = $1");
        sqlx::query_as::<_, Disposal>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all disposal methods ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<Disposal>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM disposals ORDER BY id");
        sqlx::query_as::<_, Disposal>(&query).fetch_all(pool).await
    }

    /// Update a disposal method. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDisposal,
    ) -> Result<Option<Disposal>, sqlx::Error> {
        let query = format!(
            "UPDATE disposals SET \
                waste_id = COALESCE($2, waste_id), \
                method = COALESCE($3, method), \
                instructions = COALESCE($4, instructions), \
                location = COALESCE($5, location), \
                last_updated = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Disposal>(&query)
            .bind(id)
            .bind(input.waste_id)
            .bind(&input.method)
            .bind(&input.instructions)
            .bind(&input.location)
            .fetch_optional(pool)
            .await
    }

    /// Delete a disposal method by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM disposals WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
