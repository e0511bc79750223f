//! Repository for the `waste` table and its joined read models.

use sqlx::PgPool;
use waste_sorting_core::aggregate::{aggregate, aggregate_one};
use waste_sorting_core::types::DbId;
use waste_sorting_core::validation::normalize_category_name;

use crate::models::waste::{
    CreateWaste, UpdateWaste, Waste, WasteDisposalRow, WasteOverview, WasteTipRow,
    WasteWithCategory, WasteWithTips,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, category_id, last_updated";

/// Projection of `waste w JOIN categories c`.
const CATEGORY_JOIN_COLUMNS: &str = "w.id, w.name, w.description, \
    c.name AS category_name, \
    c.description AS category_description";

/// Aliased projection of `waste w JOIN categories c LEFT JOIN disposals d`.
const DISPOSAL_JOIN_COLUMNS: &str = "w.id AS waste_id, \
    w.name AS waste_name, \
    w.description AS waste_description, \
    c.name AS category_name, \
    c.description AS category_description, \
    d.id AS disposal_id, \
    d.waste_id AS disposal_waste_id, \
    d.method AS disposal_method, \
    d.instructions AS disposal_instructions, \
    d.location AS disposal_location, \
    d.last_updated AS disposal_last_updated";

/// Aliased projection of `waste w JOIN categories c LEFT JOIN recycling_tips rt`.
const TIP_JOIN_COLUMNS: &str = "w.id AS waste_id, \
    w.name AS waste_name, \
    w.description AS waste_description, \
    c.name AS category_name, \
    rt.id AS tip_id, \
    rt.title AS tip_title, \
    rt.tip AS tip_body, \
    rt.category_id AS tip_category_id, \
    rt.last_updated AS tip_last_updated";

/// Optional filter on the (lowercase) category name. `$1` is `NULL` for no filter.
const CATEGORY_FILTER: &str = "($1::TEXT IS NULL OR c.name = $1)";

/// Provides CRUD operations and joined reads for waste items.
///
/// Reads always carry the category, so listing and lookup go through
/// [`WasteRepo::list_with_category`] and [`WasteRepo::find_with_category_by_id`].
pub struct WasteRepo;

impl WasteRepo {
    /// Insert a new waste item, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateWaste) -> Result<Waste, sqlx::Error> {
        let query = format!(
            "INSERT INTO waste (name, description, category_id, last_updated) \
             VALUES ($1, $2, $3, NOW()) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Waste>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.category_id)
            .fetch_one(pool)
            .await
    }

    /// Update a waste item. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateWaste,
    ) -> Result<Option<Waste>, sqlx::Error> {
        let query = format!(
            "UPDATE waste SET \
                name = COALESCE($2, name), \
                description = COALESCE($3, description), \
                category_id = COALESCE($4, category_id), \
                last_updated = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Waste>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.category_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a waste item by ID. Its disposals and tips are removed by cascade.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM waste WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Waste with category
    // -----------------------------------------------------------------------

    /// List waste items with their category, optionally filtered by category name.
    ///
    /// The filter is case-insensitive.
    pub async fn list_with_category(
        pool: &PgPool,
        category: Option<&str>,
    ) -> Result<Vec<WasteWithCategory>, sqlx::Error> {
        let query = format!(
            "SELECT {CATEGORY_JOIN_COLUMNS} \
             FROM waste w \
             JOIN categories c ON c.id = w.category_id \
             WHERE {CATEGORY_FILTER} \
             ORDER BY w.id"
        );
        sqlx::query_as::<_, WasteWithCategory>(&query)
            .bind(category.map(normalize_category_name))
            .fetch_all(pool)
            .await
    }

    /// Find a waste item with its category by ID.
    pub async fn find_with_category_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<WasteWithCategory>, sqlx::Error> {
        let query = format!(
            "SELECT {CATEGORY_JOIN_COLUMNS} \
             FROM waste w \
             JOIN categories c ON c.id = w.category_id \
             WHERE w.id = $1"
        );
        sqlx::query_as::<_, WasteWithCategory>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    // -----------------------------------------------------------------------
    // Overview (waste + disposals)
    // -----------------------------------------------------------------------

    /// List waste overviews (item, category and disposal methods), optionally
    /// filtered by category name.
    pub async fn list_overviews(
        pool: &PgPool,
        category: Option<&str>,
    ) -> Result<Vec<WasteOverview>, sqlx::Error> {
        let query = format!(
            "SELECT {DISPOSAL_JOIN_COLUMNS} \
             FROM waste w \
             JOIN categories c ON c.id = w.category_id \
             LEFT JOIN disposals d ON d.waste_id = w.id \
             WHERE {CATEGORY_FILTER} \
             ORDER BY w.id, d.id"
        );
        let rows = sqlx::query_as::<_, WasteDisposalRow>(&query)
            .bind(category.map(normalize_category_name))
            .fetch_all(pool)
            .await?;

        let row_count = rows.len();
        let overviews = aggregate(rows);
        tracing::debug!(row_count, waste = overviews.len(), "Aggregated waste disposals");
        Ok(overviews)
    }

    /// Find a single waste overview by ID.
    ///
    /// Returns `None` if no waste item with the given `id` exists.
    pub async fn find_overview_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<WasteOverview>, sqlx::Error> {
        let query = format!(
            "SELECT {DISPOSAL_JOIN_COLUMNS} \
             FROM waste w \
             JOIN categories c ON c.id = w.category_id \
             LEFT JOIN disposals d ON d.waste_id = w.id \
             WHERE w.id = $1 \
             ORDER BY d.id"
        );
        let rows = sqlx::query_as::<_, WasteDisposalRow>(&query)
            .bind(id)
            .fetch_all(pool)
            .await?;
        Ok(aggregate_one(rows))
    }

    // -----------------------------------------------------------------------
    // Recycling tips
    // -----------------------------------------------------------------------

    /// List every waste item with its recycling tips.
    pub async fn list_with_tips(pool: &PgPool) -> Result<Vec<WasteWithTips>, sqlx::Error> {
        let query = format!(
            "SELECT {TIP_JOIN_COLUMNS} \
             FROM waste w \
             JOIN categories c ON c.id = w.category_id \
             LEFT JOIN recycling_tips rt ON rt.waste_id = w.id \
             ORDER BY w.id, rt.id"
        );
        let rows = sqlx::query_as::<_, WasteTipRow>(&query)
            .fetch_all(pool)
            .await?;

        let row_count = rows.len();
        let waste = aggregate(rows);
        tracing::debug!(row_count, waste = waste.len(), "Aggregated waste tips");
        Ok(waste)
    }

    /// Find a single waste item with its recycling tips.
    ///
    /// Returns `None` if no waste item with the given `id` exists.
    pub async fn find_with_tips_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<WasteWithTips>, sqlx::Error> {
        let query = format!(
            "SELECT {TIP_JOIN_COLUMNS} \
             FROM waste w \
             JOIN categories c ON c.id = w.category_id \
             LEFT JOIN recycling_tips rt ON rt.waste_id = w.id \
             WHERE w.id = $1 \
             ORDER BY rt.id"
        );
        let rows = sqlx::query_as::<_, WasteTipRow>(&query)
            .bind(id)
            .fetch_all(pool)
            .await?;
        Ok(aggregate_one(rows))
    }
}
