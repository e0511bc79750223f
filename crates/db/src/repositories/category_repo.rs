//! Repository for the `categories` table and its recycling tips.

use sqlx::PgPool;
use waste_sorting_core::aggregate::{aggregate, aggregate_one};
use waste_sorting_core::types::DbId;
use waste_sorting_core::validation::normalize_category_name;

use crate::models::category::{
    Category, CategoryTipRow, CategoryWithTips, CreateCategory, UpdateCategory,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, last_updated";

/// Aliased projection of `categories c LEFT JOIN recycling_tips rt`.
const TIP_JOIN_COLUMNS: &str = "c.id AS category_id, \
    c.name AS category_name, \
    c.description AS category_description, \
    rt.id AS tip_id, \
    rt.title AS tip_title, \
    rt.tip AS tip_body, \
    rt.waste_id AS tip_waste_id, \
    rt.last_updated AS tip_last_updated";

/// Provides CRUD operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a new category, returning the created row.
    ///
    /// The name is normalized to lowercase before it is stored.
    pub async fn create(pool: &PgPool, input: &CreateCategory) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (name, description, last_updated) \
             VALUES ($1, $2, NOW()) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(normalize_category_name(&input.name))
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a category by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all categories ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY id");
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }

    /// Update a category. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCategory,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!(
            "UPDATE categories SET \
                name = COALESCE($2, name), \
                description = COALESCE($3, description), \
                last_updated = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(input.name.as_deref().map(normalize_category_name))
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a category by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Recycling tips
    // -----------------------------------------------------------------------

    /// List every category with its recycling tips.
    ///
    /// Categories without tips are included with an empty list.
    pub async fn list_with_tips(pool: &PgPool) -> Result<Vec<CategoryWithTips>, sqlx::Error> {
        let query = format!(
            "SELECT {TIP_JOIN_COLUMNS} \
             FROM categories c \
             LEFT JOIN recycling_tips rt ON rt.category_id = c.id \
             ORDER BY c.id, rt.id"
        );
        let rows = sqlx::query_as::<_, CategoryTipRow>(&query)
            .fetch_all(pool)
            .await?;

        let row_count = rows.len();
        let categories = aggregate(rows);
        tracing::debug!(row_count, categories = categories.len(), "Aggregated category tips");
        Ok(categories)
    }

    /// Find a single category with its recycling tips.
    ///
    /// Returns `None` if no category with the given `id` exists.
    pub async fn find_with_tips_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<CategoryWithTips>, sqlx::Error> {
        let query = format!(
            "SELECT {TIP_JOIN_COLUMNS} \
             FROM categories c \
             LEFT JOIN recycling_tips rt ON rt.category_id = c.id \
             WHERE c.id = $1 \
             ORDER BY rt.id"
        );
        let rows = sqlx::query_as::<_, CategoryTipRow>(&query)
            .bind(id)
            .fetch_all(pool)
            .await?;
        Ok(aggregate_one(rows))
    }
}
