//! Recycling tip entity model and DTOs.
//!
//! A tip belongs to a category, a waste item, both or neither.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use waste_sorting_core::types::{DbId, Timestamp};

/// A row from the `recycling_tips` table.
///
/// Also the child record of the category and waste tip aggregates, where the
/// tip columns come from the nullable side of a `LEFT JOIN`; `last_updated`
/// is therefore optional even though stored rows always carry one.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct RecyclingTip {
    pub id: DbId,
    pub title: String,
    pub tip: String,
    pub category_id: Option<DbId>,
    pub waste_id: Option<DbId>,
    pub last_updated: Option<Timestamp>,
}

/// DTO for creating a new recycling tip.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRecyclingTip {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "Tip must not be empty"))]
    pub tip: String,
    pub category_id: Option<DbId>,
    pub waste_id: Option<DbId>,
}

/// DTO for updating an existing recycling tip. Only non-`None` fields are applied.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateRecyclingTip {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "Tip must not be empty"))]
    pub tip: Option<String>,
    pub category_id: Option<DbId>,
    pub waste_id: Option<DbId>,
}
