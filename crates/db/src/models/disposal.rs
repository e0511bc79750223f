//! Disposal method entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use waste_sorting_core::types::{DbId, Timestamp};

/// A row from the `disposals` table.
///
/// Doubles as the child record of [`WasteOverview`](super::waste::WasteOverview),
/// hence the optional `last_updated`.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Disposal {
    pub id: DbId,
    pub waste_id: DbId,
    pub method: String,
    pub instructions: String,
    pub location: String,
    pub last_updated: Option<Timestamp>,
}

/// DTO for creating a new disposal method.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateDisposal {
    pub waste_id: DbId,
    #[validate(length(min = 1, message = "Disposal method must not be empty"))]
    pub method: String,
    #[validate(length(
        min = 10,
        max = 255,
        message = "Disposal instructions must be between 10 and 255 characters"
    ))]
    pub instructions: String,
    #[validate(length(min = 1, message = "Disposal location must not be empty"))]
    pub location: String,
}

/// DTO for updating an existing disposal method. Only non-`None` fields are applied.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateDisposal {
    pub waste_id: Option<DbId>,
    #[validate(length(min = 1, message = "Disposal method must not be empty"))]
    pub method: Option<String>,
    #[validate(length(
        min = 10,
        max = 255,
        message = "Disposal instructions must be between 10 and 255 characters"
    ))]
    pub instructions: Option<String>,
    #[validate(length(min = 1, message = "Disposal location must not be empty"))]
    pub location: Option<String>,
}
