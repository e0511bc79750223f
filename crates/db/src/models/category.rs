//! Category entity model, DTOs and the category-with-tips aggregate.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use waste_sorting_core::aggregate::{HasChildren, JoinRow};
use waste_sorting_core::types::{DbId, Timestamp};
use waste_sorting_core::validation::normalize_category_name;

use super::recycling_tip::RecyclingTip;

/// A row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub last_updated: Timestamp,
}

/// DTO for creating a new category. The name is stored lowercase.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCategory {
    #[validate(length(min = 3, max = 100, message = "Name must be between 3 and 100 characters"))]
    pub name: String,
    #[validate(length(
        min = 10,
        max = 200,
        message = "Description must be between 10 and 200 characters"
    ))]
    pub description: String,
}

/// DTO for updating an existing category. Only non-`None` fields are applied.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCategory {
    #[validate(length(min = 3, max = 100, message = "Name must be between 3 and 100 characters"))]
    pub name: Option<String>,
    #[validate(length(
        min = 10,
        max = 200,
        message = "Description must be between 10 and 200 characters"
    ))]
    pub description: Option<String>,
}

impl CreateCategory {
    /// Apply the stored form of the name so the length rules see what is
    /// actually persisted.
    pub fn normalized(mut self) -> Self {
        self.name = normalize_category_name(&self.name);
        self
    }
}

impl UpdateCategory {
    /// See [`CreateCategory::normalized`].
    pub fn normalized(mut self) -> Self {
        self.name = self.name.as_deref().map(normalize_category_name);
        self
    }
}

/// A category together with the recycling tips attached to it.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryWithTips {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub recycling_tips: Vec<RecyclingTip>,
}

impl HasChildren for CategoryWithTips {
    type Child = RecyclingTip;

    fn children_mut(&mut self) -> &mut Vec<RecyclingTip> {
        &mut self.recycling_tips
    }
}

/// One row of `categories LEFT JOIN recycling_tips`.
///
/// The `tip_*` columns are null when the category has no tips.
#[derive(Debug, Clone, FromRow)]
pub struct CategoryTipRow {
    pub category_id: DbId,
    pub category_name: String,
    pub category_description: String,
    pub tip_id: Option<DbId>,
    pub tip_title: Option<String>,
    pub tip_body: Option<String>,
    pub tip_waste_id: Option<DbId>,
    pub tip_last_updated: Option<Timestamp>,
}

impl JoinRow for CategoryTipRow {
    type Key = DbId;
    type Child = RecyclingTip;
    type Parent = CategoryWithTips;

    fn parent_key(&self) -> DbId {
        self.category_id
    }

    fn to_parent(&self) -> CategoryWithTips {
        CategoryWithTips {
            id: self.category_id,
            name: self.category_name.clone(),
            description: self.category_description.clone(),
            recycling_tips: Vec::new(),
        }
    }

    fn into_child(self) -> Option<RecyclingTip> {
        let id = self.tip_id?;
        Some(RecyclingTip {
            id,
            title: self.tip_title.unwrap_or_default(),
            tip: self.tip_body.unwrap_or_default(),
            category_id: Some(self.category_id),
            waste_id: self.tip_waste_id,
            last_updated: self.tip_last_updated,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn padded_short_name_fails_after_normalizing() {
        let input = CreateCategory {
            name: "  ab  ".to_string(),
            description: "Bottles and containers".to_string(),
        }
        .normalized();

        assert_eq!(input.name, "ab");
        assert!(input.validate().is_err());
    }

    #[test]
    fn blank_name_fails_after_normalizing() {
        let create = CreateCategory {
            name: "   ".to_string(),
            description: "Bottles and containers".to_string(),
        }
        .normalized();
        assert!(create.validate().is_err());

        let update = UpdateCategory {
            name: Some("   ".to_string()),
            description: None,
        }
        .normalized();
        assert_eq!(update.name.as_deref(), Some(""));
        assert!(update.validate().is_err());
    }

    #[test]
    fn normalized_name_is_lowercase() {
        let input = CreateCategory {
            name: " E-Waste ".to_string(),
            description: "Phones, cables and batteries".to_string(),
        }
        .normalized();
        assert_eq!(input.name, "e-waste");
        assert!(input.validate().is_ok());

        let untouched = UpdateCategory {
            name: None,
            description: Some("Only the description".to_string()),
        }
        .normalized();
        assert!(untouched.name.is_none());
    }
}
