//! Waste item entity model, DTOs and its joined read models.
//!
//! Waste items are read in three joined shapes:
//! - [`WasteWithCategory`]: flat, one row per item
//! - [`WasteOverview`]: item plus its disposal methods
//! - [`WasteWithTips`]: item plus its recycling tips

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use waste_sorting_core::aggregate::{HasChildren, JoinRow};
use waste_sorting_core::types::{DbId, Timestamp};

use super::disposal::Disposal;
use super::recycling_tip::RecyclingTip;

/// A row from the `waste` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Waste {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub category_id: DbId,
    pub last_updated: Timestamp,
}

/// DTO for creating a new waste item.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateWaste {
    #[validate(length(min = 1, message = "Waste name must not be empty"))]
    pub name: String,
    #[validate(length(
        min = 10,
        max = 200,
        message = "Waste description must be between 10 and 200 characters"
    ))]
    pub description: String,
    pub category_id: DbId,
}

/// DTO for updating an existing waste item. Only non-`None` fields are applied.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateWaste {
    #[validate(length(min = 1, message = "Waste name must not be empty"))]
    pub name: Option<String>,
    #[validate(length(
        min = 10,
        max = 200,
        message = "Waste description must be between 10 and 200 characters"
    ))]
    pub description: Option<String>,
    pub category_id: Option<DbId>,
}

/// A waste item with its category's name and description inlined.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WasteWithCategory {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub category_name: String,
    pub category_description: String,
}

// ---------------------------------------------------------------------------
// Waste overview (waste + disposals)
// ---------------------------------------------------------------------------

/// A waste item with its category and every disposal method for it.
#[derive(Debug, Clone, Serialize)]
pub struct WasteOverview {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub category_name: String,
    pub category_description: String,
    pub disposals: Vec<Disposal>,
}

impl HasChildren for WasteOverview {
    type Child = Disposal;

    fn children_mut(&mut self) -> &mut Vec<Disposal> {
        &mut self.disposals
    }
}

/// One row of `waste JOIN categories LEFT JOIN disposals`.
#[derive(Debug, Clone, FromRow)]
pub struct WasteDisposalRow {
    pub waste_id: DbId,
    pub waste_name: String,
    pub waste_description: String,
    pub category_name: String,
    pub category_description: String,
    pub disposal_id: Option<DbId>,
    pub disposal_waste_id: Option<DbId>,
    pub disposal_method: Option<String>,
    pub disposal_instructions: Option<String>,
    pub disposal_location: Option<String>,
    pub disposal_last_updated: Option<Timestamp>,
}

impl JoinRow for WasteDisposalRow {
    type Key = DbId;
    type Child = Disposal;
    type Parent = WasteOverview;

    fn parent_key(&self) -> DbId {
        self.waste_id
    }

    fn to_parent(&self) -> WasteOverview {
        WasteOverview {
            id: self.waste_id,
            name: self.waste_name.clone(),
            description: self.waste_description.clone(),
            category_name: self.category_name.clone(),
            category_description: self.category_description.clone(),
            disposals: Vec::new(),
        }
    }

    fn into_child(self) -> Option<Disposal> {
        let id = self.disposal_id?;
        Some(Disposal {
            id,
            waste_id: self.disposal_waste_id.unwrap_or(self.waste_id),
            method: self.disposal_method.unwrap_or_default(),
            instructions: self.disposal_instructions.unwrap_or_default(),
            location: self.disposal_location.unwrap_or_default(),
            last_updated: self.disposal_last_updated,
        })
    }
}

// ---------------------------------------------------------------------------
// Waste with recycling tips
// ---------------------------------------------------------------------------

/// A waste item with its category name and the recycling tips attached to it.
#[derive(Debug, Clone, Serialize)]
pub struct WasteWithTips {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub category_name: String,
    pub recycling_tips: Vec<RecyclingTip>,
}

impl HasChildren for WasteWithTips {
    type Child = RecyclingTip;

    fn children_mut(&mut self) -> &mut Vec<RecyclingTip> {
        &mut self.recycling_tips
    }
}

/// One row of `waste JOIN categories LEFT JOIN recycling_tips`.
#[derive(Debug, Clone, FromRow)]
pub struct WasteTipRow {
    pub waste_id: DbId,
    pub waste_name: String,
    pub waste_description: String,
    pub category_name: String,
    pub tip_id: Option<DbId>,
    pub tip_title: Option<String>,
    pub tip_body: Option<String>,
    pub tip_category_id: Option<DbId>,
    pub tip_last_updated: Option<Timestamp>,
}

impl JoinRow for WasteTipRow {
    type Key = DbId;
    type Child = RecyclingTip;
    type Parent = WasteWithTips;

    fn parent_key(&self) -> DbId {
        self.waste_id
    }

    fn to_parent(&self) -> WasteWithTips {
        WasteWithTips {
            id: self.waste_id,
            name: self.waste_name.clone(),
            description: self.waste_description.clone(),
            category_name: self.category_name.clone(),
            recycling_tips: Vec::new(),
        }
    }

    fn into_child(self) -> Option<RecyclingTip> {
        let id = self.tip_id?;
        Some(RecyclingTip {
            id,
            title: self.tip_title.unwrap_or_default(),
            tip: self.tip_body.unwrap_or_default(),
            category_id: self.tip_category_id,
            waste_id: Some(self.waste_id),
            last_updated: self.tip_last_updated,
        })
    }
}
