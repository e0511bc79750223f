//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Optional `?category=<name>` filter for waste listings.
///
/// Matching is case-insensitive; an absent or blank value means no filter.
#[derive(Debug, Default, Deserialize)]
pub struct CategoryFilterParams {
    pub category: Option<String>,
}

impl CategoryFilterParams {
    /// The filter value, or `None` when absent or blank.
    pub fn category(&self) -> Option<&str> {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}
