pub mod categories;
pub mod disposals;
pub mod health;
pub mod recycling_tips;
pub mod waste;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /categories                              list, create
/// /categories/recycling-tips               all categories with tips
/// /categories/{id}                         get, update, delete
/// /categories/{id}/recycling-tips          one category with tips
///
/// /waste?category=                         list with category
/// /waste/overview?category=                all waste with disposals
/// /waste/recycling-tips                    all waste with tips
/// /waste/{id}                              get, update, delete
/// /waste/{id}/overview                     one waste with disposals
/// /waste/{id}/recycling-tips               one waste with tips
///
/// /disposals                               list, create
/// /disposals/{id}                          get, update, delete
///
/// /recycling-tips                          list, create
/// /recycling-tips/{id}                     get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/categories", categories::router())
        .nest("/waste", waste::router())
        .nest("/disposals", disposals::router())
        .nest("/recycling-tips", recycling_tips::router())
}
