//! Route definitions for waste items.

use axum::routing::get;
use axum::Router;

use crate::handlers::waste;
use crate::state::AppState;

/// Routes mounted at `/waste`.
///
/// ```text
/// GET    /?category=              -> list
/// POST   /                        -> create
/// GET    /overview?category=      -> list_overviews
/// GET    /recycling-tips          -> list_with_tips
/// GET    /{id}                    -> get_by_id
/// PUT    /{id}                    -> update
/// DELETE /{id}                    -> delete
/// GET    /{id}/overview           -> get_overview
/// GET    /{id}/recycling-tips     -> get_with_tips
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(waste::list).post(waste::create))
        .route("/overview", get(waste::list_overviews))
        .route("/recycling-tips", get(waste::list_with_tips))
        .route(
            "/{id}",
            get(waste::get_by_id).put(waste::update).delete(waste::delete),
        )
        .route("/{id}/overview", get(waste::get_overview))
        .route("/{id}/recycling-tips", get(waste::get_with_tips))
}
