//! Route definitions for recycling tips.

use axum::routing::get;
use axum::Router;

use crate::handlers::recycling_tip;
use crate::state::AppState;

/// Routes mounted at `/recycling-tips`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(recycling_tip::list).post(recycling_tip::create))
        .route(
            "/{id}",
            get(recycling_tip::get_by_id)
                .put(recycling_tip::update)
                .delete(recycling_tip::delete),
        )
}
