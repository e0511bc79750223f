//! Route definitions for disposal methods.

use axum::routing::get;
use axum::Router;

use crate::handlers::disposal;
use crate::state::AppState;

/// Routes mounted at `/disposals`.
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
        .route("/", get(disposal::list).post(disposal::create))
        .route(
            "/{id}",
            get(disposal::get_by_id)
                .put(disposal::update)
                .delete(disposal::delete),
        )
}
