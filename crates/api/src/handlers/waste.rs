//! Handlers for the `/waste` resource.
//!
//! Besides CRUD, waste items have three read shapes: flat with category
//! details, an overview with disposal methods, and a view with recycling tips.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use waste_sorting_core::error::CoreError;
use waste_sorting_core::types::DbId;
use waste_sorting_core::validation::validate_input;
use waste_sorting_db::models::waste::{CreateWaste, UpdateWaste};
use waste_sorting_db::repositories::WasteRepo;

use crate::error::{AppError, AppResult};
use crate::query::CategoryFilterParams;
use crate::response::DataResponse;
use crate::state::AppState;

const ENTITY: &str = "Waste";

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

/// GET /api/v1/waste?category=<name>
///
/// List waste items with their category name and description.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<CategoryFilterParams>,
) -> AppResult<impl IntoResponse> {
    let waste = WasteRepo::list_with_category(&state.pool, params.category()).await?;
    Ok(Json(DataResponse { data: waste }))
}

/// POST /api/v1/waste
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateWaste>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;
    let waste = WasteRepo::create(&state.pool, &input).await?;
    tracing::info!(waste_id = waste.id, category_id = waste.category_id, "Waste created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: waste })))
}

/// GET /api/v1/waste/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let waste = WasteRepo::find_with_category_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: waste }))
}

/// PUT /api/v1/waste/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateWaste>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;
    let waste = WasteRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: waste }))
}

/// DELETE /api/v1/waste/{id}
///
/// Disposals and recycling tips attached to the item go with it.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if WasteRepo::delete(&state.pool, id).await? {
        tracing::info!(waste_id = id, "Waste deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

// ---------------------------------------------------------------------------
// Aggregated reads
// ---------------------------------------------------------------------------

/// GET /api/v1/waste/overview?category=<name>
pub async fn list_overviews(
    State(state): State<AppState>,
    Query(params): Query<CategoryFilterParams>,
) -> AppResult<impl IntoResponse> {
    let overviews = WasteRepo::list_overviews(&state.pool, params.category()).await?;
    Ok(Json(DataResponse { data: overviews }))
}

/// GET /api/v1/waste/{id}/overview
pub async fn get_overview(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let overview = WasteRepo::find_overview_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: overview }))
}

/// GET /api/v1/waste/recycling-tips
pub async fn list_with_tips(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let waste = WasteRepo::list_with_tips(&state.pool).await?;
    Ok(Json(DataResponse { data: waste }))
}

/// GET /api/v1/waste/{id}/recycling-tips
pub async fn get_with_tips(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let waste = WasteRepo::find_with_tips_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: waste }))
}
