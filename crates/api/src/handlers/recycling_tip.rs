//! Handlers for the `/recycling-tips` resource.
//!
//! A tip may belong to a category, a waste item, both or neither.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use waste_sorting_core::error::CoreError;
use waste_sorting_core::types::DbId;
use waste_sorting_core::validation::validate_input;
use waste_sorting_db::models::recycling_tip::{CreateRecyclingTip, UpdateRecyclingTip};
use waste_sorting_db::repositories::RecyclingTipRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/recycling-tips
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let tips = RecyclingTipRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: tips }))
}

/// POST /api/v1/recycling-tips
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateRecyclingTip>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;
    let tip = RecyclingTipRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: tip })))
}

/// GET /api/v1/recycling-tips/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let tip = RecyclingTipRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "RecyclingTip",
            id,
        }))?;
    Ok(Json(DataResponse { data: tip }))
}

/// PUT /api/v1/recycling-tips/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateRecyclingTip>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;
    let tip = RecyclingTipRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "RecyclingTip",
            id,
        }))?;
    Ok(Json(DataResponse { data: tip }))
}

/// DELETE /api/v1/recycling-tips/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = RecyclingTipRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "RecyclingTip",
            id,
        }))
    }
}
