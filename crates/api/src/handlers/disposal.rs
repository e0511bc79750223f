//! Handlers for the `/disposals` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use waste_sorting_core::error::CoreError;
use waste_sorting_core::types::DbId;
use waste_sorting_core::validation::validate_input;
use waste_sorting_db::models::disposal::{CreateDisposal, UpdateDisposal};
use waste_sorting_db::repositories::DisposalRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/disposals
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let disposals = DisposalRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: disposals }))
}

/// POST /api/v1/disposals
///
/// `waste_id` must reference an existing waste item.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateDisposal>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;
    let disposal = DisposalRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: disposal })))
}

/// GET /api/v1/disposals/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let disposal = DisposalRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Disposal",
            id,
        }))?;
    Ok(Json(DataResponse { data: disposal }))
}

/// PUT /api/v1/disposals/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateDisposal>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;
    let disposal = DisposalRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Disposal",
            id,
        }))?;
    Ok(Json(DataResponse { data: disposal }))
}

/// DELETE /api/v1/disposals/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = DisposalRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Disposal",
            id,
        }))
    }
}
