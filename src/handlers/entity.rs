//! Generic entity read handlers, instantiated once per entity at route
//! registration.

use crate::entity::Entity;
use crate::error::ApiError;
use crate::repository::Repository;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};

/// List every stored row as a bare JSON array. An empty table is an empty
/// array, never an error.
pub async fn list<E: Entity>(State(state): State<AppState>) -> Result<Json<Vec<E>>, ApiError> {
    let rows = Repository::list::<E>(&state.pool).await?;
    Ok(Json(rows))
}

/// Look up one row by primary key. Lookup failure is the not-found error,
/// not an empty success. A non-integer id segment is rejected by the Path
/// extractor before this runs.
pub async fn get_by_id<E: Entity>(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<E>, ApiError> {
    Repository::get_by_id::<E>(&state.pool, id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound(E::DISPLAY))
}
