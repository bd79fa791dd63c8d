use crate::state::AppState;
use crate::v1::api_models::{FavoriteDto, MemoBody};
use crate::v1::error::ApiError;
use crate::v1::handlers::parse_id;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use rack_core::Outcome;

pub async fn list_favorites(
    State(state): State<AppState>,
) -> Result<Json<Vec<FavoriteDto>>, ApiError> {
    state
        .read(|store| {
            store
                .resolved_favorites()
                .into_iter()
                .map(FavoriteDto::from)
                .collect()
        })
        .map(Json)
}

/// `201` for a new favorite, `200` when the rack was already one.
pub async fn add_favorite(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    let outcome = state.write(|store| {
        store
            .get(&id)
            .is_some()
            .then(|| store.add_favorite(id.clone()))
    })?;
    match outcome {
        None => Err(ApiError::RackNotFound(id)),
        Some(Outcome::Applied) => Ok(StatusCode::CREATED),
        Some(Outcome::Unchanged | Outcome::NotFound) => Ok(StatusCode::OK),
    }
}

pub async fn remove_favorite(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    match state.write(|store| store.remove_favorite(&id))? {
        Outcome::NotFound => Err(ApiError::FavoriteNotFound(id)),
        Outcome::Applied | Outcome::Unchanged => Ok(StatusCode::NO_CONTENT),
    }
}

pub async fn update_memo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<MemoBody>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    match state.write(|store| store.update_memo(&id, body.memo))? {
        Outcome::NotFound => Err(ApiError::FavoriteNotFound(id)),
        Outcome::Applied | Outcome::Unchanged => Ok(StatusCode::NO_CONTENT),
    }
}
