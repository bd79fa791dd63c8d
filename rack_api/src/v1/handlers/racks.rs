use crate::state::AppState;
use crate::v1::api_models::{CreatedDto, RackDetailDto, RackPageDto};
use crate::v1::error::ApiError;
use crate::v1::handlers::parse_id;
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use rack_core::dates;
use rack_core::{DistrictFilter, Outcome, RackDetails, RackQuery};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub district: DistrictFilter,
    /// Signed so that `page=0` or `page=-1` reach the clamp instead of failing
    /// extraction.
    pub page: Option<i64>,
}

impl ListParams {
    /// Requested page, at least 1. The upper bound is clamped by the engine.
    pub fn page(&self) -> usize {
        let page = self.page.unwrap_or(1).max(1);
        usize::try_from(page).unwrap_or(usize::MAX)
    }
}

pub async fn list_racks(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<RackPageDto>, ApiError> {
    let page = params.page();
    let query = RackQuery::new(params.q, params.district);
    state
        .read(|store| RackPageDto::new(&query, store.query(&query, page)))
        .map(Json)
}

pub async fn list_districts(
    State(state): State<AppState>,
) -> Result<Json<Vec<DistrictFilter>>, ApiError> {
    state.read(|store| store.district_facets()).map(Json)
}

pub async fn get_rack(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RackDetailDto>, ApiError> {
    let id = parse_id(&id)?;
    state
        .read(|store| {
            store.get(&id).map(|rack| RackDetailDto {
                rack: rack.clone(),
                is_favorite: store.is_favorite(&id),
                marker: rack.marker(),
            })
        })?
        .map(Json)
        .ok_or(ApiError::RackNotFound(id))
}

pub async fn create_rack(
    State(state): State<AppState>,
    Json(mut draft): Json<RackDetails>,
) -> Result<(StatusCode, Json<CreatedDto>), ApiError> {
    draft.updated_at = dates::today();
    let id = state.write(|store| store.create(draft))??;
    Ok((StatusCode::CREATED, Json(CreatedDto { id })))
}

pub async fn update_rack(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(mut draft): Json<RackDetails>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    draft.updated_at = dates::today();
    match state.write(|store| store.update(&id, draft))?? {
        Outcome::NotFound => Err(ApiError::RackNotFound(id)),
        Outcome::Applied | Outcome::Unchanged => Ok(StatusCode::NO_CONTENT),
    }
}

pub async fn delete_rack(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    match state.write(|store| store.delete(&id))? {
        Outcome::NotFound => Err(ApiError::RackNotFound(id)),
        Outcome::Applied | Outcome::Unchanged => Ok(StatusCode::NO_CONTENT),
    }
}
