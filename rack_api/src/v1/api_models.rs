use rack_core::query::ListedRack;
use rack_core::{
    DistrictFilter, MapMarker, Pagination, Rack, RackId, RackPage, RackQuery, ResolvedFavorite,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RackSummaryDto {
    #[serde(flatten)]
    pub rack: Rack,
    pub is_favorite: bool,
}

impl From<ListedRack<'_>> for RackSummaryDto {
    fn from(listed: ListedRack<'_>) -> Self {
        Self {
            rack: listed.rack.clone(),
            is_favorite: listed.is_favorite,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RackPageDto {
    pub query: String,
    pub district: DistrictFilter,
    #[serde(flatten)]
    pub pagination: Pagination,
    pub has_previous: bool,
    pub has_next: bool,
    pub items: Vec<RackSummaryDto>,
}

impl RackPageDto {
    pub fn new(query: &RackQuery, page: RackPage<'_>) -> Self {
        Self {
            query: query.text.clone(),
            district: query.district.clone(),
            pagination: page.pagination,
            has_previous: page.pagination.has_previous(),
            has_next: page.pagination.has_next(),
            items: page.items.into_iter().map(RackSummaryDto::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RackDetailDto {
    #[serde(flatten)]
    pub rack: Rack,
    pub is_favorite: bool,
    pub marker: Option<MapMarker>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteDto {
    pub rack_id: RackId,
    pub memo: String,
    pub rack: Rack,
}

impl From<ResolvedFavorite<'_>> for FavoriteDto {
    fn from(fav: ResolvedFavorite<'_>) -> Self {
        Self {
            rack_id: fav.rack_id.clone(),
            memo: fav.memo.to_string(),
            rack: fav.rack.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedDto {
    pub id: RackId,
}

#[derive(Debug, Deserialize)]
pub struct MemoBody {
    pub memo: String,
}
