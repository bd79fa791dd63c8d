use crate::state::AppState;
use crate::v1::handlers::favorites::{add_favorite, list_favorites, remove_favorite, update_memo};
use crate::v1::handlers::racks::{
    create_rack, delete_rack, get_rack, list_districts, list_racks, update_rack,
};
use axum::Router;
use axum::routing::{get, put};

pub fn router() -> Router<AppState> {
    Router::<AppState>::new()
        .route("/racks", get(list_racks).post(create_rack))
        .route(
            "/racks/{id}",
            get(get_rack).put(update_rack).delete(delete_rack),
        )
        .route("/districts", get(list_districts))
        .route("/favorites", get(list_favorites))
        .route(
            "/favorites/{id}",
            put(add_favorite).delete(remove_favorite),
        )
        .route("/favorites/{id}/memo", put(update_memo))
}
