pub mod error;
pub mod state;
pub mod v1;

use crate::state::AppState;
use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use rack_core::LoadState;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/v1", v1::router::router())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

pub async fn health_check(State(state): State<AppState>) -> (StatusCode, String) {
    match &*state.session.read() {
        LoadState::Loading => (
            StatusCode::SERVICE_UNAVAILABLE,
            "Rack feed ingestion in progress".to_string(),
        ),
        LoadState::Ready(store) => (
            StatusCode::OK,
            format!("{} racks loaded", store.registry().len()),
        ),
        LoadState::Failed(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Rack feed could not be loaded: {e}"),
        ),
    }
}
